//! 发行版名称解析
//!
//! 将用户输入的各种写法（大小写、分隔符、别名）映射到 [`Distribution`]。
//! 只做精确匹配：不去空白、不做大小写折叠，每一种可接受的写法都需要在
//! [`ALIASES`] 中显式列出。

use crate::core::distribution::Distribution;
use std::collections::HashMap;
use std::sync::OnceLock;

use Distribution::*;

/// 别名表，按目标发行版分组
pub const ALIASES: &[(&str, Distribution)] = &[
    ("zulu", Zulu),
    ("ZULU", Zulu),
    ("Zulu", Zulu),
    ("zulucore", Zulu),
    ("ZULUCORE", Zulu),
    ("ZuluCore", Zulu),
    ("zulu_core", Zulu),
    ("ZULU_CORE", Zulu),
    ("Zulu_Core", Zulu),
    ("zulu core", Zulu),
    ("ZULU CORE", Zulu),
    ("Zulu Core", Zulu),
    ("zing", ZuluPrime),
    ("ZING", ZuluPrime),
    ("Zing", ZuluPrime),
    ("prime", ZuluPrime),
    ("PRIME", ZuluPrime),
    ("Prime", ZuluPrime),
    ("zuluprime", ZuluPrime),
    ("ZULUPRIME", ZuluPrime),
    ("ZuluPrime", ZuluPrime),
    ("zulu_prime", ZuluPrime),
    ("ZULU_PRIME", ZuluPrime),
    ("Zulu_Prime", ZuluPrime),
    ("zulu prime", ZuluPrime),
    ("ZULU PRIME", ZuluPrime),
    ("Zulu Prime", ZuluPrime),
    ("aoj", Aoj),
    ("AOJ", Aoj),
    ("aoj_openj9", AojOpenj9),
    ("AOJ_OpenJ9", AojOpenj9),
    ("AOJ_OPENJ9", AojOpenj9),
    ("AOJ OpenJ9", AojOpenj9),
    ("AOJ OPENJ9", AojOpenj9),
    ("aoj openj9", AojOpenj9),
    ("corretto", Corretto),
    ("CORRETTO", Corretto),
    ("Corretto", Corretto),
    ("dragonwell", Dragonwell),
    ("DRAGONWELL", Dragonwell),
    ("Dragonwell", Dragonwell),
    ("graalvm_ce8", GraalvmCe8),
    ("graalvmce8", GraalvmCe8),
    ("GraalVM CE 8", GraalvmCe8),
    ("GraalVMCE8", GraalvmCe8),
    ("GraalVM_CE8", GraalvmCe8),
    ("graalvm_ce11", GraalvmCe11),
    ("graalvmce11", GraalvmCe11),
    ("GraalVM CE 11", GraalvmCe11),
    ("GraalVMCE11", GraalvmCe11),
    ("GraalVM_CE11", GraalvmCe11),
    ("graalvm_ce16", GraalvmCe16),
    ("graalvmce16", GraalvmCe16),
    ("GraalVM CE 16", GraalvmCe16),
    ("GraalVMCE16", GraalvmCe16),
    ("GraalVM_CE16", GraalvmCe16),
    ("graalvm_ce17", GraalvmCe17),
    ("graalvmce17", GraalvmCe17),
    ("GraalVM CE 17", GraalvmCe17),
    ("GraalVMCE17", GraalvmCe17),
    ("GraalVM_CE17", GraalvmCe17),
    ("jetbrains", Jetbrains),
    ("JetBrains", Jetbrains),
    ("JETBRAINS", Jetbrains),
    ("liberica", Liberica),
    ("LIBERICA", Liberica),
    ("Liberica", Liberica),
    ("liberica_native", LibericaNative),
    ("LIBERICA_NATIVE", LibericaNative),
    ("libericaNative", LibericaNative),
    ("LibericaNative", LibericaNative),
    ("liberica native", LibericaNative),
    ("LIBERICA NATIVE", LibericaNative),
    ("Liberica Native", LibericaNative),
    ("mandrel", Mandrel),
    ("MANDREL", Mandrel),
    ("Mandrel", Mandrel),
    ("microsoft", Microsoft),
    ("Microsoft", Microsoft),
    ("MICROSOFT", Microsoft),
    ("Microsoft OpenJDK", Microsoft),
    ("Microsoft Build of OpenJDK", Microsoft),
    ("ojdk_build", OjdkBuild),
    ("OJDK_BUILD", OjdkBuild),
    ("OJDK Build", OjdkBuild),
    ("ojdk build", OjdkBuild),
    ("ojdkbuild", OjdkBuild),
    ("OJDKBuild", OjdkBuild),
    ("openlogic", OpenLogic),
    ("OPENLOGIC", OpenLogic),
    ("OpenLogic", OpenLogic),
    ("open_logic", OpenLogic),
    ("OPEN_LOGIC", OpenLogic),
    ("Open Logic", OpenLogic),
    ("OPEN LOGIC", OpenLogic),
    ("open logic", OpenLogic),
    ("oracle", Oracle),
    ("Oracle", Oracle),
    ("ORACLE", Oracle),
    ("oracle_open_jdk", OracleOpenJdk),
    ("ORACLE_OPEN_JDK", OracleOpenJdk),
    ("oracle_openjdk", OracleOpenJdk),
    ("ORACLE_OPENJDK", OracleOpenJdk),
    ("Oracle_OpenJDK", OracleOpenJdk),
    ("Oracle OpenJDK", OracleOpenJdk),
    ("oracle openjdk", OracleOpenJdk),
    ("ORACLE OPENJDK", OracleOpenJdk),
    ("open_jdk", OracleOpenJdk),
    ("openjdk", OracleOpenJdk),
    ("OpenJDK", OracleOpenJdk),
    ("Open JDK", OracleOpenJdk),
    ("OPEN_JDK", OracleOpenJdk),
    ("open-jdk", OracleOpenJdk),
    ("OPEN-JDK", OracleOpenJdk),
    ("Oracle-OpenJDK", OracleOpenJdk),
    ("oracle-openjdk", OracleOpenJdk),
    ("ORACLE-OPENJDK", OracleOpenJdk),
    ("oracle-open-jdk", OracleOpenJdk),
    ("ORACLE-OPEN-JDK", OracleOpenJdk),
    ("sap_machine", SapMachine),
    ("sapmachine", SapMachine),
    ("SAPMACHINE", SapMachine),
    ("SAP_MACHINE", SapMachine),
    ("SAPMachine", SapMachine),
    ("SAP Machine", SapMachine),
    ("sap-machine", SapMachine),
    ("SAP-Machine", SapMachine),
    ("SAP-MACHINE", SapMachine),
    ("semeru", Semeru),
    ("Semeru", Semeru),
    ("SEMERU", Semeru),
    ("semeru_certified", SemeruCertified),
    ("SEMERU_CERTIFIED", SemeruCertified),
    ("Semeru_Certified", SemeruCertified),
    ("Semeru_certified", SemeruCertified),
    ("semeru certified", SemeruCertified),
    ("SEMERU CERTIFIED", SemeruCertified),
    ("Semeru Certified", SemeruCertified),
    ("Semeru certified", SemeruCertified),
    ("temurin", Temurin),
    ("Temurin", Temurin),
    ("TEMURIN", Temurin),
    ("trava", Trava),
    ("TRAVA", Trava),
    ("Trava", Trava),
    ("trava_openjdk", Trava),
    ("TRAVA_OPENJDK", Trava),
    ("trava openjdk", Trava),
    ("TRAVA OPENJDK", Trava),
    ("kona", Kona),
    ("KONA", Kona),
    ("Kona", Kona),
    ("bisheng", Bisheng),
    ("BISHENG", Bisheng),
    ("BiSheng", Bisheng),
    ("bi_sheng", Bisheng),
    ("BI_SHENG", Bisheng),
    ("bi-sheng", Bisheng),
    ("BI-SHENG", Bisheng),
    ("bi sheng", Bisheng),
    ("Bi Sheng", Bisheng),
    ("BI SHENG", Bisheng),
];

fn alias_map() -> &'static HashMap<&'static str, Distribution> {
    static MAP: OnceLock<HashMap<&'static str, Distribution>> = OnceLock::new();
    MAP.get_or_init(|| ALIASES.iter().copied().collect())
}

/// 将自由文本解析为发行版
///
/// 输入为 `None` 或不在别名表中时返回 `None`，这属于正常结果而不是错误。
pub fn resolve<'a>(text: impl Into<Option<&'a str>>) -> Option<Distribution> {
    let text = text.into()?;
    alias_map().get(text).copied()
}

/// 获取某个发行版的全部可接受写法
pub fn aliases_of(distribution: Distribution) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|(_, target)| *target == distribution)
        .map(|(alias, _)| *alias)
        .collect()
}
