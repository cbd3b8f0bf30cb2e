use crate::core::name_resolver;
use crate::error::AppError;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// 已知的 JDK 发行版
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    Zulu,
    ZuluPrime,
    Aoj,
    AojOpenj9,
    Corretto,
    Dragonwell,
    GraalvmCe8,
    GraalvmCe11,
    GraalvmCe16,
    GraalvmCe17,
    Jetbrains,
    Liberica,
    LibericaNative,
    Mandrel,
    Microsoft,
    OjdkBuild,
    OpenLogic,
    Oracle,
    OracleOpenJdk,
    SapMachine,
    Semeru,
    SemeruCertified,
    Temurin,
    Trava,
    Kona,
    Bisheng,
}

impl Distribution {
    /// 全部发行版（按声明顺序）
    pub const ALL: [Distribution; 26] = [
        Distribution::Zulu,
        Distribution::ZuluPrime,
        Distribution::Aoj,
        Distribution::AojOpenj9,
        Distribution::Corretto,
        Distribution::Dragonwell,
        Distribution::GraalvmCe8,
        Distribution::GraalvmCe11,
        Distribution::GraalvmCe16,
        Distribution::GraalvmCe17,
        Distribution::Jetbrains,
        Distribution::Liberica,
        Distribution::LibericaNative,
        Distribution::Mandrel,
        Distribution::Microsoft,
        Distribution::OjdkBuild,
        Distribution::OpenLogic,
        Distribution::Oracle,
        Distribution::OracleOpenJdk,
        Distribution::SapMachine,
        Distribution::Semeru,
        Distribution::SemeruCertified,
        Distribution::Temurin,
        Distribution::Trava,
        Distribution::Kona,
        Distribution::Bisheng,
    ];

    pub fn values() -> &'static [Distribution] {
        &Self::ALL
    }

    /// 目录服务查询参数中使用的名称
    pub fn api_name(&self) -> &'static str {
        match self {
            Distribution::Zulu => "zulu",
            Distribution::ZuluPrime => "zulu_prime",
            Distribution::Aoj => "aoj",
            Distribution::AojOpenj9 => "aoj_openj9",
            Distribution::Corretto => "corretto",
            Distribution::Dragonwell => "dragonwell",
            Distribution::GraalvmCe8 => "graalvm_ce8",
            Distribution::GraalvmCe11 => "graalvm_ce11",
            Distribution::GraalvmCe16 => "graalvm_ce16",
            Distribution::GraalvmCe17 => "graalvm_ce17",
            Distribution::Jetbrains => "jetbrains",
            Distribution::Liberica => "liberica",
            Distribution::LibericaNative => "liberica_native",
            Distribution::Mandrel => "mandrel",
            Distribution::Microsoft => "microsoft",
            Distribution::OjdkBuild => "ojdk_build",
            Distribution::OpenLogic => "openlogic",
            Distribution::Oracle => "oracle",
            Distribution::OracleOpenJdk => "oracle_open_jdk",
            Distribution::SapMachine => "sap_machine",
            Distribution::Semeru => "semeru",
            Distribution::SemeruCertified => "semeru_certified",
            Distribution::Temurin => "temurin",
            Distribution::Trava => "trava",
            Distribution::Kona => "kona",
            Distribution::Bisheng => "bisheng",
        }
    }

    /// 展示给用户的名称
    pub fn ui_string(&self) -> &'static str {
        match self {
            Distribution::Zulu => "Zulu",
            Distribution::ZuluPrime => "Zulu Prime",
            Distribution::Aoj => "AOJ",
            Distribution::AojOpenj9 => "AOJ OpenJ9",
            Distribution::Corretto => "Corretto",
            Distribution::Dragonwell => "Dragonwell",
            Distribution::GraalvmCe8 => "GraalVM CE 8",
            Distribution::GraalvmCe11 => "GraalVM CE 11",
            Distribution::GraalvmCe16 => "GraalVM CE 16",
            Distribution::GraalvmCe17 => "GraalVM CE 17",
            Distribution::Jetbrains => "JetBrains",
            Distribution::Liberica => "Liberica",
            Distribution::LibericaNative => "Liberica Native",
            Distribution::Mandrel => "Mandrel",
            Distribution::Microsoft => "Microsoft",
            Distribution::OjdkBuild => "OJDK Build",
            Distribution::OpenLogic => "OpenLogic",
            Distribution::Oracle => "Oracle",
            Distribution::OracleOpenJdk => "Oracle OpenJDK",
            Distribution::SapMachine => "SAP Machine",
            Distribution::Semeru => "Semeru",
            Distribution::SemeruCertified => "Semeru certified",
            Distribution::Temurin => "Temurin",
            Distribution::Trava => "Trava",
            Distribution::Kona => "Kona",
            Distribution::Bisheng => "Bi Sheng",
        }
    }

    /// 从自由文本解析发行版，无法识别时返回 None
    pub fn from_text(text: &str) -> Option<Self> {
        name_resolver::resolve(text)
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ui_string())
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.api_name())
    }
}

impl FromStr for Distribution {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        name_resolver::resolve(s).ok_or_else(|| AppError::unknown_distribution(s))
    }
}
