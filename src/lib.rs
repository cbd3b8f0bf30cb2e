// 核心模块
pub mod cli;
pub mod core;
pub mod error;
pub mod infrastructure;

pub use cli::*;
pub use error::*;
pub use infrastructure::*;
pub use self::core::distribution::Distribution;
pub use self::core::name_resolver::{aliases_of, resolve};
// 使用命名空间导入常量，避免冲突
pub use self::core::constants as app_constants;
