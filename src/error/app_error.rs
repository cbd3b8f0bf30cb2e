use crate::infrastructure::remote::http_client::NetworkError;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("网络错误: {message}")]
    Network { message: String },

    #[error("无法识别的发行版: {name}")]
    UnknownDistribution { name: String },

    #[error("验证错误: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("内部错误: {message}")]
    Internal { message: String },
}

/// 应用程序 Result 类型
pub type AppResult<T> = Result<T, AppError>;

/// 便捷的错误创建函数
impl AppError {
    pub fn unknown_distribution(name: &str) -> Self {
        Self::UnknownDistribution {
            name: name.to_string(),
        }
    }

    pub fn unreachable(uri: &str) -> Self {
        Self::Network {
            message: format!("无法访问 {}", uri),
        }
    }

    pub fn validation_failed(field: &str, reason: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        Self::Network {
            message: error.to_string(),
        }
    }
}
