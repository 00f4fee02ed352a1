use thiserror::Error;

use crate::instance::ValueKind;

pub mod code;
pub mod formatter;
pub mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::RichError;

/// tierlabel 統一エラー型
#[derive(Debug, Error)]
pub enum TierError {
    #[error("No \"type\" property on instance, instance is of type {kind}.")]
    InvalidInstance { kind: ValueKind },

    #[error("JSON parse error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Counter overflow: cannot increment past {count}")]
    CounterOverflow { count: i64 },

    #[error("{failed} of {total} instance(s) could not be labelled")]
    PartialFailure { failed: usize, total: usize },

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, TierError>;

impl TierError {
    /// 対応するエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            TierError::InvalidInstance { .. } => ErrorCode::Val001,
            TierError::InvalidJson(_) => ErrorCode::Val002,
            TierError::CounterOverflow { .. } => ErrorCode::Val003,
            TierError::PartialFailure { .. } => ErrorCode::Val004,
            TierError::InvalidConfig { .. } => ErrorCode::Cfg001,
            TierError::Output(_) => ErrorCode::Int001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_instance_message() {
        let err = TierError::InvalidInstance {
            kind: ValueKind::String,
        };
        assert_eq!(
            err.to_string(),
            "No \"type\" property on instance, instance is of type string."
        );
    }

    #[test]
    fn test_codes() {
        let err = TierError::PartialFailure {
            failed: 1,
            total: 3,
        };
        assert_eq!(err.code(), ErrorCode::Val004);
        assert_eq!(err.to_string(), "1 of 3 instance(s) could not be labelled");

        let err = TierError::InvalidConfig {
            key: "TIERLABEL_FORMAT".to_string(),
            value: "xml".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::Cfg001);
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TierError = json_err.into();
        assert_eq!(err.code(), ErrorCode::Val002);
    }
}
