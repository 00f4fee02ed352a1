use std::collections::BTreeMap;

use super::code::ErrorCode;
use super::TierError;

/// Structured context for error display
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// What the error is about (an environment variable, an input value)
    pub subject: Option<String>,
    /// Additional key-value pairs for context (BTreeMap for deterministic ordering)
    pub additional: BTreeMap<String, String>,
}

impl ErrorContext {
    /// Creates a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds an additional key-value pair
    pub fn with_additional(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }

    /// Returns true if the context has any data
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.additional.is_empty()
    }
}

/// Rich error with code, message, and context
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: ErrorContext,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Debug for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("context", &self.context)
            .field("source", &self.source.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

impl RichError {
    /// Creates a new RichError with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Sets the error context
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    /// Sets the source error
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

impl From<TierError> for RichError {
    fn from(err: TierError) -> Self {
        let code = err.code();
        match err {
            TierError::InvalidInstance { kind } => RichError::new(code, err.to_string())
                .with_context(ErrorContext::new().with_additional("received", kind.as_str())),
            TierError::InvalidJson(source) => {
                RichError::new(code, "Malformed JSON instance").with_source(source)
            }
            TierError::PartialFailure { failed, total } => RichError::new(code, err.to_string())
                .with_context(
                    ErrorContext::new()
                        .with_additional("failed", failed.to_string())
                        .with_additional("total", total.to_string()),
                ),
            TierError::InvalidConfig { ref key, .. } => {
                let context = ErrorContext::new().with_subject(key.clone());
                RichError::new(code, err.to_string()).with_context(context)
            }
            TierError::CounterOverflow { .. } | TierError::Output(_) => {
                RichError::new(code, err.to_string())
            }
        }
    }
}

impl std::fmt::Display for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for RichError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::ValueKind;
    use std::error::Error;

    #[test]
    fn rich_error_creation() {
        let error = RichError::new(ErrorCode::Val001, "No type");
        assert_eq!(error.code(), ErrorCode::Val001);
        assert_eq!(error.message(), "No type");
        assert!(error.context().is_empty());
    }

    #[test]
    fn rich_error_display() {
        let error = RichError::new(ErrorCode::Int001, "Something broke");
        assert_eq!(format!("{}", error), "error[INT001]: Something broke");
    }

    #[test]
    fn error_context_builder() {
        let context = ErrorContext::new()
            .with_subject("TIERLABEL_FORMAT")
            .with_additional("key2", "value2")
            .with_additional("key1", "value1");

        assert_eq!(context.subject.as_deref(), Some("TIERLABEL_FORMAT"));
        let keys: Vec<_> = context.additional.keys().collect();
        assert_eq!(keys, ["key1", "key2"]);
    }

    #[test]
    fn from_invalid_instance_records_kind() {
        let error = RichError::from(TierError::InvalidInstance {
            kind: ValueKind::String,
        });
        assert_eq!(error.code(), ErrorCode::Val001);
        assert_eq!(
            error.context().additional.get("received"),
            Some(&"string".to_string())
        );
    }

    #[test]
    fn from_invalid_json_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = RichError::from(TierError::InvalidJson(json_err));
        assert_eq!(error.code(), ErrorCode::Val002);
        assert!(error.source().is_some());
    }

    #[test]
    fn from_invalid_config_sets_subject() {
        let error = RichError::from(TierError::InvalidConfig {
            key: "TIERLABEL_VERBOSE".to_string(),
            value: "maybe".to_string(),
        });
        assert_eq!(error.context().subject.as_deref(), Some("TIERLABEL_VERBOSE"));
    }
}
