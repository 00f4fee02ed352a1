use std::error::Error;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::rich::RichError;

/// Formats RichError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &RichError) -> String {
        let plain = if self.verbose {
            self.format_verbose_plain(error)
        } else {
            self.format_simple_plain(error)
        };

        if self.use_color {
            Self::apply_color(&plain)
        } else {
            plain
        }
    }

    fn format_simple_plain(&self, error: &RichError) -> String {
        let mut output = format!("error[{}]: {}", error.code().as_str(), error.message());

        let context_lines = self.format_context(error);
        if !context_lines.is_empty() {
            output.push('\n');
            output.push_str(&context_lines);
        }

        output
    }

    fn format_verbose_plain(&self, error: &RichError) -> String {
        let mut output = self.format_simple_plain(error);

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", error.code().cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in error.code().remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let source_chain = self.format_source_chain(error);
        if !source_chain.is_empty() {
            output.push_str("\n  |");
            output.push_str(&format!("\n  | Source chain:\n{}", source_chain));
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `tierlabel --help` for more information");

        output
    }

    fn format_context(&self, error: &RichError) -> String {
        let ctx = error.context();
        if ctx.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();

        if let Some(subject) = &ctx.subject {
            lines.push(format!("  --> {}", subject));
        }

        for (key, value) in &ctx.additional {
            lines.push(format!("  --> {}: {}", key, value));
        }

        lines.join("\n")
    }

    fn format_source_chain(&self, error: &RichError) -> String {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn Error + 'static)> = error.source();

        while let Some(err) = current {
            chain.push(format!("  |   - {}", err));
            current = err.source();
        }

        chain.join("\n")
    }

    /// Colors the header line red and leaves the rest as is
    fn apply_color(text: &str) -> String {
        match text.split_once('\n') {
            Some((header, rest)) => format!("{}\n{}", header.red().bold(), rest.dimmed()),
            None => text.red().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rich::ErrorContext;
    use crate::error::{ErrorCode, TierError};
    use crate::instance::ValueKind;

    fn no_color() -> bool {
        false
    }

    fn with_color() -> bool {
        true
    }

    #[test]
    fn simple_format_shows_code_and_message() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RichError::new(ErrorCode::Int001, "boom");
        assert_eq!(formatter.format(&error), "error[INT001]: boom");
    }

    #[test]
    fn simple_format_includes_context() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RichError::from(TierError::InvalidInstance {
            kind: ValueKind::String,
        });
        let output = formatter.format(&error);

        assert!(output.starts_with("error[VAL001]: No \"type\" property on instance"));
        assert!(output.contains("  --> received: string"));
        assert!(!output.contains("Remediation"));
    }

    #[test]
    fn verbose_format_adds_cause_and_remediation() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let error = RichError::new(ErrorCode::Val003, "overflow");
        let output = formatter.format(&error);

        assert!(output.contains("Cause: The counter reached its maximum value"));
        assert!(output.contains("Remediation:"));
        assert!(output.contains("1. Use a smaller start value"));
        assert!(output.contains("tierlabel --help"));
    }

    #[test]
    fn verbose_format_shows_source_chain() {
        let formatter = ErrorFormatter::with_color_detection(true, no_color);
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = RichError::from(TierError::InvalidJson(json_err));

        assert!(formatter.format(&error).contains("Source chain:"));
    }

    #[test]
    fn context_subject_comes_first() {
        let formatter = ErrorFormatter::with_color_detection(false, no_color);
        let error = RichError::new(ErrorCode::Cfg001, "bad").with_context(
            ErrorContext::new()
                .with_additional("value", "xml")
                .with_subject("TIERLABEL_FORMAT"),
        );

        assert_eq!(
            formatter.format(&error),
            "error[CFG001]: bad\n  --> TIERLABEL_FORMAT\n  --> value: xml"
        );
    }

    #[test]
    fn color_wraps_output_in_escape_codes() {
        let formatter = ErrorFormatter::with_color_detection(false, with_color);
        let error = RichError::new(ErrorCode::Int001, "boom");
        let output = formatter.format(&error);

        assert!(output.contains("\x1b["));
        assert!(output.contains("error[INT001]: boom"));
    }
}
