use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(success: usize, failure: usize) -> Self {
        match (success, failure) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} labelled, {} failed", success.green(), f.red()),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} instance(s) labelled", s.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No instances given".to_string(),
            },
        }
    }
}

/// --verbose 時のみ診断メッセージを stderr に出す
pub fn debug(verbose: bool, message: impl std::fmt::Display) {
    if verbose {
        eprintln!("{} {}", "debug:".dimmed(), message);
    }
}
