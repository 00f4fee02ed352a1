//! 実行時設定
//!
//! 優先順位: CLI フラグ > 環境変数 > デフォルト

use crate::env::EnvVar;
use crate::error::{Result, TierError};
use clap::ValueEnum;

pub const VERBOSE_ENV: &str = "TIERLABEL_VERBOSE";
pub const FORMAT_ENV: &str = "TIERLABEL_FORMAT";

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Plain,
}

/// 解決済みの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// CLI の指定と環境変数から設定を解決する
    pub fn resolve(verbose: bool, format: Option<OutputFormat>) -> Result<Self> {
        let verbose = if verbose {
            true
        } else {
            EnvVar::flag(VERBOSE_ENV)?.unwrap_or(false)
        };

        let format = match format {
            Some(format) => format,
            None => Self::format_from_env()?.unwrap_or_default(),
        };

        Ok(Self { verbose, format })
    }

    fn format_from_env() -> Result<Option<OutputFormat>> {
        let Some(raw) = EnvVar::get(FORMAT_ENV) else {
            return Ok(None);
        };

        OutputFormat::from_str(&raw, true)
            .map(Some)
            .map_err(|_| TierError::InvalidConfig {
                key: FORMAT_ENV.to_string(),
                value: raw,
            })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
