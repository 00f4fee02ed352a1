use crate::error::{Result, TierError};

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 真偽値として取得
    ///
    /// `1/true/yes/on` と `0/false/no/off` を受け付ける（大文字小文字は区別しない）。
    pub fn flag(key: &str) -> Result<Option<bool>> {
        let Some(raw) = Self::get(key) else {
            return Ok(None);
        };

        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(TierError::InvalidConfig {
                key: key.to_string(),
                value: raw,
            }),
        }
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
