//! インスタンス記述子の定義
//!
//! 分類器への入力となる `type` タグと `unusable` フラグを型として表現し、
//! JSON 値や CLI 引数からの変換時に検証する。

use crate::error::{Result, TierError};
use serde_json::Value;

/// ティアを示すタグ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tier {
    Top,
    Mid,
    Low,
    Broken,
    /// 既知のタグ以外（元の文字列をそのまま保持）
    ///
    /// 予約済みタグ（top/mid/low/broken）は入れないこと。構築は [`Tier::from_tag`] を使う。
    /// [`Instance::new`] は予約済みタグを持つ `Other` を対応する variant に直す。
    Other(String),
}

impl Tier {
    /// タグ文字列から変換する（大文字小文字は区別する）
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "top" => Tier::Top,
            "mid" => Tier::Mid,
            "low" => Tier::Low,
            "broken" => Tier::Broken,
            other => Tier::Other(other.to_string()),
        }
    }

    /// タグ文字列を取得
    pub fn as_tag(&self) -> &str {
        match self {
            Tier::Top => "top",
            Tier::Mid => "mid",
            Tier::Low => "low",
            Tier::Broken => "broken",
            Tier::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// 分類対象のインスタンス記述子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub tier: Tier,
    /// `broken` の場合のみ意味を持つ
    pub unusable: bool,
}

impl Instance {
    pub fn new(tier: Tier) -> Self {
        let tier = match tier {
            Tier::Other(tag) => Tier::from_tag(&tag),
            known => known,
        };

        Self {
            tier,
            unusable: false,
        }
    }

    /// unusable フラグを設定
    pub fn with_unusable(mut self, unusable: bool) -> Self {
        self.unusable = unusable;
        self
    }

    /// JSON 値から記述子を構築する
    ///
    /// オブジェクトでない値と `type` を持たないオブジェクトは
    /// [`TierError::InvalidInstance`] になる。
    /// 文字列以外の `type`（`null` を含む）は JSON テキストとして `Tier::Other` に入る。
    pub fn from_value(value: &Value) -> Result<Self> {
        let tag = match value.get("type") {
            None => {
                return Err(TierError::InvalidInstance {
                    kind: ValueKind::of(value),
                })
            }
            Some(Value::String(s)) => Tier::from_tag(s),
            Some(other) => Tier::Other(other.to_string()),
        };

        let unusable = value.get("unusable").is_some_and(is_truthy);

        Ok(Self::new(tag).with_unusable(unusable))
    }
}

/// JSON 値の実行時の型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JSON 値の真偽判定
///
/// `false`, `0`, `""`, `null` が偽。空の配列やオブジェクトは真。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// CLI 引数を JSON 値として解釈する
///
/// `{` や `[` で始まる入力は JSON として正しくなければならない。
/// それ以外で JSON として読めない入力は素の文字列として扱う。
pub fn parse_input(raw: &str) -> Result<Value> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }

    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

#[cfg(test)]
#[path = "instance_test.rs"]
mod tests;
