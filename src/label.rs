//! ティアラベルの分類器
//!
//! 判定順序（最初に一致したものを採用）:
//! 1. `top` → Premium tier
//! 2. `mid` → Top tier
//! 3. `low` → Value tier
//! 4. `broken` かつ unusable → Handyman's version (for desperates)
//! 5. `broken` → Handyman's version
//! 6. それ以外 → タグ文字列をそのまま返す

use crate::error::Result;
use crate::instance::{Instance, Tier};
use serde_json::Value;
use std::borrow::Cow;

pub const PREMIUM_TIER: &str = "Premium tier";
pub const TOP_TIER: &str = "Top tier";
pub const VALUE_TIER: &str = "Value tier";
pub const HANDYMAN: &str = "Handyman's version";
pub const HANDYMAN_DESPERATE: &str = "Handyman's version (for desperates)";

/// 記述子からラベルを決定する
pub fn label(instance: &Instance) -> Cow<'_, str> {
    match &instance.tier {
        Tier::Top => Cow::Borrowed(PREMIUM_TIER),
        Tier::Mid => Cow::Borrowed(TOP_TIER),
        Tier::Low => Cow::Borrowed(VALUE_TIER),
        Tier::Broken if instance.unusable => Cow::Borrowed(HANDYMAN_DESPERATE),
        Tier::Broken => Cow::Borrowed(HANDYMAN),
        Tier::Other(tag) => Cow::Borrowed(tag.as_str()),
    }
}

/// JSON 値を検証してラベルを返す
///
/// `type` が無い場合は [`crate::error::TierError::InvalidInstance`]。
pub fn classify(value: &Value) -> Result<String> {
    let instance = Instance::from_value(value)?;
    Ok(label(&instance).into_owned())
}

#[cfg(test)]
#[path = "label_test.rs"]
mod tests;

#[cfg(test)]
#[path = "label_proptests.rs"]
mod proptests;
