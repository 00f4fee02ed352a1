use super::*;
use proptest::prelude::*;
use serde_json::json;

/// 予約済みタグ以外の任意の文字列
fn unreserved_tag_strategy() -> impl Strategy<Value = String> {
    ".{0,24}".prop_filter("reserved tag", |s| {
        !matches!(s.as_str(), "top" | "mid" | "low" | "broken")
    })
}

/// unusable フラグとして渡される任意の JSON 値
fn flag_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ]
}

proptest! {
    /// 未知のタグはそのまま返る
    #[test]
    fn prop_unknown_tag_is_identity(tag in unreserved_tag_strategy()) {
        let value = json!({ "type": tag.clone() });
        prop_assert_eq!(classify(&value).unwrap(), tag);
    }

    /// top/mid/low は他の属性に関係なく固定ラベル
    #[test]
    fn prop_fixed_tiers_ignore_flag(
        tag in prop_oneof![Just("top"), Just("mid"), Just("low")],
        flag in flag_strategy()
    ) {
        let expected = classify(&json!({ "type": tag })).unwrap();
        let actual = classify(&json!({ "type": tag, "unusable": flag })).unwrap();
        prop_assert_eq!(actual, expected);
    }

    /// broken は unusable の真偽でのみ分岐する
    #[test]
    fn prop_broken_follows_truthiness(flag in flag_strategy()) {
        let truthy = crate::instance::is_truthy(&flag);
        let actual = classify(&json!({ "type": "broken", "unusable": flag })).unwrap();
        let expected = if truthy { HANDYMAN_DESPERATE } else { HANDYMAN };
        prop_assert_eq!(actual, expected);
    }

    /// 文字列入力は常にエラー
    #[test]
    fn prop_string_input_is_rejected(text in ".{0,32}") {
        prop_assert!(classify(&Value::String(text)).is_err());
    }
}
