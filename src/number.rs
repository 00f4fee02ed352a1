//! 外部の判定関数に依存する数値選択
//!
//! 判定関数は [`Predicate`] として呼び出し側から注入する。
//! テストではクロージャを渡せば結果を固定できる。

/// 判定が真のときの値
pub const LUCKY_NUMBER: u32 = 42;
/// 判定が偽のときの値
pub const UNLUCKY_NUMBER: u32 = 23;

/// 引数なしで真偽を返す外部コラボレーター
///
/// 結果が決定的であることは仮定しない。
pub trait Predicate {
    fn check(&self) -> bool;
}

impl<F> Predicate for F
where
    F: Fn() -> bool,
{
    fn check(&self) -> bool {
        self()
    }
}

/// 乱数による既定の判定
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinFlip;

impl Predicate for CoinFlip {
    fn check(&self) -> bool {
        rand::random::<bool>()
    }
}

/// 判定結果に応じて 42 か 23 を返す（判定は 1 回だけ呼ぶ）
pub fn give_me_a_number(predicate: &impl Predicate) -> u32 {
    if predicate.check() {
        LUCKY_NUMBER
    } else {
        UNLUCKY_NUMBER
    }
}

#[cfg(test)]
#[path = "number_test.rs"]
mod tests;
