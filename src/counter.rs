//! カウンター
//!
//! 初期値と increment 操作だけを持つ単純な状態。

use crate::error::{Result, TierError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn new(start: i64) -> Self {
        Self { count: start }
    }

    /// 現在の値を取得
    pub fn count(&self) -> i64 {
        self.count
    }

    /// 1 加算する。上限に達している場合は値を変えずにエラーを返す
    pub fn increment(&mut self) -> Result<i64> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(TierError::CounterOverflow { count: self.count })?;
        Ok(self.count)
    }
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod tests;
