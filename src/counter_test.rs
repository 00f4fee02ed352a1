use super::*;

#[test]
fn test_returns_initial_count() {
    assert_eq!(Counter::new(3).count(), 3);
}

#[test]
fn test_default_starts_at_zero() {
    assert_eq!(Counter::default().count(), 0);
}

#[test]
fn test_increment() {
    let mut counter = Counter::new(0);
    assert_eq!(counter.increment().unwrap(), 1);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_increment_from_negative() {
    let mut counter = Counter::new(-1);
    counter.increment().unwrap();
    assert_eq!(counter.count(), 0);
}

// === 境界値テスト ===

#[test]
fn test_increment_overflow_keeps_count() {
    let mut counter = Counter::new(i64::MAX);
    let err = counter.increment().unwrap_err();
    assert!(matches!(err, TierError::CounterOverflow { count: i64::MAX }));
    assert_eq!(counter.count(), i64::MAX);
}
