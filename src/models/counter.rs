//! Plain integer counter.

use tracing::debug;

/// Counter state. Unbounded in both directions; saturates at the `i64`
/// limits instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Creates a counter starting at `value`.
    #[must_use]
    pub const fn with_value(value: i64) -> Self {
        Self { value }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Adds one.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        debug!(value = self.value, "counter incremented");
    }

    /// Subtracts one.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
        debug!(value = self.value, "counter decremented");
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.value = 0;
        debug!("counter reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_then_decrement_round_trips() {
        for start in [-7, 0, 1, 42, i64::MIN + 1] {
            let mut counter = Counter::with_value(start);
            counter.increment();
            counter.decrement();
            assert_eq!(counter.value(), start);
        }
    }

    #[test]
    fn test_goes_negative() {
        let mut counter = Counter::new();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), -2);
    }

    #[test]
    fn test_reset() {
        let mut counter = Counter::with_value(-31);
        counter.reset();
        assert_eq!(counter.value(), 0);

        let mut counter = Counter::with_value(9000);
        counter.reset();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_saturates_at_limits() {
        let mut counter = Counter::with_value(i64::MAX);
        counter.increment();
        assert_eq!(counter.value(), i64::MAX);
    }
}
