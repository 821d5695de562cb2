//! Monotonic clock trait

/// Trait for the system millisecond clock
///
/// Milliseconds since an arbitrary epoch; wraps at `u32::MAX`. Interval
/// math in the core uses wrapping subtraction, so the rollover is safe.
pub trait Clock {
    /// Current time in milliseconds
    fn millis(&self) -> u32;
}
