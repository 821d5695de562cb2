//! Keypad scanner trait

use crate::input::KeyEvent;
use crate::types::Point;

/// Trait for the debounced keypad event source
pub trait Keypad {
    /// Drop all queued events
    fn clear(&mut self);

    /// Dequeue the next pending event, if any
    ///
    /// Non-blocking; the run loop drains this until it returns `None` once
    /// per cycle.
    fn get(&mut self) -> Option<KeyEvent>;

    /// Resolve a key id to its grid coordinate
    ///
    /// Returns `None` for keys without a grid position (such as the
    /// function key); events for those keys are dropped by the router.
    fn id_to_xy(&self, id: u16) -> Option<Point>;
}
