//! Hardware abstraction traits
//!
//! These traits define the interface between the screen core and the
//! device-specific LED surface, keypad scanner, clock, and auxiliary text
//! scroller. All of them are object-safe and infallible: anomalies are
//! sentinel values or no-ops, never panics.

pub mod clock;
pub mod keypad;
pub mod led;
pub mod toast;

pub use clock::Clock;
pub use keypad::Keypad;
pub use led::{Layer, LedDriver};
pub use toast::TextScroll;

/// Borrowed bundle of the collaborators a screen runs against
///
/// The embedding firmware owns the concrete drivers and lends them to
/// [`Ui::run`](crate::ui::Ui::run) for the duration of one screen.
pub struct Platform<'a> {
    /// LED surface and layer allocator
    pub led: &'a mut dyn LedDriver,
    /// Debounced key event source
    pub keypad: &'a mut dyn Keypad,
    /// Monotonic millisecond clock
    pub clock: &'a dyn Clock,
    /// Scrolling-text notification sink
    pub toast: &'a mut dyn TextScroll,
}
