//! Scrolling-text notification trait

use crate::types::Color;

/// Trait for the auxiliary scrolling-text renderer
///
/// Used by the router's toast fallback to surface the screen name when an
/// unoccupied pad is held. Fire-and-forget: the call queues the scroll and
/// returns immediately.
pub trait TextScroll {
    /// Scroll `text` across the surface in `color`
    fn scroll_text(&mut self, text: &str, color: Color);
}
