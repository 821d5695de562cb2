//! Recording text scroller
//!
//! Captures every toast the router surfaces so tests and simulations can
//! assert on them instead of watching pixels scroll.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tessera_core::{Color, TextScroll};

/// Text scroller that records instead of rendering
#[derive(Debug, Default)]
pub struct ScrollLog {
    entries: Vec<(String, Color)>,
}

impl ScrollLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded scrolls, oldest first
    pub fn entries(&self) -> &[(String, Color)] {
        &self.entries
    }

    /// Number of scrolls recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been scrolled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent scroll, if any
    pub fn last(&self) -> Option<&(String, Color)> {
        self.entries.last()
    }
}

impl TextScroll for ScrollLog {
    fn scroll_text(&mut self, text: &str, color: Color) {
        trace!("scroll '{}'", text);
        self.entries.push((text.to_string(), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut log = ScrollLog::new();
        log.scroll_text("Setup", Color::WHITE);
        log.scroll_text("Mixer", Color::new(0, 0, 255));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].0, "Setup");
        assert_eq!(log.last().unwrap().1, Color::new(0, 0, 255));
    }
}
