//! Key events from the pad scanner
//!
//! The keypad driver debounces the physical matrix and queues one
//! [`KeyEvent`] per transition. Events carry the scanner's key id; the
//! driver's [`id_to_xy`](crate::traits::Keypad::id_to_xy) lookup resolves
//! grid keys to coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key id of the dedicated function (exit gesture) key
///
/// The function key sits outside the pad grid and never resolves to a
/// coordinate.
pub const FUNCTION_KEY: u16 = 0;

/// Transition state carried by a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyState {
    /// Key went down
    Pressed,
    /// Key came back up
    Released,
    /// Key has been held past the hold threshold
    Hold,
}

/// A single debounced key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyEvent {
    /// Scanner key id
    pub id: u16,
    /// Transition state
    pub state: KeyState,
}

impl KeyEvent {
    /// Create a new key event
    pub const fn new(id: u16, state: KeyState) -> Self {
        Self { id, state }
    }

    /// Whether this event comes from the function key
    pub const fn is_function_key(&self) -> bool {
        self.id == FUNCTION_KEY
    }
}
