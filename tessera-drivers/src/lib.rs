//! Virtual driver implementations for the Tessera screen core
//!
//! In-memory stand-ins for the device collaborators: a layered LED surface,
//! a queue-backed keypad, manual/system clocks, and a recording text
//! scroller. They implement the full `tessera-core` trait contracts, so a
//! screen runs against them exactly as it would against hardware - which
//! makes them the host-side simulation and integration-test rig.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[macro_use]
mod fmt;

pub mod clock;
pub mod keypad;
pub mod led;
pub mod toast;

pub use clock::ManualClock;
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use keypad::VirtualKeypad;
pub use led::VirtualLed;
pub use toast::ScrollLog;
