//! Board-agnostic screen core for grid LED controllers
//!
//! This crate contains the UI run loop logic that does not depend on a
//! specific LED surface or keypad implementation:
//!
//! - Collaborator traits (LED layers, keypad, clock, text scroller)
//! - Screen lifecycle state machine (start, loop, teardown)
//! - Rate-gated frame rendering
//! - Layer cross-fade engine
//! - Key event routing with coordinate hit-testing
//! - Widget trait and registry
//!
//! Everything runs on a single cooperative thread: the embedding firmware
//! calls [`ui::Ui::run`] with its [`traits::Platform`] and the loop drives
//! input, hooks, and rendering until an exit is signaled.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod fade;
pub mod input;
pub mod timer;
pub mod traits;
pub mod types;
pub mod ui;
pub mod widget;

pub use fade::{Crossfade, FadePhase};
pub use input::{KeyEvent, KeyState, FUNCTION_KEY};
pub use timer::Timer;
pub use traits::{Clock, Keypad, Layer, LedDriver, Platform, TextScroll};
pub use types::{Color, Dimension, Fract16, Point};
pub use ui::{RunStatus, Ui, UiControl};
pub use widget::{shared, SharedWidget, Widget};

/// Default frame rate when a screen does not set one explicitly
pub const DEFAULT_FPS: u16 = 60;

/// Default duration of the start/teardown layer cross-fade in milliseconds
pub const DEFAULT_CROSSFADE_MS: u32 = 200;
