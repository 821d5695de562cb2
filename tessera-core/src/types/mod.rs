//! Plain data types shared across the core
//!
//! Grid geometry, RGB color, and the 16-bit blend fraction used by the
//! cross-fade engine.

pub mod color;
pub mod fract;
pub mod geometry;

pub use color::Color;
pub use fract::Fract16;
pub use geometry::{Dimension, Point};
