//! LED surface driver trait

use crate::types::{Color, Dimension, Fract16, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle to one pixel buffer owned by the LED driver
///
/// Layers form a stack: the base layer (index 0) always exists and is blank
/// when nothing has drawn into it. "No layer" situations are expressed as
/// `Option<Layer>` rather than a sentinel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer(pub u8);

impl Layer {
    /// The always-present blank base layer
    pub const BASE: Layer = Layer(0);
}

/// Trait for the LED surface
///
/// The driver owns the pixel buffers ("layers"). Drawing operations target
/// the current layer; `update` pushes the current layer to the physical
/// surface, and `crossfade` pushes a blend of two layers instead.
pub trait LedDriver {
    /// Grid size of the surface in pads
    fn dimensions(&self) -> Dimension;

    /// The layer drawing operations currently target
    fn current_layer(&self) -> Layer;

    /// Allocate a fresh blank layer and make it current
    ///
    /// Drivers with a bounded layer stack saturate at the top layer instead
    /// of failing.
    fn create_layer(&mut self) -> Layer;

    /// Release the most recently created layer and fall back to the one
    /// below it
    ///
    /// The base layer is never destroyed.
    fn destroy_layer(&mut self);

    /// Fill the current layer with one color
    fn fill(&mut self, color: Color);

    /// Write one pad of the current layer
    ///
    /// Out-of-bounds coordinates are ignored.
    fn set(&mut self, xy: Point, color: Color);

    /// Push the current layer to the physical surface
    fn update(&mut self);

    /// Push a blend of `source` and `target` to the physical surface
    ///
    /// Fraction 0 shows `source` alone, [`Fract16::MAX`] shows `target`
    /// alone.
    fn crossfade(&mut self, source: Layer, target: Layer, fraction: Fract16);
}
