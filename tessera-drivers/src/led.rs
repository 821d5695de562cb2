//! Virtual layered LED surface
//!
//! Models the layer contract in memory: a stack of pixel buffers with an
//! always-present blank base layer. Drawing targets the top ("current")
//! layer; `update` composites the current layer to the output frame and
//! `crossfade` composites a per-pixel blend of two layers instead. Tests
//! observe the output frame, the push count, and the last blend issued.

use alloc::vec;
use alloc::vec::Vec;

use tessera_core::{Color, Dimension, Fract16, Layer, LedDriver, Point};

/// Maximum depth of the layer stack
pub const MAX_LAYERS: usize = 8;

/// In-memory LED surface
pub struct VirtualLed {
    size: Dimension,
    /// Layer stack; index is the layer id, `[0]` is the base layer
    layers: Vec<Vec<Color>>,
    /// Last frame pushed to the (virtual) physical surface
    output: Vec<Color>,
    updates: u32,
    blend_count: u32,
    last_blend: Option<(Layer, Layer, Fract16)>,
}

impl VirtualLed {
    /// Create a surface of the given grid size with a blank base layer
    pub fn new(width: u16, height: u16) -> Self {
        let size = Dimension::new(width, height);
        let cells = size.area() as usize;
        Self {
            size,
            layers: vec![vec![Color::BLANK; cells]],
            output: vec![Color::BLANK; cells],
            updates: 0,
            blend_count: 0,
            last_blend: None,
        }
    }

    fn index(&self, xy: Point) -> Option<usize> {
        self.size
            .contains(xy)
            .then(|| xy.y as usize * self.size.width as usize + xy.x as usize)
    }

    /// Number of layers currently allocated (including the base layer)
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The last frame pushed to the surface
    pub fn output(&self) -> &[Color] {
        &self.output
    }

    /// Color of one pad in the last pushed frame
    ///
    /// Out-of-bounds coordinates read as blank.
    pub fn output_at(&self, xy: Point) -> Color {
        self.index(xy)
            .map(|i| self.output[i])
            .unwrap_or(Color::BLANK)
    }

    /// Color of one pad in the current layer (not yet pushed)
    pub fn layer_at(&self, xy: Point) -> Color {
        self.index(xy)
            .map(|i| self.layers[self.layers.len() - 1][i])
            .unwrap_or(Color::BLANK)
    }

    /// Number of `update` pushes so far
    pub fn updates(&self) -> u32 {
        self.updates
    }

    /// Number of `crossfade` blends so far
    pub fn blend_count(&self) -> u32 {
        self.blend_count
    }

    /// The most recent blend issued, if any
    pub fn last_blend(&self) -> Option<(Layer, Layer, Fract16)> {
        self.last_blend
    }
}

impl LedDriver for VirtualLed {
    fn dimensions(&self) -> Dimension {
        self.size
    }

    fn current_layer(&self) -> Layer {
        Layer((self.layers.len() - 1) as u8)
    }

    fn create_layer(&mut self) -> Layer {
        if self.layers.len() < MAX_LAYERS {
            let cells = self.size.area() as usize;
            self.layers.push(vec![Color::BLANK; cells]);
        } else {
            warn!("layer stack full, staying on layer {}", self.current_layer().0);
        }
        self.current_layer()
    }

    fn destroy_layer(&mut self) {
        // The base layer is never destroyed
        if self.layers.len() > 1 {
            self.layers.pop();
        }
    }

    fn fill(&mut self, color: Color) {
        let top = self.layers.len() - 1;
        for cell in &mut self.layers[top] {
            *cell = color;
        }
    }

    fn set(&mut self, xy: Point, color: Color) {
        if let Some(i) = self.index(xy) {
            let top = self.layers.len() - 1;
            self.layers[top][i] = color;
        }
    }

    fn update(&mut self) {
        self.output.copy_from_slice(&self.layers[self.layers.len() - 1]);
        self.updates += 1;
    }

    fn crossfade(&mut self, source: Layer, target: Layer, fraction: Fract16) {
        let (Some(src), Some(tgt)) = (
            self.layers.get(source.0 as usize),
            self.layers.get(target.0 as usize),
        ) else {
            warn!("crossfade against unknown layer {} or {}", source.0, target.0);
            return;
        };
        for (out, (a, b)) in self.output.iter_mut().zip(src.iter().zip(tgt.iter())) {
            *out = a.blend(*b, fraction);
        }
        self.blend_count += 1;
        self.last_blend = Some((source, target, fraction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_shows_current_layer() {
        let mut led = VirtualLed::new(4, 4);
        led.set(Point::new(1, 2), Color::new(10, 20, 30));

        // Nothing pushed yet
        assert_eq!(led.output_at(Point::new(1, 2)), Color::BLANK);
        led.update();
        assert_eq!(led.output_at(Point::new(1, 2)), Color::new(10, 20, 30));
        assert_eq!(led.updates(), 1);
    }

    #[test]
    fn test_layer_stack() {
        let mut led = VirtualLed::new(4, 4);
        assert_eq!(led.current_layer(), Layer::BASE);

        let top = led.create_layer();
        assert_eq!(top, Layer(1));
        assert_eq!(led.current_layer(), Layer(1));
        assert_eq!(led.layer_count(), 2);

        // New layer starts blank and draws independently of the base
        led.set(Point::ORIGIN, Color::WHITE);
        led.destroy_layer();
        assert_eq!(led.current_layer(), Layer::BASE);
        led.update();
        assert_eq!(led.output_at(Point::ORIGIN), Color::BLANK);
    }

    #[test]
    fn test_base_layer_survives_destroy() {
        let mut led = VirtualLed::new(2, 2);
        led.destroy_layer();
        led.destroy_layer();
        assert_eq!(led.layer_count(), 1);
    }

    #[test]
    fn test_layer_stack_saturates() {
        let mut led = VirtualLed::new(2, 2);
        for _ in 0..MAX_LAYERS + 3 {
            led.create_layer();
        }
        assert_eq!(led.layer_count(), MAX_LAYERS);
        assert_eq!(led.current_layer(), Layer((MAX_LAYERS - 1) as u8));
    }

    #[test]
    fn test_crossfade_endpoints_and_midpoint() {
        let mut led = VirtualLed::new(2, 1);
        led.fill(Color::new(200, 0, 0)); // base layer red
        led.create_layer();
        led.fill(Color::new(0, 200, 0)); // top layer green

        led.crossfade(Layer(0), Layer(1), Fract16::ZERO);
        assert_eq!(led.output_at(Point::ORIGIN), Color::new(200, 0, 0));

        led.crossfade(Layer(0), Layer(1), Fract16::MAX);
        assert_eq!(led.output_at(Point::ORIGIN), Color::new(0, 200, 0));

        led.crossfade(Layer(0), Layer(1), Fract16(u16::MAX / 2));
        let mid = led.output_at(Point::ORIGIN);
        assert!(mid.r > 90 && mid.r < 110);
        assert!(mid.g > 90 && mid.g < 110);

        assert_eq!(led.blend_count(), 3);
        assert_eq!(
            led.last_blend(),
            Some((Layer(0), Layer(1), Fract16(u16::MAX / 2)))
        );
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut led = VirtualLed::new(2, 2);
        led.set(Point::new(5, 5), Color::WHITE);
        led.set(Point::new(-1, 0), Color::WHITE);
        led.update();
        assert!(led.output().iter().all(|c| c.is_blank()));
    }
}
