//! Widget trait
//!
//! A widget is anything that occupies a rectangle of pads: it draws itself
//! each frame and may act on key events hit-tested into its rectangle.
//! Concrete widgets live with the embedding application; the core only
//! needs this capability surface.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::input::KeyEvent;
use crate::traits::LedDriver;
use crate::types::{Dimension, Point};

/// Shared handle to a widget
///
/// The screen clones this handle into each binding, so one widget can be
/// bound at several origins and the caller keeps a live handle to inspect
/// or mutate the widget after the screen exits.
pub type SharedWidget<'a> = Rc<RefCell<dyn Widget + 'a>>;

/// Wrap a widget in a [`SharedWidget`] handle
pub fn shared<'a, W: Widget + 'a>(widget: W) -> SharedWidget<'a> {
    Rc::new(RefCell::new(widget))
}

/// Capability surface of a grid widget
pub trait Widget {
    /// Whether the widget currently draws and receives input
    ///
    /// A disabled widget is skipped entirely: no draw call, no hit-test,
    /// at every origin it is bound to.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Size rectangle the widget occupies, anchored at its binding origin
    fn size(&self) -> Dimension;

    /// Draw one frame at the given absolute origin
    fn draw(&mut self, origin: Point, led: &mut dyn LedDriver);

    /// Handle a key event at a widget-relative coordinate
    ///
    /// Returns whether the widget acted on the event. The default ignores
    /// input, for display-only widgets.
    fn on_key(&mut self, xy: Point, event: &KeyEvent) -> bool {
        let _ = (xy, event);
        false
    }
}
