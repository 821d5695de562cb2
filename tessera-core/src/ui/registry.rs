//! Widget registry
//!
//! Ordered table of (origin, widget) bindings. The registry clones shared
//! widget handles, so one widget may appear at several origins and stays
//! alive for the caller after the screen is gone. Enabled state lives on
//! the widget itself and is queried at draw/dispatch time, never cached
//! per binding.

use alloc::rc::Rc;

use heapless::Vec;

use crate::types::Point;
use crate::widget::SharedWidget;

/// Maximum widget bindings per screen
pub const MAX_BINDINGS: usize = 64;

/// One widget bound at one origin
pub struct Binding<'a> {
    /// Absolute grid origin of the widget's rectangle
    pub origin: Point,
    /// Shared handle to the widget
    pub widget: SharedWidget<'a>,
}

/// Ordered collection of widget bindings
#[derive(Default)]
pub struct WidgetRegistry<'a> {
    bindings: Vec<Binding<'a>, MAX_BINDINGS>,
}

impl<'a> WidgetRegistry<'a> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind a widget at a single origin
    ///
    /// A full table drops the binding (logged, not an error).
    pub fn add(&mut self, widget: &SharedWidget<'a>, origin: Point) {
        let binding = Binding {
            origin,
            widget: Rc::clone(widget),
        };
        if self.bindings.push(binding).is_err() {
            warn!("binding table full, dropped widget at {},{}", origin.x, origin.y);
        }
    }

    /// Bind one widget at several origins in one call
    pub fn add_at(&mut self, widget: &SharedWidget<'a>, origins: &[Point]) {
        for &origin in origins {
            self.add(widget, origin);
        }
    }

    /// Remove every binding
    ///
    /// Widgets themselves survive through the caller's handles.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Iterate bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Binding<'a>> {
        self.bindings.iter()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
