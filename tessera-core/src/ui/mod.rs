//! Screen lifecycle and frame rendering
//!
//! A [`Ui`] is one screen: a named collection of widget bindings plus the
//! run loop that drives it. [`Ui::run`] owns the whole lifecycle:
//!
//! 1. Acquire layers (a fresh one if the screen wants its own, otherwise
//!    the currently active shared layer) and clear pending input.
//! 2. Loop: route key events, invoke the per-cycle hook, render if due.
//!    The start cross-fade from the previous layer plays through the first
//!    renders.
//! 3. On exit: end hook, clear input again, blocking fade back to the
//!    previous layer (own-layer screens) or blank the shared layer, then
//!    release what was allocated.
//!
//! Everything is cooperative and single-threaded; `exit` is a flag checked
//! at the top of each iteration.

pub mod control;
pub mod registry;
mod router;

pub use control::{Hook, KeyInterceptor, RunStatus, UiControl};
pub use registry::{Binding, WidgetRegistry, MAX_BINDINGS};

use alloc::boxed::Box;

use heapless::String;

use crate::fade::Crossfade;
use crate::input::KeyEvent;
use crate::timer::Timer;
use crate::traits::{Layer, Platform};
use crate::types::{Color, Point};
use crate::widget::SharedWidget;
use crate::DEFAULT_CROSSFADE_MS;

use control::Hooks;

/// Maximum length of a screen name
pub const MAX_NAME_LEN: usize = 32;

/// One screen of the interface
pub struct Ui<'a> {
    name: String<MAX_NAME_LEN>,
    name_color: Color,
    own_layer: bool,
    ctl: UiControl,
    registry: WidgetRegistry<'a>,
    hooks: Hooks<'a>,
    render_timer: Timer,
    fade: Crossfade,
    prev_layer: Option<Layer>,
    current_layer: Option<Layer>,
}

impl<'a> Ui<'a> {
    /// Create a screen drawing into the currently active shared layer
    ///
    /// The name may be empty; a non-empty name is scrolled as a toast when
    /// the user holds an unoccupied pad. Over-long names are truncated.
    pub fn new(name: &str, name_color: Color) -> Self {
        let mut stored = String::new();
        for c in name.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        Self {
            name: stored,
            name_color,
            own_layer: false,
            ctl: UiControl::new(),
            registry: WidgetRegistry::new(),
            hooks: Hooks::default(),
            render_timer: Timer::new(),
            fade: Crossfade::finished(),
            prev_layer: None,
            current_layer: None,
        }
    }

    /// Choose whether the screen allocates its own layer on start
    ///
    /// Own-layer screens cross-fade in from the previous layer and fade
    /// back out to it on exit; shared-layer screens draw directly into the
    /// active layer and blank it on exit.
    pub fn with_own_layer(mut self, own_layer: bool) -> Self {
        self.own_layer = own_layer;
        self
    }

    /// Screen name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Bind a widget at a single origin
    pub fn add_widget(&mut self, widget: &SharedWidget<'a>, origin: Point) {
        self.registry.add(widget, origin);
    }

    /// Bind one widget at several origins
    pub fn add_widget_at(&mut self, widget: &SharedWidget<'a>, origins: &[Point]) {
        self.registry.add_at(widget, origins);
    }

    /// Remove all widget bindings
    pub fn clear_widgets(&mut self) {
        self.registry.clear();
    }

    /// Widget bindings of this screen
    pub fn widgets(&self) -> &WidgetRegistry<'a> {
        &self.registry
    }

    /// Register the one-time setup hook, run before the first loop cycle
    pub fn on_setup(&mut self, hook: impl FnMut(&mut UiControl) + 'a) {
        self.hooks.setup = Some(Box::new(hook));
    }

    /// Register the per-cycle hook, run every loop iteration and during
    /// the teardown fade wait
    pub fn on_cycle(&mut self, hook: impl FnMut(&mut UiControl) + 'a) {
        self.hooks.cycle = Some(Box::new(hook));
    }

    /// Register the end-of-life hook, run after the loop exits and before
    /// teardown
    pub fn on_end(&mut self, hook: impl FnMut(&mut UiControl) + 'a) {
        self.hooks.end = Some(Box::new(hook));
    }

    /// Register the pre-render hook, run after the frame is cleared
    pub fn on_pre_render(&mut self, hook: impl FnMut(&mut UiControl) + 'a) {
        self.hooks.pre_render = Some(Box::new(hook));
    }

    /// Register the post-render hook, run after widgets have drawn
    pub fn on_post_render(&mut self, hook: impl FnMut(&mut UiControl) + 'a) {
        self.hooks.post_render = Some(Box::new(hook));
    }

    /// Register the key-interception hook
    ///
    /// Returning `true` consumes the event: neither the exit gesture nor
    /// widget dispatch sees it.
    pub fn on_key_intercept(
        &mut self,
        hook: impl FnMut(&mut UiControl, &KeyEvent) -> bool + 'a,
    ) {
        self.hooks.key_intercept = Some(Box::new(hook));
    }

    /// Signal the run loop to exit
    pub fn exit(&mut self) {
        self.ctl.exit();
    }

    /// Allow or suppress the function-key exit gesture
    pub fn allow_exit(&mut self, allow: bool) {
        self.ctl.allow_exit(allow);
    }

    /// Set the periodic render rate; 0 disables periodic rendering
    pub fn set_fps(&mut self, fps: u16) {
        self.ctl.set_fps(fps);
    }

    /// Request one render regardless of the rate gate
    pub fn request_render(&mut self) {
        self.ctl.request_render();
    }

    /// Current run status
    pub fn status(&self) -> RunStatus {
        self.ctl.status()
    }

    /// Run the screen to completion
    ///
    /// Blocks until exit is signaled (function key, hook, or widget code)
    /// and teardown has finished. May be invoked at most once per screen;
    /// the screen's layers are owned by this call for its whole duration.
    pub fn run(&mut self, p: &mut Platform<'_>) {
        info!("ui '{}' starting", self.name.as_str());
        self.ctl.begin();

        if self.own_layer {
            self.prev_layer = Some(p.led.current_layer());
            self.current_layer = Some(p.led.create_layer());
        } else {
            self.prev_layer = None;
            self.current_layer = Some(p.led.current_layer());
        }
        self.fade = Crossfade::new(self.prev_layer, self.current_layer, DEFAULT_CROSSFADE_MS);
        self.render_timer = Timer::starting_now(p.clock);

        p.keypad.clear();
        // First frame renders immediately, independent of the rate gate.
        self.ctl.request_render();

        if let Some(hook) = self.hooks.setup.as_mut() {
            hook(&mut self.ctl);
        }

        while self.ctl.status() == RunStatus::Running {
            self.route_keys(p);
            if let Some(hook) = self.hooks.cycle.as_mut() {
                hook(&mut self.ctl);
            }
            self.render(p);
        }

        if let Some(hook) = self.hooks.end.as_mut() {
            hook(&mut self.ctl);
        }
        self.teardown(p);
        info!("ui '{}' exited", self.name.as_str());
    }

    /// Render one frame if the rate gate or a render request says so
    fn render(&mut self, p: &mut Platform<'_>) {
        let periodic = self.render_timer.tick(p.clock, self.ctl.frame_interval_ms());
        let requested = self.ctl.take_render_request();
        if !periodic && !requested {
            return;
        }

        p.led.fill(Color::BLANK);
        if let Some(hook) = self.hooks.pre_render.as_mut() {
            hook(&mut self.ctl);
        }
        for binding in self.registry.iter() {
            let mut widget = binding.widget.borrow_mut();
            if !widget.is_enabled() {
                continue;
            }
            widget.draw(binding.origin, p.led);
        }
        if let Some(hook) = self.hooks.post_render.as_mut() {
            hook(&mut self.ctl);
        }

        // While the start fade is in flight the blend pushes the frame;
        // afterwards frames push directly.
        if self.own_layer && !self.fade.is_finished() {
            self.fade.drive(p.led, p.clock.millis());
        } else {
            p.led.update();
        }
    }

    /// Release layers, fading back to the previous one if we own a layer
    fn teardown(&mut self, p: &mut Platform<'_>) {
        p.keypad.clear();

        if self.own_layer {
            let mut fade =
                Crossfade::new(self.current_layer, self.prev_layer, DEFAULT_CROSSFADE_MS);
            let Ui { hooks, ctl, .. } = self;
            let mut on_cycle = || {
                if let Some(hook) = hooks.cycle.as_mut() {
                    hook(ctl);
                }
            };
            fade.run_blocking(p.led, p.clock, &mut on_cycle);
            p.led.destroy_layer();
        } else {
            p.led.fill(Color::BLANK);
        }

        self.prev_layer = None;
        self.current_layer = None;
    }
}
