//! Key event routing
//!
//! Drains the keypad queue once per loop cycle and routes each event:
//! interception hook first, then the function-key exit gesture, then
//! coordinate hit-testing against every enabled widget binding. Events
//! without a grid coordinate are dropped. An unhandled Hold on an occupied
//! surface falls back to scrolling the screen name as a toast.

use crate::input::{KeyEvent, KeyState};
use crate::traits::Platform;

use super::Ui;

impl<'a> Ui<'a> {
    /// Drain and route all pending key events
    pub(crate) fn route_keys(&mut self, p: &mut Platform<'_>) {
        while let Some(event) = p.keypad.get() {
            self.route_one(&event, p);
        }
    }

    fn route_one(&mut self, event: &KeyEvent, p: &mut Platform<'_>) {
        // Interception consumes the event outright; routing never sees it.
        if let Some(intercept) = self.hooks.key_intercept.as_mut() {
            if intercept(&mut self.ctl, event) {
                debug!("key {} intercepted", event.id);
                return;
            }
        }

        if event.is_function_key()
            && self.ctl.exit_allowed()
            && event.state == KeyState::Released
        {
            debug!("function key exit");
            self.ctl.exit();
            return;
        }

        let Some(xy) = p.keypad.id_to_xy(event.id) else {
            trace!("no coordinate for key {}, dropped", event.id);
            return;
        };

        let mut handled = false;
        for binding in self.registry.iter() {
            let mut widget = binding.widget.borrow_mut();
            if !widget.is_enabled() {
                continue;
            }
            let relative = xy - binding.origin;
            if widget.size().contains(relative) {
                handled |= widget.on_key(relative, event);
            }
        }

        // Fallback affordance: holding an unoccupied pad scrolls the screen
        // name so the user can tell where they are.
        if !handled
            && event.state == KeyState::Hold
            && !self.name.is_empty()
            && p.led.dimensions().contains(xy)
        {
            p.toast.scroll_text(self.name.as_str(), self.name_color);
        }
    }
}
