//! Virtual keypad scanner
//!
//! A bounded FIFO of key events with the grid id scheme: id 0 is the
//! function key (no grid coordinate), grid keys are numbered row-major
//! from 1. The queue sits behind a `RefCell` so event injection works
//! through a shared reference - on hardware the scanner interrupt fills
//! the queue while the run loop drains it, and simulations mirror that by
//! keeping an injection handle while the loop holds the `Keypad` side.
//! `Keypad` is implemented for `&VirtualKeypad` as well, the shared-bus
//! idiom, so the loop can run against a plain shared reference.

use core::cell::RefCell;

use heapless::Deque;

use tessera_core::{Dimension, KeyEvent, Keypad, KeyState, Point, FUNCTION_KEY};

/// Depth of the pending-event queue
pub const QUEUE_DEPTH: usize = 32;

/// In-memory keypad with a scripted event queue
pub struct VirtualKeypad {
    size: Dimension,
    queue: RefCell<Deque<KeyEvent, QUEUE_DEPTH>>,
}

impl VirtualKeypad {
    /// Create a keypad for a grid of the given size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Dimension::new(width, height),
            queue: RefCell::new(Deque::new()),
        }
    }

    /// Key id of a grid coordinate
    pub fn xy_to_id(&self, xy: Point) -> Option<u16> {
        self.size
            .contains(xy)
            .then(|| 1 + xy.y as u16 * self.size.width + xy.x as u16)
    }

    /// Queue a raw event; a full queue drops it
    pub fn push(&self, event: KeyEvent) {
        if self.queue.borrow_mut().push_back(event).is_err() {
            warn!("keypad queue full, dropped key {}", event.id);
        }
    }

    fn push_at(&self, xy: Point, state: KeyState) {
        if let Some(id) = self.xy_to_id(xy) {
            self.push(KeyEvent::new(id, state));
        }
    }

    /// Queue a press at a grid coordinate
    pub fn press(&self, xy: Point) {
        self.push_at(xy, KeyState::Pressed);
    }

    /// Queue a release at a grid coordinate
    pub fn release(&self, xy: Point) {
        self.push_at(xy, KeyState::Released);
    }

    /// Queue a hold at a grid coordinate
    pub fn hold(&self, xy: Point) {
        self.push_at(xy, KeyState::Hold);
    }

    /// Queue a function-key event
    pub fn function_key(&self, state: KeyState) {
        self.push(KeyEvent::new(FUNCTION_KEY, state));
    }

    /// Number of queued events
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn clear_queue(&self) {
        self.queue.borrow_mut().clear();
    }

    fn dequeue(&self) -> Option<KeyEvent> {
        self.queue.borrow_mut().pop_front()
    }

    fn resolve(&self, id: u16) -> Option<Point> {
        if id == FUNCTION_KEY {
            return None;
        }
        let index = id - 1;
        let xy = Point::new(
            (index % self.size.width) as i16,
            (index / self.size.width) as i16,
        );
        self.size.contains(xy).then_some(xy)
    }
}

impl Keypad for VirtualKeypad {
    fn clear(&mut self) {
        self.clear_queue();
    }

    fn get(&mut self) -> Option<KeyEvent> {
        self.dequeue()
    }

    fn id_to_xy(&self, id: u16) -> Option<Point> {
        self.resolve(id)
    }
}

impl Keypad for &VirtualKeypad {
    fn clear(&mut self) {
        self.clear_queue();
    }

    fn get(&mut self) -> Option<KeyEvent> {
        self.dequeue()
    }

    fn id_to_xy(&self, id: u16) -> Option<Point> {
        self.resolve(id)
    }
}
