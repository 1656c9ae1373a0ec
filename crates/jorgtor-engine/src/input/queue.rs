/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The host wants the loop to stop after the current frame.
    Quit,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// DOM key codes for the bound controls.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const ESCAPE: u32 = 27;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_RIGHT: u32 = 39;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
}

/// Held-key snapshot sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Folds key events into held-key state across frames.
#[derive(Debug, Default)]
pub struct KeyboardState {
    left: bool,
    arrow_left: bool,
    right: bool,
    arrow_right: bool,
    jump: bool,
    arrow_up: bool,
    quit_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: &InputEvent) {
        let (key_code, down) = match *event {
            InputEvent::KeyDown { key_code } => (key_code, true),
            InputEvent::KeyUp { key_code } => (key_code, false),
            InputEvent::Quit => {
                self.quit_requested = true;
                return;
            }
        };
        match key_code {
            keys::A => self.left = down,
            keys::ARROW_LEFT => self.arrow_left = down,
            keys::D => self.right = down,
            keys::ARROW_RIGHT => self.arrow_right = down,
            keys::SPACE => self.jump = down,
            keys::ARROW_UP => self.arrow_up = down,
            keys::ESCAPE => self.quit_requested |= down,
            other => log::trace!("unbound key {}", other),
        }
    }

    /// Apply every pending event in order.
    pub fn apply<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn snapshot(&self) -> InputState {
        InputState {
            left: self.left || self.arrow_left,
            right: self.right || self.arrow_right,
            jump: self.jump || self.arrow_up,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: keys::D });
        q.push(InputEvent::KeyDown { key_code: keys::SPACE });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn held_keys_persist_until_released() {
        let mut kb = KeyboardState::new();
        kb.apply(&[InputEvent::KeyDown { key_code: keys::D }]);
        assert_eq!(kb.snapshot(), InputState { left: false, right: true, jump: false });

        // No events this frame: still held.
        kb.apply(std::iter::empty());
        assert!(kb.snapshot().right);

        kb.apply(&[InputEvent::KeyUp { key_code: keys::D }]);
        assert_eq!(kb.snapshot(), InputState::default());
    }

    #[test]
    fn arrows_and_letters_are_independent() {
        let mut kb = KeyboardState::new();
        kb.apply(&[
            InputEvent::KeyDown { key_code: keys::A },
            InputEvent::KeyDown { key_code: keys::ARROW_LEFT },
            InputEvent::KeyUp { key_code: keys::A },
        ]);
        assert!(kb.snapshot().left);
    }

    #[test]
    fn quit_event_and_escape_request_quit() {
        let mut kb = KeyboardState::new();
        assert!(!kb.quit_requested());
        kb.handle(&InputEvent::Quit);
        assert!(kb.quit_requested());

        let mut kb = KeyboardState::new();
        kb.handle(&InputEvent::KeyDown { key_code: keys::ESCAPE });
        kb.handle(&InputEvent::KeyUp { key_code: keys::ESCAPE });
        assert!(kb.quit_requested());
    }
}
