use crate::io::{Action, Key};

/// Tracks and presents the current state of the keyboard's modifiers (Shift/Ctrl/Alt/Super).
#[derive(Default, Clone, Debug)]
pub struct ModState {
    /// Whether either Shift key is currently being held
    pub shift: bool,
    /// Whether either Control key is currently being held
    pub ctrl: bool,
    /// Whether either Alt key is currently being held
    pub alt: bool,
    /// Whether either Super key is currently being held (`super` is a keyword)
    pub super_: bool,
}

impl ModState {
    /// Create a new key state tracker
    pub fn new() -> Self {
        Default::default()
    }

    fn set(&mut self, key: &Key, held: bool) -> bool {
        let flag = if key.is_shift() {
            &mut self.shift
        } else if key.is_ctrl() {
            &mut self.ctrl
        } else if key.is_alt() {
            &mut self.alt
        } else if key.is_super() {
            &mut self.super_
        } else {
            return false;
        };
        *flag = held;
        true
    }

    /// Handle a key press, returning whether this was affected (i.e. whether it was a modifier being pressed)
    pub fn press(&mut self, key: &Key) -> bool {
        self.set(key, true)
    }

    /// Handle a key release, returning whether this was affected (i.e. whether it was a modifier being released)
    pub fn release(&mut self, key: &Key) -> bool {
        self.set(key, false)
    }

    /// Handle an action, returning whether this was affected (i.e. whether it was a modifier being touched)
    pub fn action(&mut self, action: &Action) -> bool {
        match action {
            Action::KeyPress { key } => self.press(key),
            Action::KeyRelease { key } => self.release(key),
            _ => false,
        }
    }

    /// Whether Ctrl, Alt, or Super are held. Meant to be used to check whether the input should be taken as normal
    /// typing or a hotkey.
    pub fn hotkeying(&self) -> bool {
        self.ctrl || self.alt || self.super_
    }
}
