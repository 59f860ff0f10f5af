//! The various data types representing what the user does to the form.

/// A key which can be pressed or released in an [`Action`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Key {
    Char(char),
    F(u8),
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Insert,
    Tab,
    Enter,
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,
}

impl Key {
    pub fn is_shift(&self) -> bool {
        matches!(self, Self::LeftShift | Self::RightShift)
    }
    pub fn is_ctrl(&self) -> bool {
        matches!(self, Self::LeftCtrl | Self::RightCtrl)
    }
    pub fn is_alt(&self) -> bool {
        matches!(self, Self::LeftAlt | Self::RightAlt)
    }
    pub fn is_super(&self) -> bool {
        matches!(self, Self::LeftSuper | Self::RightSuper)
    }
}

/// An action the user has taken in the [`IoSystem`][super::IoSystem].
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Action {
    /// A key was pressed. Note this theoretically handles modifiers by sending them when they're pressed, but
    /// depending on the input mechanism it may only be able to send them when a non-modifier key is pressed.
    KeyPress { key: Key },
    /// A key was let go. Note this theoretically handles modifiers by sending them when they're let go, but
    /// depending on the input mechanism it may only be able to send them when a non-modifier key is released.
    KeyRelease { key: Key },
    /// The display changed (e.g. resized or regained focus) and should be drawn again.
    Redraw,
    /// User requested the program end externally, e.g. closing the terminal or running out of scripted input
    Closed,
    /// Some unknown input was received, with a description of what it was
    Unknown(String),
    /// Trying to read input let to some kind of error, with a description
    Error(String),
}

impl Action {
    /// Whether this is a press of the given key. Releases don't count.
    pub fn is_press(&self, key: Key) -> bool {
        matches!(self, Self::KeyPress { key: k } if *k == key)
    }
}
