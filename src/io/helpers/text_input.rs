use crate::{
    io::{fmt::Text, Action, Key},
    text,
};

use super::ModState;

/// Indicates what the text input needs from its owner
#[derive(Debug, PartialEq, Eq)]
pub enum TextInputRequest {
    /// Action doesn't require any response.
    Nothing,
    /// The text or cursor changed; you need to redraw and that's it.
    Redraw,
    /// User pressed Enter. The text is left as it was; what submitting means is up to the owner.
    Submit,
}

/// Lets the user type a single line of text, analogous to `<input type="text">`.
///
/// The cursor is tracked in characters, not bytes, so non-ASCII names edit properly.
#[derive(Clone, Default, Debug)]
pub struct TextInput {
    /// prompt displayed before the user's text
    prompt: String,

    /// line currently being typed
    line: String,
    /// cursor position in the line being typed, in chars. (line.chars().count() = at the end.)
    cursor: usize,

    /// the current state of the keyboard modifiers
    modstate: ModState,
}

impl TextInput {
    /// Create a new, empty text input element.
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// The text currently typed in, exactly as typed.
    pub fn value(&self) -> &str {
        &self.line
    }

    /// Replace the text, putting the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.line = value.into();
        self.cursor = self.len();
    }

    /// Empty the input, back to how [`Self::new`] made it. Held modifiers are still held.
    pub fn clear(&mut self) {
        self.line.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.line.chars().count()
    }

    fn byte_idx(&self, char_idx: usize) -> usize {
        self.line
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.line.len())
    }

    fn keypress(&mut self, key: Key) -> TextInputRequest {
        match key {
            Key::Char(ch) if !self.modstate.hotkeying() => {
                let at = self.byte_idx(self.cursor);
                if self.modstate.shift {
                    let upper: String = ch.to_uppercase().collect();
                    self.line.insert_str(at, &upper);
                    self.cursor += upper.chars().count();
                } else {
                    self.line.insert(at, ch);
                    self.cursor += 1;
                }
            }
            Key::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_idx(self.cursor);
                self.line.remove(at);
            }
            Key::Delete if self.cursor < self.len() => {
                let at = self.byte_idx(self.cursor);
                self.line.remove(at);
            }
            Key::Left if self.cursor > 0 => self.cursor -= 1,
            Key::Right if self.cursor < self.len() => self.cursor += 1,
            Key::Home if self.cursor > 0 => self.cursor = 0,
            Key::End if self.cursor < self.len() => self.cursor = self.len(),
            Key::Enter => return TextInputRequest::Submit,
            _ => return TextInputRequest::Nothing,
        }
        TextInputRequest::Redraw
    }

    /// Handles an [`Action`] which should go to the text input, for things like typing and moving the cursor.
    ///
    /// The type this returns indicates what needs to be done
    pub fn action(&mut self, action: Action) -> TextInputRequest {
        match action {
            act if self.modstate.action(&act) => TextInputRequest::Nothing,
            Action::KeyPress { key } => self.keypress(key),
            _ => TextInputRequest::Nothing,
        }
    }

    /// Builds a `Vec<Text>` with the prompt and the line, for rendering.
    ///
    /// The cursor is only shown when `focused`.
    pub fn render(&self, focused: bool) -> Vec<Text> {
        let line = &self.line;
        if !focused {
            return text!["{}"(self.prompt), bright_white "{}"(line)];
        }
        if self.cursor == self.len() {
            text![
                "{}"(self.prompt),
                bright_white "{}"(line),
                underline " ",
            ]
        } else {
            let start = self.byte_idx(self.cursor);
            let end = self.byte_idx(self.cursor + 1);
            text![
                "{}"(self.prompt),
                bright_white "{}"(&line[..start]),
                bright_white underline "{}"(&line[start..end]),
                bright_white "{}"(&line[end..]),
            ]
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Feed a series of inputs to a TextInput, asserting that none of them submit.
    macro_rules! feed {
        ( $ti:ident: $(
            $key:ident $( ( $content:expr ) )?
        ),* ) => {
            $(
                assert!(matches!(
                    feed!(@@one $ti: $key $( ($content) )?),
                    TextInputRequest::Nothing | TextInputRequest::Redraw,
                ));
            )*
        };
        ( @@one $ti:ident: String($val:expr) ) => {
            {
                let mut res = None;
                let mut cap = false;
                for ch in $val.chars() {
                    let new_cap = ch.is_uppercase();
                    if new_cap != cap {
                        if new_cap {
                            assert_eq!(feed!(@@one $ti: LeftShift KeyPress), TextInputRequest::Nothing);
                        } else {
                            assert_eq!(feed!(@@one $ti: LeftShift KeyRelease), TextInputRequest::Nothing);
                        }
                        cap = new_cap;
                    }
                    let cur = feed!(@@one $ti: Char(ch.to_lowercase().next().unwrap()));
                    if let Some(prev) = &res {
                        assert_eq!(&cur, prev, "different results across fed String");
                    } else {
                        res = Some(cur);
                    }
                }
                if cap {
                    assert_eq!(feed!(@@one $ti: LeftShift KeyRelease), TextInputRequest::Nothing);
                }
                res.expect("test is broken: tried to feed empty string")
            }
        };
        ( @@one $ti:ident: $key:ident $( ($content:expr) )? ) => {
            {
                let res = feed!(@@one $ti: $key $( ( $content ) )? KeyPress );
                assert_eq!(
                    feed!(@@one $ti: $key $( ( $content ) )? KeyRelease ),
                    TextInputRequest::Nothing,
                    "releases shouldn't do anything",
                );
                res
            }
        };
        ( @@one $ti:ident: $key:ident $( ($content:expr) )? $side:ident ) => {
            $ti.action(Action::$side { key: Key::$key $( ($content) )? })
        };
    }

    #[test]
    fn typing_fills_the_line() {
        let mut ti = TextInput::new("> ");
        feed!(ti: String("Alice"));
        assert_eq!(ti.value(), "Alice");
        assert_eq!(ti.render(true), text!["> ", bright_white "Alice", underline " "]);
    }

    #[test]
    fn editing_keys_move_and_delete() {
        let mut ti = TextInput::new("> ");
        feed!(ti: String("abcdef"), Left, Left, Backspace, Delete, Home, Delete, End, Backspace);
        assert_eq!(ti.value(), "bc");
        assert_eq!(ti.render(true), text!["> ", bright_white "bc", underline " "]);
    }

    #[test]
    fn edits_multibyte_text_by_char() {
        let mut ti = TextInput::new("");
        ti.set_value("Zoë");
        feed!(ti: Left, Char('x'), Right, Backspace);
        assert_eq!(ti.value(), "Zox");
    }

    #[test]
    fn hotkeys_dont_type() {
        let mut ti = TextInput::new("");
        assert_eq!(ti.action(Action::KeyPress { key: Key::LeftCtrl }), TextInputRequest::Nothing);
        assert_eq!(ti.action(Action::KeyPress { key: Key::Char('c') }), TextInputRequest::Nothing);
        assert_eq!(ti.action(Action::KeyRelease { key: Key::LeftCtrl }), TextInputRequest::Nothing);
        assert_eq!(ti.value(), "");
    }

    #[test]
    fn enter_submits_without_clearing() {
        let mut ti = TextInput::new("");
        feed!(ti: String("42"));
        assert_eq!(ti.action(Action::KeyPress { key: Key::Enter }), TextInputRequest::Submit);
        assert_eq!(ti.value(), "42");
    }

    #[test]
    fn noop_keys_request_nothing() {
        let mut ti = TextInput::new("");
        assert_eq!(ti.action(Action::KeyPress { key: Key::Left }), TextInputRequest::Nothing);
        assert_eq!(ti.action(Action::KeyPress { key: Key::Backspace }), TextInputRequest::Nothing);
        assert_eq!(ti.action(Action::Redraw), TextInputRequest::Nothing);
        assert_eq!(ti.action(Action::KeyPress { key: Key::Char('a') }), TextInputRequest::Redraw);
    }

    #[test]
    fn clear_empties_the_line() {
        let mut ti = TextInput::new("");
        feed!(ti: String("Bob"));
        ti.clear();
        assert_eq!(ti.value(), "");
        assert_eq!(ti.render(true), TextInput::new("").render(true));
    }

    #[test]
    fn blank_renders_to_prompt() {
        let ti = TextInput::new("> ");
        assert_eq!(ti.render(true), text!["> ", bright_white "", underline " "]);
        assert_eq!(ti.render(false), text!["> ", bright_white ""]);
    }

    #[test]
    fn text_renders_to_prompt_moved_cursor() {
        let mut ti = TextInput::new("> ");
        feed!(ti: String("abcdef"), Left, Left);
        assert_eq!(
            ti.render(true),
            text!["> ", bright_white "abcd", bright_white underline "e", bright_white "f"]
        );
    }
}
