//! The form itself: a name field, an age field, which one has focus, and the submission affordance.
//!
//! The form doesn't know what a valid submission looks like. Pressing Enter just asks its owner to submit; see
//! [`crate::handler`] for what happens then.

mod event;

pub use event::SubmitEvent;

use crate::{
    constants::{form as consts, graphics},
    io::{
        helpers::{ModState, TextInput, TextInputRequest},
        Action, Key, Screen, XY,
    },
    text,
};

/// Which of the form's fields something refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldId {
    Name,
    Age,
}

impl FieldId {
    /// Every field, in tab order.
    pub const ALL: [FieldId; 2] = [FieldId::Name, FieldId::Age];

    /// The conventional identifier of the field, e.g. `"name"`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => consts::NAME_ID,
            Self::Age => consts::AGE_ID,
        }
    }

    /// Look a field up by its conventional identifier.
    pub fn from_id(id: &str) -> Option<FieldId> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Name => graphics::NAME_LABEL,
            Self::Age => graphics::AGE_LABEL,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Age => 1,
        }
    }

    fn next(&self) -> FieldId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> FieldId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Indicates what the form needs from its owner after an [`Action`].
#[derive(Debug, PartialEq, Eq)]
pub enum FormRequest {
    /// Nothing visible changed.
    Nothing,
    /// Something changed and the form should be drawn again.
    Redraw,
    /// The user asked to submit the form.
    Submit,
}

/// The player details form.
#[derive(Clone, Debug)]
pub struct Form {
    fields: [TextInput; 2],
    focus: FieldId,
    /// modifiers are shared by every field, so focus can move while one is held
    modstate: ModState,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// An empty form, with the name field focused.
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.map(|f| TextInput::new(f.label())),
            focus: FieldId::Name,
            modstate: ModState::new(),
        }
    }

    fn field(&self, field: FieldId) -> &TextInput {
        &self.fields[field.index()]
    }

    fn field_mut(&mut self, field: FieldId) -> &mut TextInput {
        &mut self.fields[field.index()]
    }

    /// The current text of a field, untrimmed.
    pub fn value(&self, field: FieldId) -> &str {
        self.field(field).value()
    }

    /// Replace the text of a field.
    pub fn set_value(&mut self, field: FieldId, value: &str) {
        self.field_mut(field).set_value(value)
    }

    /// Move input focus to a field, so the user's next keystroke lands there.
    pub fn focus(&mut self, field: FieldId) {
        self.focus = field;
    }

    /// Which field currently has input focus.
    pub fn focused(&self) -> FieldId {
        self.focus
    }

    /// Clear every field to its default empty state and put focus back on the first one.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = FieldId::Name;
    }

    /// Handle one user [`Action`].
    ///
    /// Tab and Shift+Tab move focus between fields, Enter asks for a submission, and everything else goes to the
    /// focused field.
    pub fn action(&mut self, action: Action) -> FormRequest {
        if self.modstate.action(&action) {
            for field in &mut self.fields {
                field.action(action.clone());
            }
            return FormRequest::Nothing;
        }
        if action.is_press(Key::Tab) {
            self.focus = if self.modstate.shift {
                self.focus.prev()
            } else {
                self.focus.next()
            };
            return FormRequest::Redraw;
        }
        let focus = self.focus;
        match self.field_mut(focus).action(action) {
            TextInputRequest::Nothing => FormRequest::Nothing,
            TextInputRequest::Redraw => FormRequest::Redraw,
            TextInputRequest::Submit => FormRequest::Submit,
        }
    }

    /// Draw the form onto the screen, from the top left.
    pub fn render(&self, screen: &mut Screen) {
        screen.write(XY(2, 0), text![bold bright_white "{}"(graphics::TITLE)]);
        for field in FieldId::ALL {
            let row = graphics::FIRST_FIELD_ROW + field.index() * 2;
            let focused = field == self.focus;
            let mut line = if focused {
                text![bright_cyan "> "]
            } else {
                text!["  "]
            };
            line.extend(self.field(field).render(focused));
            screen.write(XY(0, row), line);
        }
        let hint_row = graphics::FIRST_FIELD_ROW + FieldId::ALL.len() * 2;
        screen.write(XY(2, hint_row), text![bright_black "{}"(graphics::HINT)]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn press(key: Key) -> Action {
        Action::KeyPress { key }
    }

    fn type_str(form: &mut Form, s: &str) {
        for ch in s.chars() {
            form.action(press(Key::Char(ch)));
        }
    }

    #[test]
    fn field_ids_round_trip() {
        assert_eq!(FieldId::Name.id(), "name");
        assert_eq!(FieldId::Age.id(), "age");
        assert_eq!(FieldId::from_id("age"), Some(FieldId::Age));
        assert_eq!(FieldId::from_id("email"), None);
    }

    #[test]
    fn starts_empty_on_name() {
        let form = Form::new();
        assert_eq!(form.focused(), FieldId::Name);
        assert_eq!(form.value(FieldId::Name), "");
        assert_eq!(form.value(FieldId::Age), "");
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = Form::new();
        type_str(&mut form, "bob");
        assert_eq!(form.action(press(Key::Tab)), FormRequest::Redraw);
        assert_eq!(form.focused(), FieldId::Age);
        type_str(&mut form, "45");
        assert_eq!(form.value(FieldId::Name), "bob");
        assert_eq!(form.value(FieldId::Age), "45");
    }

    #[test]
    fn tab_and_shift_tab_cycle_focus() {
        let mut form = Form::new();
        form.action(press(Key::Tab));
        form.action(press(Key::Tab));
        assert_eq!(form.focused(), FieldId::Name);
        form.action(press(Key::LeftShift));
        form.action(press(Key::Tab));
        assert_eq!(form.focused(), FieldId::Age);
        form.action(Action::KeyRelease { key: Key::LeftShift });
        type_str(&mut form, "a");
        form.action(press(Key::Tab));
        type_str(&mut form, "b");
        assert_eq!(form.value(FieldId::Age), "a");
        assert_eq!(form.value(FieldId::Name), "b");
    }

    #[test]
    fn enter_requests_submit_from_either_field() {
        let mut form = Form::new();
        assert_eq!(form.action(press(Key::Enter)), FormRequest::Submit);
        form.focus(FieldId::Age);
        assert_eq!(form.action(press(Key::Enter)), FormRequest::Submit);
    }

    #[test]
    fn reset_clears_fields_and_focus() {
        let mut form = Form::new();
        form.set_value(FieldId::Name, "Alice");
        form.set_value(FieldId::Age, "30");
        form.focus(FieldId::Age);
        form.reset();
        assert_eq!(form.value(FieldId::Name), "");
        assert_eq!(form.value(FieldId::Age), "");
        assert_eq!(form.focused(), FieldId::Name);
    }

    #[test]
    fn renders_labels_values_and_focus_marker() {
        let mut form = Form::new();
        form.set_value(FieldId::Name, "Alice");
        form.set_value(FieldId::Age, "30");
        form.focus(FieldId::Age);
        let mut screen = Screen::new(XY(60, 8));
        form.render(&mut screen);
        assert_eq!(screen.row_text(0).trim_end(), "  Player Details");
        assert_eq!(screen.row_text(2).trim_end(), "  Name: Alice");
        assert_eq!(screen.row_text(4).trim_end(), "> Age:  30");
        assert!(screen.row_text(6).contains("Enter: submit"));
    }
}
