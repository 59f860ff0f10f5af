//! The event loop: draws the form, reads input, and hands submissions to the [`SubmitHandler`].
//!
//! Everything happens on one thread, one [`Action`] at a time. A submission, including any dialog it puts up, is
//! finished before the next action is read.

use crate::{
    form::{Form, FormRequest, SubmitEvent},
    handler::{Outcome, SubmitHandler},
    io::{Action, IoSystem, Key, Screen},
    notify::DialogNotifier,
    Result,
};

/// Whether the loop should keep going after an action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit,
}

/// The form, wired up to a display.
pub struct App<S: IoSystem> {
    iosys: S,
    form: Form,
    screen: Screen,
    /// submissions accepted so far
    accepted: usize,
}

impl<S: IoSystem> App<S> {
    /// Set up the form on the given display. The submission handler is attached here, once, and stays attached for
    /// as long as the app runs.
    pub fn new(iosys: S) -> Self {
        let screen = Screen::new(iosys.size());
        Self {
            iosys,
            form: Form::new(),
            screen,
            accepted: 0,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn iosys(&self) -> &S {
        &self.iosys
    }

    /// How many submissions have been accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Redraw the form into the frame, resizing it to the display first.
    fn render(&mut self) {
        self.screen.resize(self.iosys.size());
        self.form.render(&mut self.screen);
    }

    fn submit(&mut self) -> Result<Flow> {
        let mut event = SubmitEvent::new();
        self.render();
        let notifier = DialogNotifier::new(&mut self.iosys, &mut self.screen);
        let outcome = SubmitHandler::new(&mut self.form, notifier).handle(&mut event)?;
        if let Outcome::Accepted(_) = outcome {
            self.accepted += 1;
        }
        if !event.default_prevented() {
            // the host's own submission: leave the form
            tracing::debug!("submission not intercepted; leaving the form");
            return Ok(Flow::Exit);
        }
        Ok(Flow::Continue)
    }

    /// Handle one action from the user.
    pub fn step(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Closed => Ok(Flow::Exit),
            act if act.is_press(Key::Escape) => Ok(Flow::Exit),
            Action::Error(msg) => Err(msg.into()),
            Action::Unknown(what) => {
                tracing::trace!(input = %what, "ignoring unknown input");
                Ok(Flow::Continue)
            }
            other => match self.form.action(other) {
                FormRequest::Submit => self.submit(),
                FormRequest::Nothing | FormRequest::Redraw => Ok(Flow::Continue),
            },
        }
    }

    /// Draw and take input until the user leaves, then stop the IO system.
    ///
    /// The IO system is stopped even if something went wrong, and the first error is returned.
    pub fn run(&mut self) -> Result<()> {
        let res = self.run_loop();
        self.iosys.stop();
        tracing::info!(accepted = self.accepted, "form closed");
        res
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            self.render();
            self.iosys.draw(&self.screen)?;
            let action = self.iosys.input()?;
            match self.step(action) {
                Ok(Flow::Continue) => (),
                Ok(Flow::Exit) => return Ok(()),
                // closing from inside a dialog is still just closing
                Err(crate::Error::Closed) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        form::FieldId,
        io::{sys::ScriptedSystem, XY},
    };

    use super::*;

    fn press(key: Key) -> Action {
        Action::KeyPress { key }
    }

    /// Key presses (with releases) for typing `s`.
    fn typed(s: &str) -> Vec<Action> {
        s.chars()
            .flat_map(|ch| {
                let key = Key::Char(ch);
                [Action::KeyPress { key }, Action::KeyRelease { key }]
            })
            .collect()
    }

    fn script(parts: Vec<Vec<Action>>) -> ScriptedSystem {
        let (sys, _run) = ScriptedSystem::new(XY(60, 12), parts.into_iter().flatten());
        sys
    }

    #[test]
    fn welcomes_a_typed_player_and_clears_the_form() {
        let sys = script(vec![
            typed("alice"),
            vec![press(Key::Tab)],
            typed("30"),
            vec![press(Key::Enter), Action::KeyRelease { key: Key::Enter }],
            vec![press(Key::Enter)],
        ]);
        let mut app = App::new(sys);
        app.run().unwrap();

        assert_eq!(app.accepted(), 1);
        assert_eq!(app.form().value(FieldId::Name), "");
        assert_eq!(app.form().value(FieldId::Age), "");
        assert!(app.iosys().stopped());
        let frames = app.iosys().frames();
        assert!(frames.iter().any(|f| f.contains("Welcome, alice! Age: 30")));
        // the form after the dialog is cleared again
        let last = frames.last().unwrap();
        assert!(last.contains("> Name:\n"));
        assert!(!last.contains("Welcome"));
    }

    #[test]
    fn rejected_submission_keeps_values_and_moves_focus() {
        let sys = script(vec![
            typed("bob"),
            vec![press(Key::Tab)],
            typed("150"),
            vec![press(Key::Enter), press(Key::Enter)],
            vec![press(Key::Home)],
            typed("1"),
        ]);
        let mut app = App::new(sys);
        app.run().unwrap();

        assert_eq!(app.accepted(), 0);
        assert!(app
            .iosys()
            .frames()
            .iter()
            .any(|f| f.contains("Please enter a valid age")));
        assert_eq!(app.form().focused(), FieldId::Age);
        assert_eq!(app.form().value(FieldId::Name), "bob");
        assert_eq!(app.form().value(FieldId::Age), "1150");
    }

    #[test]
    fn missing_name_moves_focus_back_to_name() {
        let sys = script(vec![
            vec![press(Key::Tab)],
            typed("45"),
            vec![press(Key::Enter), press(Key::Escape)],
        ]);
        let mut app = App::new(sys);
        app.run().unwrap();
        assert_eq!(app.form().focused(), FieldId::Name);
        assert!(app
            .iosys()
            .frames()
            .iter()
            .any(|f| f.contains("Please enter your name.")));
        assert!(!app.iosys().frames().iter().any(|f| f.contains("valid age")));
    }

    #[test]
    fn escape_leaves() {
        let mut app = App::new(script(vec![]));
        assert_eq!(app.step(press(Key::Escape)).unwrap(), Flow::Exit);
        assert_eq!(app.step(Action::Closed).unwrap(), Flow::Exit);
        assert_eq!(app.step(Action::Redraw).unwrap(), Flow::Continue);
        assert_eq!(app.step(Action::Unknown("??".into())).unwrap(), Flow::Continue);
        assert!(app.step(Action::Error("bad".into())).is_err());
    }

    #[test]
    fn closing_during_a_dialog_ends_cleanly() {
        let sys = script(vec![vec![press(Key::Enter)]]);
        let mut app = App::new(sys);
        assert!(app.run().is_ok());
        assert!(app.iosys().stopped());
    }

    #[test]
    fn input_errors_stop_and_report() {
        let sys = script(vec![vec![Action::Error("tty went away".into())]]);
        let mut app = App::new(sys);
        assert!(app.run().is_err());
        assert!(app.iosys().stopped());
    }
}
