//! The form submission handler.
//!
//! One [`SubmitHandler`] is built per submission, from the form it should read and the [`Notifier`] it should talk
//! through. It takes over the submission from the host, checks the name and then the age, and either tells the user
//! what to fix (leaving the form as it was, with focus on the field at fault) or welcomes them and clears the form.

use crate::{
    form::{FieldId, Form, SubmitEvent},
    notify::Notifier,
    validate::{self, FormError, Submission},
    Result,
};

/// How a submission went.
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    /// Everything checked out; the user has been welcomed and the form cleared.
    Accepted(Submission),
    /// Something needs fixing; the user has been told what and the form is untouched apart from focus.
    Rejected(FormError),
}

/// Takes one submission of a [`Form`] from start to finish, telling the user how it went through a [`Notifier`].
pub struct SubmitHandler<'f, N: Notifier> {
    form: &'f mut Form,
    notifier: N,
}

impl<'f, N: Notifier> SubmitHandler<'f, N> {
    /// Handle submissions of `form`, talking to the user through `notifier`. Nothing is read until [`Self::handle`].
    pub fn new(form: &'f mut Form, notifier: N) -> Self {
        Self { form, notifier }
    }

    /// Handle one submission.
    ///
    /// Exactly one notification is shown. `Err` only comes from the notifier, e.g. the user closing the program
    /// while a message was up, in which case the form is left as it was.
    pub fn handle(&mut self, event: &mut SubmitEvent) -> Result<Outcome> {
        event.prevent_default();
        let res = validate::validate(self.form.value(FieldId::Name), self.form.value(FieldId::Age));
        match res {
            Err(e) => {
                tracing::debug!(error = ?e, "submission rejected");
                self.notifier.notify(e.message())?;
                self.form.focus(e.field());
                Ok(Outcome::Rejected(e))
            }
            Ok(sub) => {
                tracing::info!(name = %sub.name, age = %sub.age, "submission accepted");
                self.notifier.notify(&sub.greeting())?;
                self.form.reset();
                Ok(Outcome::Accepted(sub))
            }
        }
    }

    /// Give the notifier back, e.g. to see what a [`RecordingNotifier`][crate::notify::RecordingNotifier] heard.
    pub fn into_notifier(self) -> N {
        self.notifier
    }
}
