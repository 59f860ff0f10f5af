//! The blocking notification service.
//!
//! Everything the user is told about a submission goes through a [`Notifier`]: a [`DialogNotifier`] when there's a
//! real display, a [`RecordingNotifier`] in tests.

mod dialog;

pub use dialog::DialogNotifier;

use crate::Result;

/// Something that can tell the user a message and wait for them to acknowledge it.
pub trait Notifier {
    /// Show `message` and block until the user dismisses it.
    ///
    /// Errors mean the message may not have been seen, e.g. because the user closed the program instead.
    fn notify(&mut self, message: &str) -> Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) -> Result<()> {
        (**self).notify(message)
    }
}

/// A [`Notifier`] which "shows" messages by writing them down, and is dismissed instantly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message shown so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Forget everything shown so far, returning it.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.into());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut rec = RecordingNotifier::new();
        rec.notify("one").unwrap();
        (&mut rec).notify("two").unwrap();
        assert_eq!(rec.messages(), &["one".to_string(), "two".to_string()]);
        assert_eq!(rec.take().len(), 2);
        assert!(rec.messages().is_empty());
    }
}
