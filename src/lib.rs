//! `player-form` is divided into a few parts, architecturally:
//!
//! - [`io`], the host UI: a character-grid [`Screen`][io::Screen] drawn through an [`IoSystem`][io::IoSystem], and
//!   raw user input as [`Action`][io::Action]s. The terminal backend lives here, as does a headless one for tests.
//! - [`form`], the two-field form itself: text inputs, which one has focus, and the submission affordance.
//! - [`validate`], the rules a submission has to pass, and [`notify`], the blocking notification service the user
//!   hears about them through.
//! - [`handler`], which ties those together for one submission, and [`app`], which runs the event loop and hands
//!   submissions to the handler.
//!
//! The handler never touches the IO system directly. Everything it says goes through a [`Notifier`][notify::Notifier],
//! so the validation flow can be tested with a [`RecordingNotifier`][notify::RecordingNotifier] and no terminal.

pub mod app;
pub mod constants;
mod error;
pub mod form;
pub mod handler;
pub mod io;
pub mod notify;
pub mod validate;

pub use crate::error::{Error, Result};
