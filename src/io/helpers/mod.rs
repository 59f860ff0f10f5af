//! Miscellaneous input helpers to package up common functionality.

mod modstate;
pub use modstate::ModState;
mod text_input;
pub use text_input::{TextInput, TextInputRequest};
