//! This module provides the display backends. The terminal one is controlled by a feature named similarly and exports
//! a struct implementing [`IoSystem`]; the scripted one is always available, for tests and automation.

#[cfg(feature = "__sys")]
use std::collections::HashMap;

use crate::{
    io::{Action, Screen, XY},
    Result,
};

#[cfg(feature = "sys_cli")]
mod cli;
mod scripted;

#[cfg(feature = "sys_cli")]
pub use cli::{CtRunner, CtSystem};
pub use scripted::{ScriptedRunner, ScriptedSystem};

/// An input/output system.
///
/// The output is called a "display" to distinguish it from the [`Screen`].
///
/// This object is meant to be associated with a [`IoRunner`], which will run on the main thread while this is called
/// from the thread running the form.
pub trait IoSystem: Send {
    /// Actually render a [`Screen`] to the display.
    ///
    /// This must be able to handle `Screen`s of the wrong size. Generally, extra cells get cut off and missing ones
    /// are left blank.
    fn draw(&mut self, screen: &Screen) -> Result<()>;
    /// Get the size of the display, in characters.
    fn size(&self) -> XY;

    /// Wait for the next user input.
    ///
    /// This will wait indefinitely, until an error happens or an input occurs, blocking the thread.
    fn input(&mut self) -> Result<Action>;
    /// If the next user input is available, return it. Otherwise, return `None`.
    ///
    /// Basically a non-blocking [`Self::input`].
    fn poll_input(&mut self) -> Result<Option<Action>>;

    /// Tells the associated [`IoRunner`] to stop and return control of the main thread, and tell the [`IoSystem`] to
    /// dispose of any resources it's handling.
    ///
    /// This will always be the last method called on this object (unless you count `Drop::drop`) so feel free to
    /// panic in the others if they're called after this one, especially `draw`.
    fn stop(&mut self);
}

impl<S: IoSystem + ?Sized> IoSystem for Box<S> {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        (**self).draw(screen)
    }
    fn size(&self) -> XY {
        (**self).size()
    }
    fn input(&mut self) -> Result<Action> {
        (**self).input()
    }
    fn poll_input(&mut self) -> Result<Option<Action>> {
        (**self).poll_input()
    }
    fn stop(&mut self) {
        (**self).stop()
    }
}

/// The other half of an [`IoSystem`].
///
/// This type exists so that things which need to run on the main thread specifically, can.
pub trait IoRunner {
    /// Execute one 'step', which should be quick and must be non-blocking. Returns whether an exit has been requested
    /// (i.e. by [`IoSystem::stop`]) since the last time `step` was called.
    ///
    /// Will always be called on the main thread.
    #[must_use]
    fn step(&mut self) -> bool;

    /// Run until the paired [`IoSystem`] says to [stop](IoSystem::stop).
    ///
    /// Will always be called on the main thread.
    ///
    /// The default implementation just runs `while !self.step() { }`.
    fn run(&mut self) {
        while !self.step() {}
    }
}

/// Based on IO system features enabled, attempt to initialize an IO system; in order:
///
/// - crossterm CLI (`sys_cli`)
///
/// The Err type is a map from the name of the system (in code formatting above) to the error that it hit.
#[cfg(feature = "__sys")]
pub fn load() -> core::result::Result<(Box<dyn IoSystem>, Box<dyn IoRunner>), HashMap<&'static str, crate::Error>> {
    let mut errors = HashMap::new();
    macro_rules! try_init {
        ( $name:literal: $( $init:tt )* ) => {
            let res = {
                $($init)*
            };
            match res {
                Ok((iosys, run)) => {
                    tracing::debug!(backend = $name, "loaded IO system");
                    return Ok((Box::new(iosys), Box::new(run)));
                }
                Err(e) => {
                    tracing::warn!(backend = $name, error = %e, "failed to load IO system");
                    errors.insert($name, e);
                }
            };
        }
    }
    #[cfg(feature = "sys_cli")]
    {
        // Try to initialize the CLI renderer
        try_init! { "sys_cli": CtSystem::new() }
    }
    Err(errors)
}
