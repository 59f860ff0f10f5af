//! A headless [`IoSystem`] that plays back a fixed list of actions and remembers what it was asked to draw.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use crate::{
    io::{Action, Screen, XY},
    Result,
};

use super::{IoRunner, IoSystem};

/// Plays back a queue of [`Action`]s as user input, and keeps every drawn frame as plain text.
///
/// When the queue runs dry, `input` reports [`Action::Closed`], as if the user walked away and closed the window.
pub struct ScriptedSystem {
    actions: VecDeque<Action>,
    frames: Vec<String>,
    size: XY,
    stop: Arc<AtomicBool>,
}

impl ScriptedSystem {
    pub fn new(size: XY, actions: impl IntoIterator<Item = Action>) -> (Self, ScriptedRunner) {
        let stop = Arc::new(AtomicBool::new(false));
        let sys = Self {
            actions: actions.into_iter().collect(),
            frames: vec![],
            size,
            stop: stop.clone(),
        };
        (sys, ScriptedRunner(stop))
    }

    /// Every frame drawn so far, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recently drawn frame, if any.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// How many queued actions haven't been read yet.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    pub fn stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}

impl IoSystem for ScriptedSystem {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        if self.stopped() {
            return Err("draw called on a stopped ScriptedSystem".into());
        }
        self.frames.push(screen.plain_text());
        Ok(())
    }
    fn size(&self) -> XY {
        self.size
    }
    fn input(&mut self) -> Result<Action> {
        Ok(self.actions.pop_front().unwrap_or(Action::Closed))
    }
    fn poll_input(&mut self) -> Result<Option<Action>> {
        Ok(self.actions.pop_front())
    }
    fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
    }
}

/// The [`IoRunner`] half of a [`ScriptedSystem`]. Nothing needs the main thread, so it just waits to be stopped.
#[derive(Clone)]
pub struct ScriptedRunner(Arc<AtomicBool>);

impl IoRunner for ScriptedRunner {
    fn step(&mut self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn run(&mut self) {
        while !self.step() {
            std::thread::yield_now();
        }
    }
}
