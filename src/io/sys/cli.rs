//! Implements the (crossterm-based) rendering to a terminal.

use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvError, TryRecvError},
        Arc,
    },
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveDown, MoveTo, MoveToColumn, Show},
    event::{self as ct, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    style::{
        Attribute, Color as CrosstermColor, ResetColor, SetAttribute, SetAttributes,
        SetBackgroundColor, SetForegroundColor,
    },
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::{
    io::{
        fmt::{Cell, Color as FormColor, Formatted},
        Action, Key, Screen, XY,
    },
    Result,
};

use super::{IoRunner, IoSystem};

/// How long [`CtRunner::run`] waits on the terminal between checks for [`IoSystem::stop`].
const RUN_POLL: Duration = Duration::from_millis(50);

fn key4ct(code: ct::KeyCode) -> Option<Key> {
    let key = match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::F(c) => Key::F(c),
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        ct::KeyCode::PageUp => Key::PageUp,
        ct::KeyCode::PageDown => Key::PageDown,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Insert => Key::Insert,
        ct::KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(key)
}

pub struct CtRunner {
    actions: mpsc::Sender<Action>,
    stop: Arc<AtomicBool>,
}

impl CtRunner {
    fn init_term() -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
        )?;
        Ok(())
    }

    fn clean_term() -> Result<()> {
        execute!(
            std::io::stdout(),
            Clear(ClearType::All),
            Show,
            EnableLineWrap,
            DisableBracketedPaste,
            LeaveAlternateScreen,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn new(actions: mpsc::Sender<Action>, stop: Arc<AtomicBool>) -> Result<Self> {
        Self::init_term()?;
        std::panic::set_hook(Box::new(|i| {
            let _ = Self::clean_term();
            println!("{}", i);
            // set back up in preparation for drop
            #[cfg(panic = "unwind")]
            let _ = Self::init_term();
        }));
        Ok(Self { actions, stop })
    }

    /// Wait up to `timeout` for one terminal event and forward it. Returns whether to stop.
    fn pump(&mut self, timeout: Duration) -> bool {
        // check whether we've been told to stop
        if self.stop.load(Ordering::Relaxed) {
            tracing::debug!("terminal runner stopping");
            return true;
        }

        macro_rules! try_send {
            ( $type:ident $( ($nt:expr) )? $( { $($br:tt)* } )? ) => {
                match self.actions.send(Action::$type $(($nt))? $({$($br)*})? ) {
                    Ok(_) => (),
                    Err(_) => return true,
                }
            }
        }
        macro_rules! mods {
            ( $mods:ident, $action:ident ) => {
                if $mods.contains(ct::KeyModifiers::SHIFT) {
                    try_send!($action { key: Key::LeftShift });
                }
                if $mods.contains(ct::KeyModifiers::CONTROL) {
                    try_send!($action { key: Key::LeftCtrl });
                }
                if $mods.contains(ct::KeyModifiers::ALT) {
                    try_send!($action { key: Key::LeftAlt });
                }
            };
        }

        match crossterm::event::poll(timeout) {
            Ok(false) => return false,
            Ok(true) => (),
            Err(e) => {
                try_send!(Error(format!("polling: {}", e)));
                return true;
            }
        }
        // we have an event, so get it
        let ev = match crossterm::event::read() {
            Ok(ev) => ev,
            Err(e) => {
                try_send!(Error(format!("reading: {}", e)));
                return true;
            }
        };
        match ev {
            // releases are reported separately on some platforms; we already send our own
            ct::Event::Key(ct::KeyEvent {
                kind: ct::KeyEventKind::Release,
                ..
            }) => (),
            ct::Event::Key(ct::KeyEvent {
                code, modifiers, ..
            }) => {
                mods!(modifiers, KeyPress);
                if code == ct::KeyCode::BackTab {
                    try_send!(KeyPress { key: Key::LeftShift });
                    try_send!(KeyPress { key: Key::Tab });
                    try_send!(KeyRelease { key: Key::Tab });
                    try_send!(KeyRelease { key: Key::LeftShift });
                } else if let Some(key) = key4ct(code) {
                    try_send!(KeyPress { key });
                    try_send!(KeyRelease { key });
                } else {
                    try_send!(Unknown(format!("key {:?}", code)));
                }
                mods!(modifiers, KeyRelease);
            }
            ct::Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    try_send!(KeyPress { key: Key::Char(ch) });
                    try_send!(KeyRelease { key: Key::Char(ch) });
                }
            }
            ct::Event::Resize(..) | ct::Event::FocusGained => try_send!(Redraw),
            ct::Event::FocusLost | ct::Event::Mouse(_) => (),
        };

        false
    }
}

impl Drop for CtRunner {
    fn drop(&mut self) {
        let _ = Self::clean_term();
    }
}

impl IoRunner for CtRunner {
    fn step(&mut self) -> bool {
        // zero timeout to avoid blocking in `step`
        self.pump(Duration::ZERO)
    }

    fn run(&mut self) {
        while !self.pump(RUN_POLL) {}
    }
}

/// Crossterm color for form colors
fn ct4form_color(c: FormColor) -> CrosstermColor {
    match c {
        FormColor::BrightBlack => CrosstermColor::DarkGrey,
        FormColor::Black => CrosstermColor::Black,
        FormColor::Blue => CrosstermColor::DarkBlue,
        FormColor::BrightCyan => CrosstermColor::Cyan,
        FormColor::BrightWhite => CrosstermColor::White,
        FormColor::White => CrosstermColor::Grey,
    }
}

/// Render a single row of cells into a `Vec<u8>` that can be printed
fn render_row(row: &[Cell], out: &mut Vec<u8>) -> Result<()> {
    let first = match row.first() {
        Some(c) => c,
        None => return Ok(()),
    };
    let mut ch_b = [0u8; 4];

    let mut fg = first.get_fmt().fg;
    let mut bg = first.get_fmt().bg;
    let mut bold = first.get_fmt().bold;
    let mut underline = first.get_fmt().underline;
    let mut attrs = [Attribute::NormalIntensity, Attribute::NoUnderline];
    if bold {
        attrs[0] = Attribute::Bold;
    }
    if underline {
        attrs[1] = Attribute::Underlined;
    }
    crossterm::queue!(
        out,
        ResetColor,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(ct4form_color(fg)),
        SetBackgroundColor(ct4form_color(bg)),
        SetAttributes(attrs.as_ref().into()),
    )?;
    out.extend_from_slice(first.ch.encode_utf8(&mut ch_b).as_bytes());

    for cell in &row[1..] {
        if cell.get_fmt().fg != fg {
            fg = cell.get_fmt().fg;
            crossterm::queue!(out, SetForegroundColor(ct4form_color(fg)))?;
        }
        if cell.get_fmt().bg != bg {
            bg = cell.get_fmt().bg;
            crossterm::queue!(out, SetBackgroundColor(ct4form_color(bg)))?;
        }
        if cell.get_fmt().bold != bold {
            bold = cell.get_fmt().bold;
            let attr = if bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        if cell.get_fmt().underline != underline {
            underline = cell.get_fmt().underline;
            let attr = if underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        out.extend_from_slice(cell.ch.encode_utf8(&mut ch_b).as_bytes());
    }
    crossterm::queue!(out, MoveDown(1), MoveToColumn(0))?;
    Ok(())
}

pub struct CtSystem {
    queue: mpsc::Receiver<Action>,
    stop: Arc<AtomicBool>,
}

impl CtSystem {
    pub fn new() -> Result<(Self, CtRunner)> {
        let (queue_s, queue_r) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let runner = CtRunner::new(queue_s, stop.clone())?;
        Ok((
            Self {
                queue: queue_r,
                stop,
            },
            runner,
        ))
    }
}

impl IoSystem for CtSystem {
    fn size(&self) -> XY {
        let (x, y) = terminal::size().unwrap_or((80, 24));
        XY(x as usize, y as usize)
    }

    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let mut out = vec![];
        crossterm::queue!(&mut out, MoveTo(0, 0), Clear(ClearType::All))?;
        for row in screen.rows() {
            render_row(row, &mut out)?;
        }
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(&out)?;
        stdout.flush()?;
        Ok(())
    }

    fn input(&mut self) -> Result<Action> {
        // the runner only hangs up once it's stopped, and then the user can't give us anything more anyway
        Ok(self.queue.recv().unwrap_or(Action::Closed))
    }

    fn poll_input(&mut self) -> Result<Option<Action>> {
        match self.queue.try_recv() {
            Ok(res) => Ok(Some(res)),
            Err(TryRecvError::Disconnected) => Ok(Some(Action::Closed)),
            Err(TryRecvError::Empty) => Ok(None),
        }
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        while self.queue.recv() != Err(RecvError) {
            // flushing the queue and waiting for it to disconnect in the condition itself
        }
    }
}
