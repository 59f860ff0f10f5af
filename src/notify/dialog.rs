use crate::{
    constants::graphics::{DIALOG_BUTTON, DIALOG_MAX_WIDTH},
    io::{fmt::Text, Action, IoSystem, Key, Screen, XY},
    text, Error, Result,
};

use super::Notifier;

/// Border plus one space of padding, on each side.
const FRAME: usize = 4;

/// Split `message` into lines no wider than `width`, breaking at spaces where it can and mid-word where it can't.
///
/// Only the space a line is broken at is dropped; runs of spaces inside a line are kept as they are.
fn wrap(message: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = vec![];
    let mut line = String::new();
    // nothing on the line yet, not even an empty word
    let mut fresh = true;
    for word in message.split(' ') {
        if word.is_empty() && fresh && !lines.is_empty() {
            // spaces right after a break
            continue;
        }
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let line_len = line.chars().count();
            let sep = usize::from(!fresh);
            if line_len + sep + word.len() <= width {
                if !fresh {
                    line.push(' ');
                }
                line.extend(word.iter());
                fresh = false;
                break;
            }
            if !fresh {
                lines.push(std::mem::take(&mut line));
                fresh = true;
                if word.is_empty() {
                    break;
                }
                continue;
            }
            // a single word that doesn't fit on an empty line
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }
    lines.push(line);
    lines
}

/// Draw a bordered box with `lines` and an OK button, centered on the screen.
fn draw_dialog(screen: &mut Screen, lines: &[String]) {
    let content_w = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(Some(DIALOG_BUTTON.len()))
        .max()
        .unwrap_or(0);
    let size = XY(content_w + FRAME, lines.len() + FRAME);
    let mut pos = screen.size().saturating_sub(size);
    pos /= 2;
    let inner = content_w + 2;
    let down = XY(0, 1);

    let edge = |l: char, r: char| -> Vec<Text> {
        text![bright_white on_blue "{}{}{}"(l, "─".repeat(inner), r)]
    };
    let body = |s: &str| -> Vec<Text> {
        let pad_right = inner - 1 - s.chars().count();
        text![
            bright_white on_blue "│ ",
            bold bright_white on_blue "{}"(s),
            bright_white on_blue "{}│"(" ".repeat(pad_right)),
        ]
    };

    screen.write(pos, edge('┌', '┐'));
    for line in lines.iter().map(String::as_str).chain(Some("")) {
        pos += down;
        screen.write(pos, body(line));
    }
    let button_pad = (inner - DIALOG_BUTTON.len()) / 2;
    let button = text![
        bright_white on_blue "│{}"(" ".repeat(button_pad)),
        bold black on_white "{}"(DIALOG_BUTTON),
        bright_white on_blue "{}│"(" ".repeat(inner - button_pad - DIALOG_BUTTON.len())),
    ];
    screen.write(pos + down, button);
    screen.write(pos + down + down, edge('└', '┘'));
}

/// A modal dialog drawn over whatever's on the screen, dismissed with Enter, Space, or Escape.
///
/// Borrows the IO system and the current frame for as long as it's alive, so nothing else can draw or read input
/// while a message is up.
pub struct DialogNotifier<'a, S: IoSystem + ?Sized> {
    iosys: &'a mut S,
    screen: &'a mut Screen,
}

impl<'a, S: IoSystem + ?Sized> DialogNotifier<'a, S> {
    /// `screen` should hold the frame currently on display; the dialog is drawn on top of it.
    pub fn new(iosys: &'a mut S, screen: &'a mut Screen) -> Self {
        Self { iosys, screen }
    }

    fn show(&mut self, backdrop: &Screen, message: &str) -> Result<()> {
        let size = self.iosys.size();
        if backdrop.size() == size {
            self.screen.clone_from(backdrop);
        } else {
            self.screen.resize(size);
        }
        let max_w = DIALOG_MAX_WIDTH.min(size.x()).saturating_sub(FRAME);
        draw_dialog(self.screen, &wrap(message, max_w));
        self.iosys.draw(self.screen)
    }
}

impl<'a, S: IoSystem + ?Sized> Notifier for DialogNotifier<'a, S> {
    fn notify(&mut self, message: &str) -> Result<()> {
        let backdrop = self.screen.clone();
        self.show(&backdrop, message)?;
        tracing::trace!(text = message, "dialog shown");
        loop {
            match self.iosys.input()? {
                Action::KeyPress {
                    key: Key::Enter | Key::Escape | Key::Char(' '),
                } => break,
                Action::Redraw => self.show(&backdrop, message)?,
                Action::Closed => return Err(Error::Closed),
                Action::Error(msg) => return Err(msg.into()),
                _ => (),
            }
        }
        tracing::trace!("dialog dismissed");
        self.screen.clone_from(&backdrop);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::io::sys::ScriptedSystem;

    use super::*;

    fn press(key: Key) -> Action {
        Action::KeyPress { key }
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap("Please enter a valid age between 1 and 99.", 20),
            vec!["Please enter a valid", "age between 1 and", "99."]
        );
        assert_eq!(wrap("short", 20), vec!["short"]);
        assert_eq!(wrap("", 20), vec![""]);
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn wrap_keeps_inner_spaces() {
        assert_eq!(
            wrap("Welcome, Mary   Jane! Age: 30", 40),
            vec!["Welcome, Mary   Jane! Age: 30"]
        );
        // the run of spaces a line breaks at goes away
        assert_eq!(wrap("ab   cd", 2), vec!["ab", "cd"]);
        assert_eq!(wrap("a  b", 3), vec!["a ", "b"]);
    }

    #[test]
    fn draws_message_and_waits_for_enter() {
        let (mut sys, _run) = ScriptedSystem::new(
            XY(40, 10),
            [
                press(Key::Char('x')),
                Action::KeyRelease { key: Key::Enter },
                press(Key::Enter),
                press(Key::Char('y')),
            ],
        );
        let mut screen = Screen::new(XY(40, 10));
        screen.write(XY(0, 0), text!["behind"]);
        DialogNotifier::new(&mut sys, &mut screen).notify("Hello there").unwrap();

        // stopped at the press, leaving the rest for whoever's next
        assert_eq!(sys.remaining(), 1);
        assert_eq!(sys.frames().len(), 1);
        let frame = &sys.frames()[0];
        assert!(frame.starts_with("behind\n"));
        assert!(frame.contains("│ Hello there │"));
        assert!(frame.contains("[ OK ]"));
        assert!(frame.contains("┌─────────────┐"));
        // the frame is put back afterwards
        assert_eq!(screen.row_text(0).trim_end(), "behind");
        assert!(!screen.plain_text().contains("Hello"));
    }

    #[test]
    fn shows_the_message_exactly() {
        let (mut sys, _run) = ScriptedSystem::new(XY(50, 10), [press(Key::Enter)]);
        let mut screen = Screen::new(XY(50, 10));
        DialogNotifier::new(&mut sys, &mut screen)
            .notify("Welcome, Mary   Jane! Age: 30")
            .unwrap();
        assert!(sys.frames()[0].contains("│ Welcome, Mary   Jane! Age: 30 │"));
    }

    #[test]
    fn escape_and_space_dismiss_too() {
        for key in [Key::Escape, Key::Char(' ')] {
            let (mut sys, _run) = ScriptedSystem::new(XY(30, 8), [press(key)]);
            let mut screen = Screen::new(XY(30, 8));
            assert!(DialogNotifier::new(&mut sys, &mut screen).notify("hi").is_ok());
        }
    }

    #[test]
    fn redraw_repaints_the_dialog() {
        let (mut sys, _run) = ScriptedSystem::new(XY(30, 8), [Action::Redraw, press(Key::Enter)]);
        let mut screen = Screen::new(XY(30, 8));
        DialogNotifier::new(&mut sys, &mut screen).notify("hi").unwrap();
        assert_eq!(sys.frames().len(), 2);
        assert_eq!(sys.frames()[0], sys.frames()[1]);
    }

    #[test]
    fn closing_propagates() {
        let (mut sys, _run) = ScriptedSystem::new(XY(30, 8), []);
        let mut screen = Screen::new(XY(30, 8));
        let res = DialogNotifier::new(&mut sys, &mut screen).notify("hi");
        assert!(matches!(res, Err(Error::Closed)));
    }

    #[test]
    fn input_errors_propagate() {
        let (mut sys, _run) = ScriptedSystem::new(XY(30, 8), [Action::Error("broken".into())]);
        let mut screen = Screen::new(XY(30, 8));
        let res = DialogNotifier::new(&mut sys, &mut screen).notify("hi");
        assert!(matches!(res, Err(Error::Bare(msg)) if msg == "broken"));
    }

    #[test]
    fn long_messages_stay_inside_narrow_screens() {
        let (mut sys, _run) = ScriptedSystem::new(XY(24, 12), [press(Key::Enter)]);
        let mut screen = Screen::new(XY(24, 12));
        DialogNotifier::new(&mut sys, &mut screen)
            .notify("Please enter a valid age between 1 and 99.")
            .unwrap();
        let frame = sys.last_frame().unwrap();
        assert!(frame.lines().all(|l| l.chars().count() <= 24));
        assert!(frame.contains("between"));
        assert!(frame.contains("99."));
    }
}
