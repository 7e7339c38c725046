//! Key scripts: a line-oriented input language for driving the form.
//!
//! Plain characters are typed as keys (a space types Space). Angle-bracket
//! tokens stand for named keys, pauses and pointer input:
//!
//! | Token          | Meaning                                   |
//! |----------------|-------------------------------------------|
//! | `<down>` `<up>` `<home>` `<end>` | navigation keys         |
//! | `<enter>` `<space>` `<esc>` `<bs>` `<tab>` | named keys    |
//! | `<lt>`         | a literal `<`                             |
//! | `<wait:MS>`    | let `MS` milliseconds pass                |
//! | `<click:X,Y>`  | left button press and release at `(X, Y)` |
//! | `<move:X,Y>`   | pointer move to `(X, Y)`                  |
//! | `<wheel:DY>`   | wheel by `DY` pixels at the pointer       |
//!
//! Every key token expands to a press followed by a release.

use std::time::Duration;

use picker_ui::{Event, Key, Modifiers, MouseButton, Point};
use thiserror::Error;

/// One scripted action.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Event(Event),
    Wait(Duration),
}

/// Errors produced while parsing a script line. Columns are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("Unknown token '<{name}>' at column {column}")]
    UnknownToken { name: String, column: usize },

    #[error("Invalid argument '{value}' for <{name}> at column {column}")]
    InvalidArgument {
        name: String,
        value: String,
        column: usize,
    },

    #[error("Unterminated token at column {column}")]
    Unterminated { column: usize },
}

/// Parses script lines, remembering the pointer position across lines so
/// wheel input lands where the pointer last was.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptParser {
    pointer: Point,
}

impl ScriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn parse_line(&mut self, line: &str) -> Result<Vec<Step>, ScriptError> {
        let mut steps = Vec::new();
        let mut chars = line.chars().enumerate();

        while let Some((index, c)) = chars.next() {
            let column = index + 1;
            if c != '<' {
                let key = if c == ' ' { Key::Space } else { Key::Char(c) };
                tap(&mut steps, key);
                continue;
            }

            let mut token = String::new();
            let mut closed = false;
            for (_, c) in chars.by_ref() {
                if c == '>' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(ScriptError::Unterminated { column });
            }
            self.parse_token(&token, column, &mut steps)?;
        }

        Ok(steps)
    }

    fn parse_token(
        &mut self,
        token: &str,
        column: usize,
        steps: &mut Vec<Step>,
    ) -> Result<(), ScriptError> {
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };
        let invalid = |value: &str| ScriptError::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
            column,
        };

        match (name, arg) {
            ("down", None) => tap(steps, Key::Down),
            ("up", None) => tap(steps, Key::Up),
            ("home", None) => tap(steps, Key::Home),
            ("end", None) => tap(steps, Key::End),
            ("enter", None) => tap(steps, Key::Enter),
            ("space", None) => tap(steps, Key::Space),
            ("esc", None) => tap(steps, Key::Escape),
            ("bs", None) => tap(steps, Key::Backspace),
            ("tab", None) => tap(steps, Key::Tab),
            ("lt", None) => tap(steps, Key::Char('<')),
            ("wait", Some(ms)) => {
                let ms: u64 = ms.trim().parse().map_err(|_| invalid(ms))?;
                steps.push(Step::Wait(Duration::from_millis(ms)));
            }
            ("click", Some(xy)) => {
                let position = parse_point(xy).ok_or_else(|| invalid(xy))?;
                self.pointer = position;
                steps.push(Step::Event(Event::MousePressed {
                    button: MouseButton::Left,
                    position,
                }));
                steps.push(Step::Event(Event::MouseReleased {
                    button: MouseButton::Left,
                    position,
                }));
            }
            ("move", Some(xy)) => {
                let position = parse_point(xy).ok_or_else(|| invalid(xy))?;
                self.pointer = position;
                steps.push(Step::Event(Event::MouseMoved { position }));
            }
            ("wheel", Some(dy)) => {
                let delta: f32 = dy.trim().parse().map_err(|_| invalid(dy))?;
                steps.push(Step::Event(Event::MouseWheel {
                    delta,
                    position: self.pointer,
                }));
            }
            _ => {
                return Err(ScriptError::UnknownToken {
                    name: token.to_string(),
                    column,
                });
            }
        }
        Ok(())
    }
}

fn tap(steps: &mut Vec<Step>, key: Key) {
    let modifiers = Modifiers::default();
    steps.push(Step::Event(Event::KeyPressed { key, modifiers }));
    steps.push(Step::Event(Event::KeyReleased { key, modifiers }));
}

fn parse_point(text: &str) -> Option<Point> {
    let (x, y) = text.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
