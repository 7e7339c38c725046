//! Script session: feeds parsed script lines into the headless runtime.

use std::io::{BufRead, Write};
use std::time::Duration;

use picker_ui::{AccessNode, FrameClock, Headless, Settings};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::form::CountryForm;
use crate::script::{ScriptError, ScriptParser, Step};

/// A running form plus the script parser state.
pub struct Session {
    headless: Headless<CountryForm>,
    parser: ScriptParser,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let settings = Settings {
            viewport: config.viewport.size(),
        };
        let mut headless = Headless::new(CountryForm::new(config), settings);
        // First frame establishes the field geometry for pointer input
        headless.render();
        Self {
            headless,
            parser: ScriptParser::new(),
        }
    }

    pub fn form(&self) -> &CountryForm {
        self.headless.app()
    }

    /// Apply steps in order. Each event is followed by a zero-length frame
    /// so deferred focus lands before the next input.
    pub fn apply(&mut self, steps: &[Step]) {
        for step in steps {
            match step {
                Step::Event(event) => {
                    self.headless.handle_event(event);
                    self.headless.advance(Duration::ZERO);
                }
                Step::Wait(duration) => {
                    self.headless.advance(*duration);
                }
            }
        }
    }

    /// Let `elapsed` pass, run one script line and return the resulting
    /// accessibility tree.
    pub fn run_line(&mut self, line: &str, elapsed: Duration) -> Result<&[AccessNode], ScriptError> {
        let steps = self.parser.parse_line(line)?;
        self.headless.advance(elapsed);
        self.apply(&steps);
        Ok(self.headless.render().access_tree())
    }
}

/// Run a whole script, writing one JSON access tree per input line.
pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, mut output: W) -> Result<(), AppError> {
    let mut session = Session::new(config);
    let mut clock = FrameClock::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let elapsed = clock.tick();
        let tree = session
            .run_line(&line, elapsed)
            .map_err(|source| AppError::Script {
                line: index + 1,
                source,
            })?;
        serde_json::to_writer(&mut output, tree)?;
        writeln!(output)?;
    }

    output.flush()?;
    log::debug!("Session ended with country {:?}", session.form().country());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_ui::Role;

    fn session() -> Session {
        Session::new(&AppConfig::new())
    }

    fn field_click(session: &Session) -> String {
        let center = session.form().select().field_bounds().unwrap().center();
        format!("<click:{},{}>", center.x, center.y)
    }

    #[test]
    fn test_keyboard_pick() {
        let mut s = session();
        let click = field_click(&s);
        s.run_line(&click, Duration::ZERO).unwrap();
        s.run_line("<esc>", Duration::ZERO).unwrap();
        let tree = s.run_line("<down>chi<enter>", Duration::ZERO).unwrap();
        let button = tree.iter().find(|n| n.role == Role::Button).unwrap();
        assert_eq!(button.label, "Chile");
        assert_eq!(s.form().country(), "Chile");
    }

    #[test]
    fn test_space_in_query_never_selects() {
        let mut s = session();
        let click = field_click(&s);
        s.run_line(&click, Duration::ZERO).unwrap();
        let tree = s.run_line("united<space>k", Duration::ZERO).unwrap();
        let focused: Vec<_> = tree
            .iter()
            .filter(|n| n.role == Role::MenuItem && n.state.focused)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(focused, vec!["United Kingdom"]);
        assert_eq!(s.form().country(), "");
    }

    #[test]
    fn test_wait_clears_typeahead() {
        let mut s = session();
        let click = field_click(&s);
        s.run_line(&click, Duration::ZERO).unwrap();
        s.run_line("ch<wait:700>", Duration::ZERO).unwrap();
        s.run_line("z", Duration::ZERO).unwrap();
        assert_eq!(s.form().select().focused_country(), Some("Zambia"));
    }

    #[test]
    fn test_run_writes_one_tree_per_line() {
        let script = "<down>\n<esc>\n";
        let mut out = Vec::new();
        run(&AppConfig::new(), script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let tree: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(tree[0]["role"], "label");
    }

    #[test]
    fn test_run_reports_script_line() {
        let mut out = Vec::new();
        let err = run(&AppConfig::new(), "a\n<bogus>\n".as_bytes(), &mut out).unwrap_err();
        match err {
            AppError::Script { line, .. } => assert_eq!(line, 2),
            other => panic!("expected script error, got {other}"),
        }
    }
}
