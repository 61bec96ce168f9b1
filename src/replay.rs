//! Headless driver: feed a scripted action sequence through the same
//! `step` the TUI uses.
//!
//! Script tokens are whitespace separated:
//! - `type:<text>`: one keystroke per character of `<text>`
//! - `enter`, `back`, `backspace`, `quit`
//!
//! Tokens cannot contain whitespace, so typed text cannot either.

use thiserror::Error;

use crate::tui::state::{Action, App};
use crate::tui::update::step;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown script token '{token}' at position {position}")]
    UnknownToken { token: String, position: usize },
}

/// Parse a script into actions.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();

    for (position, token) in script.split_whitespace().enumerate() {
        if let Some(text) = token.strip_prefix("type:") {
            actions.extend(text.chars().map(Action::Input));
            continue;
        }

        let action = match token {
            "enter" => Action::Confirm,
            "back" => Action::Back,
            "backspace" => Action::DeleteChar,
            "quit" => Action::Quit,
            _ => {
                return Err(ScriptError::UnknownToken {
                    token: token.to_string(),
                    position,
                });
            }
        };
        actions.push(action);
    }

    Ok(actions)
}

/// Step `app` through `actions`, stopping early once it wants to quit.
///
/// Returns how many actions were applied.
pub fn run_script(app: &mut App, actions: &[Action]) -> usize {
    let mut applied = 0;
    for action in actions {
        if app.should_quit {
            break;
        }
        step(app, action);
        applied += 1;
    }
    tracing::info!(applied, total = actions.len(), "replay finished");
    applied
}
