//! Shared output types.

use serde::{Deserialize, Serialize};

use crate::nav::{NavEntry, PopPolicy};
use crate::tui::state::{App, Screen};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Point-in-time view of the app, as printed by `replay`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Bottom to top.
    pub stack: Vec<NavEntry>,
    /// None once the stack is empty.
    pub screen: Option<Screen>,
    pub revision: u64,
    pub pop_policy: PopPolicy,
    pub quit: bool,
}

impl Snapshot {
    pub fn of(app: &App) -> Self {
        Snapshot {
            stack: app.nav.stack().to_vec(),
            screen: app.nav.current().map(|_| app.screen.clone()),
            revision: app.nav.revision(),
            pop_policy: app.nav.pop_policy(),
            quit: app.should_quit,
        }
    }
}
