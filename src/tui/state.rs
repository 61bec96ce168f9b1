//! TUI state algebra: pure types, zero effects.
//!
//! The navigation stack lives in [`App::nav`]. The visible [`Screen`] is
//! derived from the top entry and carries only that screen's local input.
//! It is rebuilt from scratch whenever the top entry changes, so input
//! typed on a screen never survives the screen leaving the stack.

use serde::Serialize;

use crate::nav::{NavController, NavEntry, NavError, PopPolicy};
use crate::route::{ARG_AGE, ARG_USER_NAME, Destination, RouteTable};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Owned back stack. Mutated only by `update::apply`.
    pub nav: NavController,

    /// Current screen with its local input.
    pub screen: Screen,

    /// Show the current route path in the title bar.
    pub show_route_path: bool,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,

    /// Entry the current `screen` was built for.
    rendered_entry: Option<u64>,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The visible screen, one variant per [`Destination`].
///
/// Route arguments are copied in when the screen is built; the editable
/// field starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Screen 1: type a name.
    NameEntry { name: String },

    /// Screen 2: greet `user_name`, type an age.
    AgeEntry { user_name: String, age: String },

    /// Screen 3: show both values.
    Summary { user_name: String, age: String },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::NameEntry {
            name: String::new(),
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the focused field.
    Input(char),
    /// Remove the last character of the focused field.
    DeleteChar,
    /// Press the screen's button.
    Confirm,
    /// System back gesture.
    Back,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure screen transition.
///
/// Screens never mutate the stack themselves; they describe the request
/// and `update::apply` carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Stay on the current entry with updated local state.
    Screen(Screen),
    /// Push `route` with `args` bound to its placeholders.
    Navigate { route: String, args: Vec<String> },
    /// Pop back to `route`, optionally removing it too.
    PopBackStack { route: String, inclusive: bool },
    /// Pop the top entry, or exit when it is the last one.
    Back,
    Quit,
}

// ============================================================================
// DISPATCH
// ============================================================================

impl Screen {
    /// Build a fresh screen for a stack entry.
    ///
    /// Missing arguments read as empty strings. Returns None when the
    /// entry's route is not in `table`.
    pub fn for_entry(entry: &NavEntry, table: &RouteTable) -> Option<Self> {
        let route = table.get(&entry.route)?;
        let user_name = || entry.arg(ARG_USER_NAME).unwrap_or_default().to_string();

        let screen = match route.destination {
            Destination::NameEntry => Screen::NameEntry {
                name: String::new(),
            },
            Destination::AgeEntry => Screen::AgeEntry {
                user_name: user_name(),
                age: String::new(),
            },
            Destination::Summary => Screen::Summary {
                user_name: user_name(),
                age: entry.arg(ARG_AGE).unwrap_or_default().to_string(),
            },
        };
        Some(screen)
    }

    pub fn destination(&self) -> Destination {
        match self {
            Screen::NameEntry { .. } => Destination::NameEntry,
            Screen::AgeEntry { .. } => Destination::AgeEntry,
            Screen::Summary { .. } => Destination::Summary,
        }
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App over `nav`, showing its current entry.
    pub fn new(nav: NavController, show_route_path: bool) -> Self {
        let mut app = App {
            nav,
            screen: Screen::default(),
            show_route_path,
            should_quit: false,
            rendered_entry: None,
        };
        app.sync_screen();
        app
    }

    /// Create an App over the name/age route table.
    pub fn start(pop_policy: PopPolicy, show_route_path: bool) -> Result<Self, NavError> {
        let nav = NavController::new(RouteTable::app()?, pop_policy)?;
        Ok(App::new(nav, show_route_path))
    }

    /// Rebuild `screen` if the top entry changed since it was built.
    ///
    /// An empty stack leaves nothing to show, so the app quits.
    pub fn sync_screen(&mut self) {
        let Some(entry) = self.nav.current() else {
            self.rendered_entry = None;
            self.should_quit = true;
            return;
        };

        if self.rendered_entry == Some(entry.id) {
            return;
        }

        if let Some(screen) = Screen::for_entry(entry, self.nav.table()) {
            tracing::debug!(path = %entry.path, "render");
            self.screen = screen;
            self.rendered_entry = Some(entry.id);
        }
    }

    /// Path of the current entry, if any.
    pub fn current_path(&self) -> Option<&str> {
        self.nav.current().map(|e| e.path.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{ROUTE_AGE_ENTRY, ROUTE_NAME_ENTRY, ROUTE_SUMMARY};

    fn app() -> App {
        App::start(PopPolicy::Lenient, true).unwrap()
    }

    #[test]
    fn app_starts_on_empty_name_entry() {
        let app = app();
        assert_eq!(app.screen, Screen::default());
        assert_eq!(app.current_path(), Some(ROUTE_NAME_ENTRY));
        assert!(!app.should_quit);
    }

    #[test]
    fn dispatch_copies_route_arguments() {
        let mut app = app();
        app.nav.navigate(ROUTE_SUMMARY, &["Ann", "30"]).unwrap();
        app.sync_screen();
        assert_eq!(
            app.screen,
            Screen::Summary {
                user_name: "Ann".into(),
                age: "30".into(),
            }
        );
        assert_eq!(app.screen.destination(), Destination::Summary);
    }

    #[test]
    fn sync_keeps_local_input_while_entry_unchanged() {
        let mut app = app();
        app.screen = Screen::NameEntry { name: "An".into() };
        app.sync_screen();
        assert_eq!(app.screen, Screen::NameEntry { name: "An".into() });
    }

    #[test]
    fn returning_to_an_equivalent_route_starts_fresh() {
        let mut app = app();
        app.nav.navigate(ROUTE_AGE_ENTRY, &["Ann"]).unwrap();
        app.sync_screen();
        app.screen = Screen::AgeEntry {
            user_name: "Ann".into(),
            age: "3".into(),
        };

        app.nav.pop();
        app.sync_screen();
        app.nav.navigate(ROUTE_AGE_ENTRY, &["Ann"]).unwrap();
        app.sync_screen();

        assert_eq!(
            app.screen,
            Screen::AgeEntry {
                user_name: "Ann".into(),
                age: String::new(),
            }
        );
    }

    #[test]
    fn empty_stack_requests_quit() {
        let mut app = app();
        app.nav.pop_back_stack(ROUTE_NAME_ENTRY, true).unwrap();
        app.sync_screen();
        assert!(app.should_quit);
        assert_eq!(app.current_path(), None);
    }

    #[test]
    fn screen_serializes_with_tag() {
        let json = serde_json::to_value(Screen::AgeEntry {
            user_name: "Ann".into(),
            age: "30".into(),
        })
        .unwrap();
        assert_eq!(json["screen"], "age_entry");
        assert_eq!(json["user_name"], "Ann");
    }
}
