//! State transitions: (Screen, Action) → Transition, then apply.
//!
//! `update` is pure and fully testable without a terminal. Each screen
//! defines which actions it accepts; an empty required field simply
//! leaves the screen as it is. `apply` is the single place where the
//! navigation stack is mutated.

use crate::route::{ROUTE_AGE_ENTRY, ROUTE_NAME_ENTRY, ROUTE_SUMMARY};

use super::state::{Action, App, Screen, Transition};

/// Pure state transition function.
pub fn update(screen: &Screen, action: &Action) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::Back => return Transition::Back,
        _ => {}
    }

    match screen {
        Screen::NameEntry { name } => update_name_entry(name, action),
        Screen::AgeEntry { user_name, age } => update_age_entry(user_name, age, action),
        Screen::Summary { .. } => update_summary(screen, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Screen 1: edit the name; confirm forwards it when non-empty.
fn update_name_entry(name: &str, action: &Action) -> Transition {
    match action {
        Action::Confirm if !name.is_empty() => Transition::Navigate {
            route: ROUTE_AGE_ENTRY.to_string(),
            args: vec![name.to_string()],
        },
        _ => Transition::Screen(Screen::NameEntry {
            name: edit(name, action),
        }),
    }
}

/// Screen 2: edit the age; confirm forwards both values untouched.
fn update_age_entry(user_name: &str, age: &str, action: &Action) -> Transition {
    match action {
        Action::Confirm if !age.is_empty() => Transition::Navigate {
            route: ROUTE_SUMMARY.to_string(),
            args: vec![user_name.to_string(), age.to_string()],
        },
        _ => Transition::Screen(Screen::AgeEntry {
            user_name: user_name.to_string(),
            age: edit(age, action),
        }),
    }
}

/// Screen 3: read-only; confirm returns to the start, dropping the rest.
fn update_summary(screen: &Screen, action: &Action) -> Transition {
    match action {
        Action::Confirm => Transition::PopBackStack {
            route: ROUTE_NAME_ENTRY.to_string(),
            inclusive: false,
        },
        _ => Transition::Screen(screen.clone()),
    }
}

/// Apply a text-editing action to a field value.
fn edit(value: &str, action: &Action) -> String {
    let mut out = value.to_string();
    match action {
        Action::Input(c) => out.push(*c),
        Action::DeleteChar => {
            out.pop();
        }
        _ => {}
    }
    out
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Run one action through `update` and apply the result.
pub fn step(app: &mut App, action: &Action) {
    let transition = update(&app.screen, action);
    apply(app, transition);
}

/// Carry out a transition against the app's navigation stack.
///
/// Navigation failures leave the stack and the current screen as they
/// were; they are logged, not surfaced.
pub fn apply(app: &mut App, transition: Transition) {
    match transition {
        Transition::Screen(screen) => {
            app.screen = screen;
        }
        Transition::Navigate { route, args } => {
            let values: Vec<&str> = args.iter().map(String::as_str).collect();
            if let Err(e) = app.nav.navigate(&route, &values) {
                tracing::warn!(%route, error = %e, "navigation refused");
            }
        }
        Transition::PopBackStack { route, inclusive } => {
            if let Err(e) = app.nav.pop_back_stack(&route, inclusive) {
                tracing::warn!(%route, error = %e, "pop back stack failed");
            }
        }
        Transition::Back => {
            if !app.nav.pop() {
                app.should_quit = true;
            }
        }
        Transition::Quit => {
            app.should_quit = true;
        }
    }

    app.sync_screen();
}

// ============================================================================
// TESTS
// ============================================================================
