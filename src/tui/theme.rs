//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Cyan: interactive elements (input fields, enabled buttons)
//! - Dim: de-emphasized (route path, disabled buttons, help line)
//! - Bold: title and headings

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Screen heading line.
pub const STYLE_HEADING: Style = Style::new().add_modifier(Modifier::BOLD);

/// Text input field.
pub const STYLE_INPUT: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);

/// Button that will act on Enter.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Button whose guard currently blocks it.
pub const STYLE_BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
