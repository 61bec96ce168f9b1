//! Report formatting for the route table and navigation snapshots.
//!
//! Pure functions: (data, OutputFormat) → String. No I/O.

use serde::Serialize;

use crate::route::RouteTable;
use crate::tui::state::Screen;
use crate::types::{OutputFormat, Snapshot};

/// Format the route table, start route first.
pub fn format_routes(table: &RouteTable, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_routes_human(table)),
        OutputFormat::Json => format_json(table.routes()),
    }
}

/// Format a navigation snapshot.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Human => Ok(format_snapshot_human(snapshot)),
        OutputFormat::Json => format_json(snapshot),
    }
}

fn format_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_routes_human(table: &RouteTable) -> String {
    let mut out = String::new();
    out.push_str("=== Routes ===\n");
    for (i, route) in table.routes().iter().enumerate() {
        let marker = if i == 0 { " (start)" } else { "" };
        out.push_str(&format!(
            "  {:<28} → {:?}{}\n",
            route.pattern(),
            route.destination,
            marker
        ));
    }
    out
}

fn format_snapshot_human(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str("=== Back Stack (top last) ===\n");
    if snapshot.stack.is_empty() {
        out.push_str("  (empty)\n");
    }
    for entry in &snapshot.stack {
        out.push_str(&format!("  #{:<3} {}\n", entry.id, entry.path));
    }
    out.push('\n');

    out.push_str("=== Screen ===\n");
    match &snapshot.screen {
        None => out.push_str("  (none)\n"),
        Some(Screen::NameEntry { name }) => {
            out.push_str(&format!("  name entry, name: {:?}\n", name));
        }
        Some(Screen::AgeEntry { user_name, age }) => {
            out.push_str(&format!(
                "  age entry for {:?}, age: {:?}\n",
                user_name, age
            ));
        }
        Some(Screen::Summary { user_name, age }) => {
            out.push_str(&format!("  summary, name: {:?}, age: {:?}\n", user_name, age));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "Depth: {}  Revision: {}{}\n",
        snapshot.stack.len(),
        snapshot.revision,
        if snapshot.quit { "  (quit)" } else { "" }
    ));
    out
}

// ============================================================================
// TESTS
// ============================================================================
