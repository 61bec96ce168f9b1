//! Navigation controller: an owned back stack of route entries.
//!
//! The controller is the only owner of the stack. Screens never touch it
//! directly; they describe a navigation request and the app applies it.
//! Every change bumps `revision` so the host knows to re-render.

use serde::Serialize;
use thiserror::Error;

use crate::route::{RouteError, RouteTable};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Only raised under [`PopPolicy::Strict`].
    #[error("no entry for route '{route}' on the back stack")]
    TargetNotOnStack { route: String },
}

// ============================================================================
// TYPES
// ============================================================================

/// What `pop_back_stack` does when its target is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopPolicy {
    /// Absent target is a no-op.
    #[default]
    Lenient,
    /// Absent target is an error.
    Strict,
}

/// One argument value bound at push time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundArg {
    pub name: String,
    pub value: String,
}

/// A concrete route instance occupying one stack slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Unique for the controller's lifetime, never reused.
    pub id: u64,
    pub route: String,
    pub path: String,
    pub args: Vec<BoundArg>,
}

impl NavEntry {
    /// Value bound to a placeholder, if any.
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Back stack plus the route table it navigates over.
#[derive(Debug)]
pub struct NavController {
    table: RouteTable,
    stack: Vec<NavEntry>,
    next_id: u64,
    revision: u64,
    pop_policy: PopPolicy,
}

// ============================================================================
// CONTROLLER
// ============================================================================

impl NavController {
    /// Create a controller with the table's start route pushed.
    pub fn new(table: RouteTable, pop_policy: PopPolicy) -> Result<Self, NavError> {
        let start = table.start().id.clone();
        let mut nav = NavController {
            table,
            stack: Vec::new(),
            next_id: 0,
            revision: 0,
            pop_policy,
        };
        nav.navigate(&start, &[])?;
        Ok(nav)
    }

    /// Push `route_id` with `values` substituted into its placeholders.
    ///
    /// Values are not validated. The entry keeps its bound values, so a
    /// value that is empty or contains the separator still navigates; only
    /// the recorded path stops resolving back, which is logged. On error
    /// (unknown route, wrong argument count) the stack is unchanged.
    pub fn navigate(&mut self, route_id: &str, values: &[&str]) -> Result<&NavEntry, NavError> {
        let route = self.table.require(route_id)?;
        let path = route.build_path(values)?;

        let round_trips = self
            .table
            .resolve(&path)
            .is_some_and(|(resolved, bound)| resolved.id == route.id && bound == values);
        if !round_trips {
            tracing::warn!(%path, route = %route.id, "path does not resolve back to its route");
        }

        let args = route
            .placeholders
            .iter()
            .zip(values)
            .map(|(name, value)| BoundArg {
                name: name.clone(),
                value: value.to_string(),
            })
            .collect();

        let entry = NavEntry {
            id: self.next_id,
            route: route.id.clone(),
            path,
            args,
        };
        self.next_id += 1;

        tracing::info!(path = %entry.path, entry = entry.id, "navigate");
        self.stack.push(entry);
        self.revision += 1;

        // Just pushed.
        Ok(&self.stack[self.stack.len() - 1])
    }

    /// Pop entries from the top until `target` is on top.
    ///
    /// With `inclusive`, the target entry is removed as well. The topmost
    /// entry for `target` is the one matched. Returns whether anything
    /// was popped. An absent target leaves the stack untouched and is an
    /// error only under [`PopPolicy::Strict`].
    pub fn pop_back_stack(&mut self, target: &str, inclusive: bool) -> Result<bool, NavError> {
        let Some(index) = self.stack.iter().rposition(|e| e.route == target) else {
            tracing::debug!(route = target, "pop target not on back stack");
            return match self.pop_policy {
                PopPolicy::Lenient => Ok(false),
                PopPolicy::Strict => Err(NavError::TargetNotOnStack {
                    route: target.to_string(),
                }),
            };
        };

        let keep = if inclusive { index } else { index + 1 };
        if keep == self.stack.len() {
            return Ok(false);
        }

        let removed = self.stack.len() - keep;
        self.stack.truncate(keep);
        self.revision += 1;
        tracing::info!(route = target, inclusive, removed, "pop back stack");
        Ok(true)
    }

    /// System back: pop the top entry unless it is the only one.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(entry) = self.stack.pop() {
            tracing::info!(path = %entry.path, "back");
        }
        self.revision += 1;
        true
    }

    /// Currently visible entry. None only after an inclusive pop of the root.
    pub fn current(&self) -> Option<&NavEntry> {
        self.stack.last()
    }

    pub fn stack(&self) -> &[NavEntry] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bumped by every change to the stack.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn pop_policy(&self) -> PopPolicy {
        self.pop_policy
    }
}

// ============================================================================
// TESTS
// ============================================================================
