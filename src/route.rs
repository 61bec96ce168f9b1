//! Route table: declarative path patterns mapped to destinations.
//!
//! A pattern is a literal identifier followed by named placeholders,
//! e.g. `screen2/{userName}`. Paths are built by plain substitution and
//! resolved by splitting on `/`. Values are never escaped, so a value
//! containing the separator cannot round-trip through a path.
//!
//! Structure:
//! - Constants: the identifiers and argument names of the app's routes
//! - Types: Destination, Route, RouteTable
//! - Pure functions: pattern parsing, path building, path resolution

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Separator between the identifier and placeholder values in a path.
pub const SEPARATOR: char = '/';

/// Start route: name entry, no arguments.
pub const ROUTE_NAME_ENTRY: &str = "screen1";

/// Age entry, receives the user name.
pub const ROUTE_AGE_ENTRY: &str = "screen2";

/// Summary, receives the user name and age.
pub const ROUTE_SUMMARY: &str = "screen3";

pub const ARG_USER_NAME: &str = "userName";
pub const ARG_AGE: &str = "age";

/// Route declarations of the app, in start-first order.
///
/// Identifiers and placeholder names must match the constants above.
pub const APP_ROUTES: &[(&str, Destination)] = &[
    ("screen1", Destination::NameEntry),
    ("screen2/{userName}", Destination::AgeEntry),
    ("screen3/{userName}/{age}", Destination::Summary),
];

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while declaring routes or building paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route pattern '{pattern}' has an empty identifier")]
    EmptyIdentifier { pattern: String },

    #[error("route pattern '{pattern}' has a malformed placeholder segment '{segment}'")]
    MalformedPlaceholder { pattern: String, segment: String },

    #[error("route pattern '{pattern}' declares placeholder '{name}' twice")]
    DuplicatePlaceholder { pattern: String, name: String },

    #[error("route '{id}' is declared more than once")]
    DuplicateRoute { id: String },

    #[error("route table has no routes")]
    EmptyTable,

    #[error("no route named '{id}'")]
    UnknownRoute { id: String },

    #[error("route '{id}' expects {expected} argument(s), got {got}")]
    ArgumentCount { id: String, expected: usize, got: usize },
}

// ============================================================================
// TYPES
// ============================================================================

/// Which screen renders a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    NameEntry,
    AgeEntry,
    Summary,
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Literal first path segment. Unique within a table.
    pub id: String,
    /// Placeholder names in declaration order.
    pub placeholders: Vec<String>,
    pub destination: Destination,
}

/// Ordered set of routes. The first declared route is the start route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

// ============================================================================
// ROUTE
// ============================================================================

impl Route {
    /// Parse a pattern like `screen3/{userName}/{age}`.
    pub fn parse(pattern: &str, destination: Destination) -> Result<Self, RouteError> {
        let mut segments = pattern.split(SEPARATOR);

        let id = segments.next().unwrap_or_default();
        if id.is_empty() || is_placeholder_syntax(id) {
            return Err(RouteError::EmptyIdentifier {
                pattern: pattern.to_string(),
            });
        }

        let mut placeholders: Vec<String> = Vec::new();
        for segment in segments {
            let name = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .filter(|name| !name.is_empty() && !name.contains(['{', '}']))
                .ok_or_else(|| RouteError::MalformedPlaceholder {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                })?;

            if placeholders.iter().any(|p| p == name) {
                return Err(RouteError::DuplicatePlaceholder {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            placeholders.push(name.to_string());
        }

        Ok(Route {
            id: id.to_string(),
            placeholders,
            destination,
        })
    }

    /// Render back to pattern form.
    pub fn pattern(&self) -> String {
        let mut out = self.id.clone();
        for name in &self.placeholders {
            out.push(SEPARATOR);
            out.push('{');
            out.push_str(name);
            out.push('}');
        }
        out
    }

    /// Substitute values into the placeholders, in declaration order.
    ///
    /// Values are inserted verbatim.
    pub fn build_path(&self, values: &[&str]) -> Result<String, RouteError> {
        if values.len() != self.placeholders.len() {
            return Err(RouteError::ArgumentCount {
                id: self.id.clone(),
                expected: self.placeholders.len(),
                got: values.len(),
            });
        }

        let mut path = self.id.clone();
        for value in values {
            path.push(SEPARATOR);
            path.push_str(value);
        }
        Ok(path)
    }

    /// Match already-split path segments (identifier excluded).
    ///
    /// Returns the bound values, or None when the count differs or a
    /// segment is empty.
    fn bind(&self, segments: &[&str]) -> Option<Vec<String>> {
        if segments.len() != self.placeholders.len() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(segments.iter().map(|s| s.to_string()).collect())
    }
}

fn is_placeholder_syntax(segment: &str) -> bool {
    segment.starts_with('{') || segment.ends_with('}')
}

// ============================================================================
// TABLE
// ============================================================================

impl RouteTable {
    /// Build a table from `(pattern, destination)` declarations.
    pub fn new(declarations: &[(&str, Destination)]) -> Result<Self, RouteError> {
        if declarations.is_empty() {
            return Err(RouteError::EmptyTable);
        }

        let mut routes: Vec<Route> = Vec::with_capacity(declarations.len());
        for (pattern, destination) in declarations {
            let route = Route::parse(pattern, *destination)?;
            if routes.iter().any(|r| r.id == route.id) {
                return Err(RouteError::DuplicateRoute { id: route.id });
            }
            routes.push(route);
        }

        Ok(RouteTable { routes })
    }

    /// The table for the name/age flow.
    pub fn app() -> Result<Self, RouteError> {
        Self::new(APP_ROUTES)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First declared route.
    pub fn start(&self) -> &Route {
        // Non-empty by construction.
        &self.routes[0]
    }

    pub fn get(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Look up a route or fail with `UnknownRoute`.
    pub fn require(&self, id: &str) -> Result<&Route, RouteError> {
        self.get(id).ok_or_else(|| RouteError::UnknownRoute { id: id.to_string() })
    }

    /// Resolve a concrete path to its route and bound values.
    ///
    /// Matching is exact on the identifier; the number of remaining
    /// segments must equal the route's placeholder count.
    pub fn resolve(&self, path: &str) -> Option<(&Route, Vec<String>)> {
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        let (id, rest) = segments.split_first()?;
        let route = self.get(id)?;
        let values = route.bind(rest)?;
        Some((route, values))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifier_only_pattern() {
        let route = Route::parse("screen1", Destination::NameEntry).unwrap();
        assert_eq!(route.id, "screen1");
        assert!(route.placeholders.is_empty());
    }

    #[test]
    fn parses_placeholders_in_declaration_order() {
        let route = Route::parse("screen3/{userName}/{age}", Destination::Summary).unwrap();
        assert_eq!(route.id, "screen3");
        assert_eq!(route.placeholders, vec!["userName", "age"]);
        assert_eq!(route.pattern(), "screen3/{userName}/{age}");
    }

    #[test]
    fn rejects_empty_identifier() {
        assert!(matches!(
            Route::parse("/{userName}", Destination::AgeEntry),
            Err(RouteError::EmptyIdentifier { .. })
        ));
        assert!(matches!(
            Route::parse("{userName}", Destination::AgeEntry),
            Err(RouteError::EmptyIdentifier { .. })
        ));
    }

    #[test]
    fn rejects_malformed_placeholders() {
        for pattern in ["screen2/userName", "screen2/{userName", "screen2/{}", "screen2/"] {
            assert!(
                matches!(
                    Route::parse(pattern, Destination::AgeEntry),
                    Err(RouteError::MalformedPlaceholder { .. })
                ),
                "pattern {pattern} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_duplicate_placeholder() {
        let err = Route::parse("screen3/{a}/{a}", Destination::Summary).unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicatePlaceholder {
                pattern: "screen3/{a}/{a}".to_string(),
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn table_rejects_duplicate_ids_and_empty_declarations() {
        let err = RouteTable::new(&[
            ("screen1", Destination::NameEntry),
            ("screen1/{x}", Destination::AgeEntry),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicateRoute { id: "screen1".to_string() });
        assert_eq!(RouteTable::new(&[]).unwrap_err(), RouteError::EmptyTable);
    }

    #[test]
    fn app_routes_use_the_named_identifiers() {
        let table = RouteTable::app().unwrap();
        let ids: Vec<&str> = table.routes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![ROUTE_NAME_ENTRY, ROUTE_AGE_ENTRY, ROUTE_SUMMARY]);
        assert_eq!(table.require(ROUTE_AGE_ENTRY).unwrap().placeholders, vec![ARG_USER_NAME]);
        assert_eq!(
            table.require(ROUTE_SUMMARY).unwrap().placeholders,
            vec![ARG_USER_NAME, ARG_AGE]
        );
    }

    #[test]
    fn app_table_starts_at_name_entry() {
        let table = RouteTable::app().unwrap();
        assert_eq!(table.routes().len(), 3);
        assert_eq!(table.start().id, ROUTE_NAME_ENTRY);
        assert_eq!(table.require(ROUTE_SUMMARY).unwrap().destination, Destination::Summary);
        assert!(table.require("screen9").is_err());
    }

    #[test]
    fn build_path_substitutes_verbatim() {
        let table = RouteTable::app().unwrap();
        let summary = table.require(ROUTE_SUMMARY).unwrap();
        assert_eq!(summary.build_path(&["Ann", "30"]).unwrap(), "screen3/Ann/30");
        assert_eq!(table.start().build_path(&[]).unwrap(), "screen1");
    }

    #[test]
    fn build_path_requires_every_placeholder_bound() {
        let table = RouteTable::app().unwrap();
        let err = table.require(ROUTE_SUMMARY).unwrap().build_path(&["Ann"]).unwrap_err();
        assert_eq!(
            err,
            RouteError::ArgumentCount {
                id: "screen3".to_string(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn resolve_matches_identifier_and_arity() {
        let table = RouteTable::app().unwrap();

        let (route, values) = table.resolve("screen2/Ann").unwrap();
        assert_eq!(route.destination, Destination::AgeEntry);
        assert_eq!(values, vec!["Ann"]);

        let (route, values) = table.resolve("screen3/Ann/30").unwrap();
        assert_eq!(route.destination, Destination::Summary);
        assert_eq!(values, vec!["Ann", "30"]);

        assert!(table.resolve("screen1").is_some());
        assert!(table.resolve("screen2").is_none());
        assert!(table.resolve("screen2/").is_none());
        assert!(table.resolve("screen4/Ann").is_none());
    }

    #[test]
    fn separator_in_value_corrupts_resolution() {
        let table = RouteTable::app().unwrap();
        let path = table.require(ROUTE_AGE_ENTRY).unwrap().build_path(&["A/B"]).unwrap();
        assert_eq!(path, "screen2/A/B");
        assert!(table.resolve(&path).is_none());

        let path = table.require(ROUTE_SUMMARY).unwrap().build_path(&["A/B", "30"]).unwrap();
        assert!(table.resolve(&path).is_none());
    }
}
