//! greeter-nav: a name-and-age flow over an explicit navigation stack.

pub mod config;
pub mod logging;
pub mod nav;
pub mod replay;
pub mod report;
pub mod route;
pub mod tui;
pub mod types;
