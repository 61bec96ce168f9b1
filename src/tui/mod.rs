//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Screen, Action, Transition)
//! - `update`: Pure transitions plus the single stack-mutating `apply`
//! - `view`: Pure rendering
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
