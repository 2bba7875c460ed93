//! Host-facing infrastructure
//!
//! Everything that touches the outside world lives here: the terminal
//! driver, the configuration loader and the command-line interface. Nothing
//! in [`crate::core`] depends on this module except for the config type
//! embedded in the state.

pub mod cli;
pub mod config;
pub mod tui;
