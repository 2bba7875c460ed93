//! Driver loop
//!
//! The host side of the architecture: [`runtime::Runtime`] owns the state
//! value and feeds messages through the pure update function, while
//! [`app_runner::AppRunner`] connects the runtime to a terminal.

pub mod app_runner;
pub mod runtime;
