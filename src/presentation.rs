//! View layer
//!
//! Pure projections of [`crate::core::state::AppState`] into ratatui widget
//! trees. Nothing here mutates state; components receive the state by
//! reference and describe the desired UI for the current frame.

pub mod components;
pub mod widgets;
