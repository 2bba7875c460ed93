//! # Echotui - Text Mirror TUI
//!
//! A deliberately tiny terminal application built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state
//! management: a single text input whose value is mirrored into an echo
//! line on every keystroke.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Immutable application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **View** (`presentation`): UI rendering based on current state
//! - **Driver** (`integration`): The loop that owns the state and the terminal
//!
//! ## Example Usage
//!
//! ```rust
//! use echotui::{
//!     core::msg::{ui::UiMsg, Msg},
//!     core::state::AppState,
//!     core::update::update,
//! };
//!
//! // Initialize state
//! let initial_state = AppState::new();
//! assert_eq!(initial_state.content(), "");
//!
//! // Process messages
//! let msg = Msg::Ui(UiMsg::InputChanged("hello".to_string()));
//! let (new_state, commands) = update(msg, initial_state);
//!
//! // State now holds the typed text and no side effects were requested
//! assert_eq!(new_state.content(), "hello");
//! assert!(commands.is_empty());
//! ```
//!
//! ## Key Features
//!
//! - **Predictable State Management**: All state changes go through the update function
//! - **Testable**: Pure functions make testing straightforward
//! - **Separation of Concerns**: The terminal driver is cleanly separated from state logic

#![deny(warnings)]

// Core Elm architecture modules
pub mod core;

// Host-facing modules
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
