use crate::infrastructure::config::Config;

pub mod input;
pub mod system;

pub use input::InputState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub input: InputState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// The text currently held by the input
    pub fn content(&self) -> &str {
        &self.input.content
    }
}
