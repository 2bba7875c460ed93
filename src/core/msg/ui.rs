use serde::{Deserialize, Serialize};

/// UI-specific messages for InputState transitions
///
/// The input is the only interactive element, so a single variant suffices:
/// the host input layer always delivers the complete replacement text, never
/// an incremental edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    InputChanged(String),
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        // Every keystroke produces one of these, but they are still rare
        // compared to Tick/Render raw messages
        false
    }
}
