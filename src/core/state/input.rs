use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// State of the single text input
///
/// `content` always holds a complete string: it starts empty and every
/// transition replaces it wholesale with the text carried by the message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    /// The complete text content
    pub content: String,
}

impl InputState {
    /// Create a new InputState with the given content
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Create an empty InputState
    pub fn empty() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Input-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::InputChanged(text) => {
                self.content = text;
                vec![]
            }
        }
    }
}
