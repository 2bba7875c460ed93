use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{system::SystemMsg, ui::UiMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
///
/// Keyboard editing is folded here: the current content and the pressed key
/// produce the complete replacement text, so the update function only ever
/// sees `InputChanged` carrying the full new string.
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on current content
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => {
            let mut next = state.input.content.clone();
            next.push_str(&text);
            vec![Msg::Ui(UiMsg::InputChanged(next))]
        }

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key.code {
        KeyCode::Esc => return vec![Msg::System(SystemMsg::Quit)],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![Msg::System(SystemMsg::Quit)];
        }
        KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![Msg::System(SystemMsg::Suspend)];
        }
        _ => {}
    }

    match edited_content(key, &state.input.content) {
        Some(next) => vec![Msg::Ui(UiMsg::InputChanged(next))],
        None => vec![],
    }
}

/// Computes the replacement content for an editing key, if the key edits at all
fn edited_content(key: KeyEvent, current: &str) -> Option<String> {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(String::new())
        }
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            let mut next = current.to_owned();
            next.push(c);
            Some(next)
        }
        KeyCode::Backspace if !current.is_empty() => {
            let mut next = current.to_owned();
            next.pop();
            Some(next)
        }
        _ => None,
    }
}
