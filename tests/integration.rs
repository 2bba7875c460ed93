//! End-to-end checks of the architecture contract: initial state, pure
//! update, pure view.

use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use echotui::{
    core::msg::{ui::UiMsg, Msg},
    presentation::components::HomeComponent,
    update, AppState,
};

fn render(state: &AppState) -> Buffer {
    let backend = TestBackend::new(60, 10);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let home = HomeComponent::new();
    terminal
        .draw(|frame| home.view(state, frame, frame.area()))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn initial_state_is_empty() {
    let state = AppState::new();

    assert_eq!(state.content(), "");
}

#[test]
fn update_mirrors_message_text_exactly() {
    for text in ["hello", "", "  spaced  ", "改行なし🚀"] {
        let (state, cmds) = update(
            Msg::Ui(UiMsg::InputChanged(text.to_string())),
            AppState::new(),
        );

        assert_eq!(state.content(), text);
        assert!(cmds.is_empty());
    }
}

#[test]
fn update_twice_with_same_arguments_is_stable() {
    let msg = Msg::Ui(UiMsg::InputChanged("twice".to_string()));

    let (first, _) = update(msg.clone(), AppState::new());
    let (second, _) = update(msg, AppState::new());

    assert_eq!(first.input, second.input);
}

#[test]
fn round_trip_from_init_to_rendered_echo() {
    // init -> InputChanged("hello") -> view
    let (state, _) = update(
        Msg::Ui(UiMsg::InputChanged("hello".to_string())),
        AppState::new(),
    );
    assert_eq!(state.content(), "hello");

    let text = buffer_text(&render(&state));
    assert!(text.contains("hello"));
    assert!(text.contains("You typed:"));
}

#[test]
fn clearing_after_nonempty_state_resets_echo() {
    let (state, _) = update(
        Msg::Ui(UiMsg::InputChanged("hello".to_string())),
        AppState::new(),
    );
    let (state, _) = update(Msg::Ui(UiMsg::InputChanged(String::new())), state);

    assert_eq!(state.content(), "");

    // The placeholder reappears and the old text is gone
    let text = buffer_text(&render(&state));
    assert!(!text.contains("hello"));
    assert!(text.contains("Type something..."));
}
