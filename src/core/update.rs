use crate::core::{cmd::Cmd, msg::Msg, state::AppState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
///
/// Total over all messages: the domain admits no invalid event, so there is
/// no failure branch.
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // UI messages (delegated to InputState)
        Msg::Ui(ui_msg) => {
            let commands = state.input.update(ui_msg);
            (state, commands)
        }
    }
}
