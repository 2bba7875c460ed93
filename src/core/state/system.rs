use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                // Resize generates a TUI resize command
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_resume() {
        let mut system = SystemState::default();
        assert!(!system.should_suspend);

        let cmds = system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        assert!(cmds.is_empty());

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                assert_eq!(*width, 80);
                assert_eq!(*height, 24);
            }
            _ => panic!("Expected Resize command"),
        }
    }

    #[test]
    fn test_resize_does_not_touch_flags() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Resize(10, 10));

        assert!(!system.should_quit);
        assert!(!system.should_suspend);
    }
}
