use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;

    use super::*;

    #[test]
    fn test_system_msg_frequent_detection() {
        assert!(!SystemMsg::Quit.is_frequent());
        assert!(!SystemMsg::Resize(80, 24).is_frequent());
    }

    #[test]
    fn test_system_msg_equality() {
        assert_eq!(SystemMsg::Quit, SystemMsg::Quit);
        assert_eq!(SystemMsg::Suspend, SystemMsg::Suspend);
        assert_ne!(SystemMsg::Quit, SystemMsg::Suspend);
        assert_ne!(SystemMsg::Resize(80, 24), SystemMsg::Resize(80, 25));
    }

    #[test]
    fn test_system_msg_serialization() -> Result<()> {
        let msg = SystemMsg::Resize(120, 40);
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SystemMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
