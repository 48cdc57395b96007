/// Collapsible mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn select_item(self) -> Self {
        Self::Closed
    }

    /// Click outside the panel.
    pub fn dismiss(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_transitions() {
        let menu = MenuState::default();
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(menu.toggle(), MenuState::Open);
        assert_eq!(menu.toggle().toggle(), MenuState::Closed);
        assert_eq!(MenuState::Open.select_item(), MenuState::Closed);
        assert_eq!(MenuState::Open.dismiss(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismiss(), MenuState::Closed);
        assert!(MenuState::Open.is_open());
    }
}
