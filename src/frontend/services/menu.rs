//! Open/closed state for the mobile menu and the user dropdown.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
