use crate::ui::mvi::UiState;

/// Whether the panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl UiState for Visibility {}

impl Visibility {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}
