use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityIntent {
    /// User pressed the toggle control.
    Toggle,
    /// Pointer pressed outside the panel while it was open.
    Dismiss,
}

impl Intent for VisibilityIntent {}
