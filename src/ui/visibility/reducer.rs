use crate::ui::mvi::Reducer;
use crate::ui::visibility::intent::VisibilityIntent;
use crate::ui::visibility::state::Visibility;

/// Open/closed state machine for the panel.
///
/// Only `Toggle` can open the panel. `Dismiss` closes an open panel and is
/// a no-op on a closed one.
pub struct VisibilityReducer;

impl Reducer for VisibilityReducer {
    type State = Visibility;
    type Intent = VisibilityIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VisibilityIntent::Toggle => match state {
                Visibility::Closed => Visibility::Open,
                Visibility::Open => Visibility::Closed,
            },
            VisibilityIntent::Dismiss => Visibility::Closed,
        }
    }
}
