mod intent;
mod reducer;
mod state;

pub use intent::VisibilityIntent;
pub use reducer::VisibilityReducer;
pub use state::Visibility;
