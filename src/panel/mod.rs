//! Panel state controller.
//!
//! The controller owns the draft style, the open/closed state and the
//! dismissal watcher that exists only while the panel is open. Committed
//! style lives with the consumer and is written through a [`CommitSink`].

mod commit;
mod controller;
mod draft;
mod pointer;
mod watcher;

pub use commit::{CommitSink, CommittedStyle};
pub use controller::PanelController;
pub use draft::DraftStore;
pub use pointer::{
    Area, ListenerId, PanelRegion, Point, PointerEvent, PointerHub, PointerKind, Subscription,
};
pub use watcher::DismissalWatcher;
