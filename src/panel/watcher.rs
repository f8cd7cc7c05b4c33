use crate::panel::pointer::{PanelRegion, PointerEvent, PointerHub, Subscription};

/// Outside-press detector, alive exactly while the panel is open.
///
/// Installing registers one listener in the hub; dropping the watcher
/// releases it, whichever way the panel closed.
pub struct DismissalWatcher {
    subscription: Subscription,
}

impl DismissalWatcher {
    pub fn install(hub: &PointerHub) -> Self {
        let subscription = hub.subscribe();
        tracing::debug!(listener = ?subscription.id(), "Dismissal watcher installed");
        Self { subscription }
    }

    /// True when `event` is a press landing outside `region`.
    pub fn is_outside_press(&self, event: &PointerEvent, region: &PanelRegion) -> bool {
        event.is_press() && !region.contains(event.position)
    }
}

impl Drop for DismissalWatcher {
    fn drop(&mut self) {
        tracing::debug!(listener = ?self.subscription.id(), "Dismissal watcher released");
    }
}
