use crate::panel::commit::CommitSink;
use crate::panel::draft::DraftStore;
use crate::panel::pointer::{PanelRegion, PointerEvent, PointerHub};
use crate::panel::watcher::DismissalWatcher;
use crate::style::{StyleField, StyleOption, StyleState};
use crate::ui::mvi::Reducer;
use crate::ui::visibility::{Visibility, VisibilityIntent, VisibilityReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Draft/commit controller for the style panel.
///
/// The committed style is only ever written through the sink by
/// [`apply`](Self::apply) and [`reset`](Self::reset); the draft is never
/// re-read from it.
pub struct PanelController {
    /// Open/closed state (MVI pattern).
    visibility: Visibility,
    draft: DraftStore,
    /// Present iff `visibility` is open (resource, managed outside MVI).
    watcher: Option<DismissalWatcher>,
    hub: PointerHub,
    region: PanelRegion,
    sink: Box<dyn CommitSink>,
}

impl PanelController {
    pub fn new(defaults: StyleState, hub: PointerHub, sink: impl CommitSink + 'static) -> Self {
        Self {
            visibility: Visibility::default(),
            draft: DraftStore::new(defaults),
            watcher: None,
            hub,
            region: PanelRegion::default(),
            sink: Box::new(sink),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Current draft, for rendering the field controls.
    pub fn draft(&self) -> StyleState {
        self.draft.snapshot()
    }

    pub fn draft_value(&self, field: StyleField) -> StyleOption {
        self.draft.value(field)
    }

    pub fn defaults(&self) -> StyleState {
        self.draft.defaults()
    }

    /// True while an outside-press detector is installed.
    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    /// Replace the hit region used to decide what counts as inside.
    pub fn set_region(&mut self, region: PanelRegion) {
        self.region = region;
    }

    pub fn region(&self) -> &PanelRegion {
        &self.region
    }

    pub fn toggle(&mut self) {
        self.dispatch(VisibilityIntent::Toggle);
    }

    /// Feed one pointer event from the host.
    ///
    /// A press outside the region closes an open panel. Nothing happens
    /// while closed because no watcher is installed.
    pub fn on_pointer(&mut self, event: &PointerEvent) {
        let Some(watcher) = &self.watcher else {
            return;
        };
        if watcher.is_outside_press(event, &self.region) {
            tracing::debug!(x = event.position.x, y = event.position.y, "Outside press dismisses panel");
            self.dispatch(VisibilityIntent::Dismiss);
        }
    }

    /// Change one field of the draft. Committed style is untouched.
    pub fn update(&mut self, field: StyleField, option: StyleOption) {
        if self.draft.update(field, option) {
            tracing::debug!(field = field.key(), option = option.id, "Draft updated");
        }
    }

    /// Publish the whole draft as the committed style.
    pub fn apply(&mut self) {
        let style = self.draft.snapshot();
        tracing::debug!(?style, "Applying draft");
        self.sink.publish(style);
    }

    /// Restore defaults in the draft and publish them as committed.
    pub fn reset(&mut self) {
        self.draft.reset_to_default();
        let style = self.draft.snapshot();
        tracing::debug!("Resetting draft and committed style to defaults");
        self.sink.publish(style);
    }

    /// Tear the controller down, releasing the watcher if the panel is open.
    pub fn teardown(self) {}

    fn dispatch(&mut self, intent: VisibilityIntent) {
        let before = self.visibility;
        dispatch_mvi!(self, visibility, VisibilityReducer, intent);
        if before != self.visibility {
            tracing::debug!(?intent, from = ?before, to = ?self.visibility, "Panel visibility changed");
        }
        self.sync_watcher();
    }

    fn sync_watcher(&mut self) {
        match (self.visibility, self.watcher.is_some()) {
            (Visibility::Open, false) => {
                self.watcher = Some(DismissalWatcher::install(&self.hub));
            }
            (Visibility::Closed, true) => {
                self.watcher = None;
            }
            _ => {}
        }
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        if self.watcher.take().is_some() {
            tracing::debug!("Panel torn down while open");
        }
    }
}
