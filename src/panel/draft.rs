use crate::style::{StyleField, StyleOption, StyleState};

/// Panel-local draft of the style being edited.
///
/// Mutated freely while the panel is open; never notifies anyone.
#[derive(Debug, Clone)]
pub struct DraftStore {
    current: StyleState,
    defaults: StyleState,
}

impl DraftStore {
    /// Start with the draft equal to `defaults`.
    pub fn new(defaults: StyleState) -> Self {
        Self {
            current: defaults,
            defaults,
        }
    }

    /// Replace the draft value of one field.
    ///
    /// Options outside the field's domain are rejected and the draft is left
    /// as it was.
    pub fn update(&mut self, field: StyleField, option: StyleOption) -> bool {
        if !field.domain().contains(&option) {
            tracing::warn!(
                field = field.key(),
                option = option.id,
                "Ignoring option outside the field domain"
            );
            return false;
        }
        self.current.set(field, option);
        true
    }

    /// Discard every pending edit.
    pub fn reset_to_default(&mut self) {
        self.current = self.defaults;
    }

    pub fn snapshot(&self) -> StyleState {
        self.current
    }

    pub fn value(&self, field: StyleField) -> StyleOption {
        self.current.get(field)
    }

    pub fn defaults(&self) -> StyleState {
        self.defaults
    }
}
