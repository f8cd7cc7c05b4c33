use std::sync::Arc;

use parking_lot::RwLock;

use crate::style::StyleState;

/// Receiver of committed style.
///
/// Called by apply and reset with the full style; never read back by the
/// panel.
pub trait CommitSink: Send {
    fn publish(&mut self, style: StyleState);
}

impl<F> CommitSink for F
where
    F: FnMut(StyleState) + Send,
{
    fn publish(&mut self, style: StyleState) {
        self(style)
    }
}

/// Shared committed style owned by the consumer.
///
/// Cloning yields another handle to the same value; hand one clone to the
/// panel as its sink and keep another for rendering.
#[derive(Clone, Default)]
pub struct CommittedStyle {
    inner: Arc<RwLock<StyleState>>,
}

impl CommittedStyle {
    pub fn new(initial: StyleState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn get(&self) -> StyleState {
        *self.inner.read()
    }

    pub fn replace(&self, style: StyleState) {
        *self.inner.write() = style;
    }
}

impl CommitSink for CommittedStyle {
    fn publish(&mut self, style: StyleState) {
        self.replace(style);
    }
}
