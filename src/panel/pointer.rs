//! Pointer events, hit regions and the global listener table.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Cell position in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        let right = u32::from(self.x) + u32::from(self.width);
        let bottom = u32::from(self.y) + u32::from(self.height);
        point.x >= self.x
            && u32::from(point.x) < right
            && point.y >= self.y
            && u32::from(point.y) < bottom
    }
}

/// Everything that counts as "inside" the panel: the panel body and the
/// control that toggles it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelRegion {
    areas: Vec<Area>,
}

impl PanelRegion {
    pub fn new(areas: impl IntoIterator<Item = Area>) -> Self {
        Self {
            areas: areas.into_iter().collect(),
        }
    }

    pub fn push(&mut self, area: Area) {
        self.areas.push(area);
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// An empty region contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        self.areas.iter().any(|area| area.contains(point))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Release,
    Drag,
    Move,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub const fn press(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Press, Point::new(x, y))
    }

    pub fn is_press(&self) -> bool {
        self.kind == PointerKind::Press
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct HubInner {
    next_id: u64,
    active: BTreeSet<ListenerId>,
}

/// Global table of pointer listeners.
///
/// Cloning yields another handle to the same table. Listeners are held as
/// [`Subscription`] guards and leave the table when the guard drops.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Arc<Mutex<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let mut inner = self.inner.lock();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.active.insert(id);
        tracing::trace!(listener = id.0, active = inner.active.len(), "Pointer listener added");
        Subscription {
            hub: self.clone(),
            id,
        }
    }

    pub fn active_listeners(&self) -> usize {
        self.inner.lock().active.len()
    }

    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.inner.lock().active.contains(&id)
    }

    fn remove(&self, id: ListenerId) {
        let mut inner = self.inner.lock();
        inner.active.remove(&id);
        tracing::trace!(listener = id.0, active = inner.active.len(), "Pointer listener removed");
    }
}

/// Registration in a [`PointerHub`]; removed on drop.
pub struct Subscription {
    hub: PointerHub,
    id: ListenerId,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.remove(self.id);
    }
}
