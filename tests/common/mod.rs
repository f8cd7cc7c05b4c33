//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use parking_lot::Mutex;
use std::sync::Arc;
use stylepanel::config::Config;
use stylepanel::panel::{PanelController, PointerHub};
use stylepanel::style::{StyleField, StyleOption, StyleState};
use stylepanel::ui::app::App;

/// Every style published through the commit sink, in order.
pub type Commits = Arc<Mutex<Vec<StyleState>>>;

/// Controller over the domain defaults with a recording sink.
pub fn make_controller() -> (PanelController, PointerHub, Commits) {
    make_controller_with(StyleState::default())
}

pub fn make_controller_with(defaults: StyleState) -> (PanelController, PointerHub, Commits) {
    let hub = PointerHub::new();
    let commits: Commits = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&commits);
    let controller = PanelController::new(defaults, hub.clone(), move |style: StyleState| {
        sink.lock().push(style);
    });
    (controller, hub, commits)
}

pub fn last_commit(commits: &Commits) -> Option<StyleState> {
    commits.lock().last().copied()
}

pub fn option(field: StyleField, id: &str) -> StyleOption {
    field
        .domain()
        .find(id)
        .unwrap_or_else(|| panic!("no option '{}' for {}", id, field.key()))
}

/// App on a 120x40 screen with the default config.
pub fn make_app() -> App {
    let mut app = App::new(&Config::default(), StyleState::default());
    app.on_resize(120, 40);
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn mouse_down(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
