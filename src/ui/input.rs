use crate::panel::{Point, PointerEvent, PointerKind};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::F(2)) {
        app.toggle_panel();
        return;
    }

    if !app.is_panel_open() {
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    match key.code {
        KeyCode::Esc => app.toggle_panel(),
        KeyCode::Up => app.move_focus(-1),
        KeyCode::Down => app.move_focus(1),
        KeyCode::Left => app.cycle_focused(-1),
        KeyCode::Right => app.cycle_focused(1),
        KeyCode::Enter => app.apply(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    app.on_pointer(pointer_event(mouse));
}

pub fn pointer_event(mouse: MouseEvent) -> PointerEvent {
    let kind = match mouse.kind {
        MouseEventKind::Down(_) => PointerKind::Press,
        MouseEventKind::Up(_) => PointerKind::Release,
        MouseEventKind::Drag(_) => PointerKind::Drag,
        MouseEventKind::Moved => PointerKind::Move,
        MouseEventKind::ScrollDown
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => PointerKind::Scroll,
    };
    PointerEvent::new(kind, Point::new(mouse.column, mouse.row))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
