use crate::config::Config;
use crate::panel::{CommittedStyle, PanelController, PointerEvent, PointerHub};
use crate::style::{StyleField, StyleState};
use crate::ui::layout::{hit, ScreenLayout};
use ratatui::layout::Rect;

/// Terminal host for the style panel.
///
/// Plays the consumer role: it owns the committed style (read for the
/// article preview) and forwards user input to the panel controller.
pub struct App {
    should_quit: bool,
    controller: PanelController,
    committed: CommittedStyle,
    hub: PointerHub,
    /// Index into `StyleField::ALL` of the field under keyboard focus.
    focused: usize,
    panel_width: u16,
    area: Rect,
    layout: ScreenLayout,
}

impl App {
    pub fn new(config: &Config, defaults: StyleState) -> Self {
        let hub = PointerHub::new();
        let committed = CommittedStyle::new(defaults);
        let controller = PanelController::new(defaults, hub.clone(), committed.clone());
        let mut app = Self {
            should_quit: false,
            controller,
            committed,
            hub,
            focused: 0,
            panel_width: config.panel.width,
            area: Rect::default(),
            layout: ScreenLayout::default(),
        };
        if config.panel.start_open {
            app.toggle_panel();
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &PanelController {
        &self.controller
    }

    pub fn committed(&self) -> StyleState {
        self.committed.get()
    }

    pub fn pointer_hub(&self) -> &PointerHub {
        &self.hub
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn is_panel_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> StyleField {
        StyleField::ALL[self.focused]
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        self.relayout();
    }

    pub fn toggle_panel(&mut self) {
        self.controller.toggle();
        self.relayout();
    }

    pub fn move_focus(&mut self, delta: isize) {
        let len = StyleField::ALL.len() as isize;
        self.focused = (self.focused as isize + delta).rem_euclid(len) as usize;
    }

    /// Step the focused field to the previous/next option of its domain.
    pub fn cycle_focused(&mut self, delta: isize) {
        let field = self.focused_field();
        let next = field
            .domain()
            .step(&self.controller.draft_value(field), delta);
        self.controller.update(field, next);
    }

    pub fn apply(&mut self) {
        self.controller.apply();
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Route a pointer event: dismissal check first, then hit testing.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        let was_open = self.controller.is_open();
        self.controller.on_pointer(&event);
        if was_open != self.controller.is_open() {
            self.relayout();
        }
        if !event.is_press() {
            return;
        }

        let point = event.position;
        if hit(self.layout.toggle, point) {
            self.toggle_panel();
            return;
        }
        if !self.controller.is_open() {
            return;
        }
        if let Some((index, _)) = self.layout.field_at(point) {
            self.focused = index;
            self.cycle_focused(1);
        } else if hit(self.layout.reset, point) {
            self.reset();
        } else if hit(self.layout.apply, point) {
            self.apply();
        }
    }

    /// Release the panel and its watcher.
    pub fn shutdown(self) {
        self.controller.teardown();
    }

    fn relayout(&mut self) {
        self.layout = ScreenLayout::compute(self.area, self.controller.is_open(), self.panel_width);
        self.controller.set_region(self.layout.region());
    }
}
