use ratatui::layout::Rect;

use crate::panel::{Area, PanelRegion, Point};
use crate::style::StyleField;

pub const TOGGLE_WIDTH: u16 = 5;
pub const TOGGLE_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Rows above the first field: panel heading and a blank line.
const HEADING_ROWS: u16 = 2;
/// Title line, value line and a gap.
const FIELD_ROWS: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

/// Screen geometry for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub toggle: Rect,
    pub panel: Option<Rect>,
    pub fields: Vec<(StyleField, Rect)>,
    pub reset: Rect,
    pub apply: Rect,
    pub article: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, open: bool, panel_width: u16) -> Self {
        let footer_height = FOOTER_HEIGHT.min(area.height);
        let main = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(footer_height),
        };
        let footer = Rect {
            x: area.x,
            y: area.y + main.height,
            width: area.width,
            height: footer_height,
        };

        let mut layout = Self {
            footer,
            ..Self::default()
        };

        let panel_width = if open {
            panel_width.min(main.width.saturating_sub(TOGGLE_WIDTH))
        } else {
            0
        };
        layout.toggle = Rect {
            x: main.x + panel_width,
            y: main.y,
            width: TOGGLE_WIDTH.min(main.width.saturating_sub(panel_width)),
            height: TOGGLE_HEIGHT.min(main.height),
        };
        let article_x = layout.toggle.x + layout.toggle.width;
        layout.article = Rect {
            x: article_x,
            y: main.y,
            width: (main.x + main.width).saturating_sub(article_x),
            height: main.height,
        };

        if open && panel_width > 0 {
            let panel = Rect {
                x: main.x,
                y: main.y,
                width: panel_width,
                height: main.height,
            };
            layout.place_panel_contents(panel);
            layout.panel = Some(panel);
        }
        layout
    }

    fn place_panel_contents(&mut self, panel: Rect) {
        let inner = Rect {
            x: panel.x + 1,
            y: panel.y + 1,
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };
        self.fields = StyleField::ALL
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let row = Rect {
                    x: inner.x,
                    y: inner.y + HEADING_ROWS + index as u16 * FIELD_ROWS,
                    width: inner.width,
                    height: FIELD_ROWS - 1,
                };
                (*field, row.intersection(inner))
            })
            .collect();

        let buttons_y = (inner.y + inner.height).saturating_sub(BUTTON_HEIGHT);
        let half = inner.width / 2;
        self.reset = Rect {
            x: inner.x,
            y: buttons_y,
            width: half,
            height: BUTTON_HEIGHT.min(inner.height),
        };
        self.apply = Rect {
            x: inner.x + half,
            y: buttons_y,
            width: inner.width - half,
            height: BUTTON_HEIGHT.min(inner.height),
        };
    }

    /// Hit region for outside-press dismissal: the panel plus its toggle.
    pub fn region(&self) -> PanelRegion {
        let mut region = PanelRegion::new([area_of(self.toggle)]);
        if let Some(panel) = self.panel {
            region.push(area_of(panel));
        }
        region
    }

    /// Field whose row contains `point`, if the panel is shown.
    pub fn field_at(&self, point: Point) -> Option<(usize, StyleField)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, (_, rect))| area_of(*rect).contains(point))
            .map(|(index, (field, _))| (index, *field))
    }
}

pub fn area_of(rect: Rect) -> Area {
    Area::new(rect.x, rect.y, rect.width, rect.height)
}

pub fn hit(rect: Rect, point: Point) -> bool {
    area_of(rect).contains(point)
}
