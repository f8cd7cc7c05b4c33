use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0xc8, 0x02);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PANEL_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PANEL_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const APPLY_BG: Color = Color::Rgb(0x80, 0xd9, 0x94);
pub const RESET_FG: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
