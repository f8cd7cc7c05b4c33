use serde::{Deserialize, Serialize};

use crate::style::{StyleField, StyleState};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Presentation of the panel in the terminal host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Open the panel once at startup (default: false).
    #[serde(default)]
    pub start_open: bool,
    /// Sidebar width in terminal columns (default: 38).
    #[serde(default = "default_panel_width")]
    pub width: u16,
}

/// Per-field default overrides, by option id.
///
/// Unset fields fall back to the domain default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_width: Option<String>,
}

pub const MIN_PANEL_WIDTH: u16 = 20;

fn default_panel_width() -> u16 {
    38
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            start_open: false,
            width: default_panel_width(),
        }
    }
}

impl DefaultsConfig {
    pub fn get(&self, field: StyleField) -> Option<&str> {
        let slot = match field {
            StyleField::FontFamily => &self.font_family,
            StyleField::FontSize => &self.font_size,
            StyleField::FontColor => &self.font_color,
            StyleField::BackgroundColor => &self.background_color,
            StyleField::ContentWidth => &self.content_width,
        };
        slot.as_deref()
    }

    /// Fully populated table describing `style`.
    pub fn from_style(style: &StyleState) -> Self {
        Self {
            font_family: Some(style.font_family.id.to_string()),
            font_size: Some(style.font_size.id.to_string()),
            font_color: Some(style.font_color.id.to_string()),
            background_color: Some(style.background_color.id.to_string()),
            content_width: Some(style.content_width.id.to_string()),
        }
    }
}
