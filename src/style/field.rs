use crate::style::domain::{self, OptionDomain};

/// The closed set of configurable style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl StyleField {
    /// All fields, in panel order.
    pub const ALL: [StyleField; 5] = [
        StyleField::FontFamily,
        StyleField::FontSize,
        StyleField::FontColor,
        StyleField::BackgroundColor,
        StyleField::ContentWidth,
    ];

    /// Stable key used in logs and diagnostics.
    pub fn key(self) -> &'static str {
        match self {
            StyleField::FontFamily => "fontFamily",
            StyleField::FontSize => "fontSize",
            StyleField::FontColor => "fontColor",
            StyleField::BackgroundColor => "backgroundColor",
            StyleField::ContentWidth => "contentWidth",
        }
    }

    /// Name of the field as it appears in the config file.
    pub fn config_key(self) -> &'static str {
        match self {
            StyleField::FontFamily => "font_family",
            StyleField::FontSize => "font_size",
            StyleField::FontColor => "font_color",
            StyleField::BackgroundColor => "background_color",
            StyleField::ContentWidth => "content_width",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StyleField::FontFamily => "Font",
            StyleField::FontSize => "Font size",
            StyleField::FontColor => "Font color",
            StyleField::BackgroundColor => "Background color",
            StyleField::ContentWidth => "Content width",
        }
    }

    /// The option domain this field draws from.
    pub fn domain(self) -> &'static OptionDomain {
        match self {
            StyleField::FontFamily => &domain::FONT_FAMILIES,
            StyleField::FontSize => &domain::FONT_SIZES,
            StyleField::FontColor => &domain::FONT_COLORS,
            StyleField::BackgroundColor => &domain::BACKGROUND_COLORS,
            StyleField::ContentWidth => &domain::CONTENT_WIDTHS,
        }
    }
}
