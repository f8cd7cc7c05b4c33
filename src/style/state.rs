use crate::style::field::StyleField;
use crate::style::option::StyleOption;

/// One option per style field.
///
/// Used for both the panel-local draft and the consumer's committed style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub font_family: StyleOption,
    pub font_size: StyleOption,
    pub font_color: StyleOption,
    pub background_color: StyleOption,
    pub content_width: StyleOption,
}

impl StyleState {
    pub fn get(&self, field: StyleField) -> StyleOption {
        match field {
            StyleField::FontFamily => self.font_family,
            StyleField::FontSize => self.font_size,
            StyleField::FontColor => self.font_color,
            StyleField::BackgroundColor => self.background_color,
            StyleField::ContentWidth => self.content_width,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: StyleField, option: StyleOption) {
        let slot = match field {
            StyleField::FontFamily => &mut self.font_family,
            StyleField::FontSize => &mut self.font_size,
            StyleField::FontColor => &mut self.font_color,
            StyleField::BackgroundColor => &mut self.background_color,
            StyleField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    /// Builder-style variant of [`StyleState::set`].
    pub fn with(mut self, field: StyleField, option: StyleOption) -> Self {
        self.set(field, option);
        self
    }

    /// True when every field holds an option from its own domain.
    pub fn is_well_formed(&self) -> bool {
        StyleField::ALL
            .iter()
            .all(|field| field.domain().contains(&self.get(*field)))
    }
}

impl Default for StyleState {
    /// The domain defaults for every field.
    fn default() -> Self {
        Self {
            font_family: StyleField::FontFamily.domain().default_option(),
            font_size: StyleField::FontSize.domain().default_option(),
            font_color: StyleField::FontColor.domain().default_option(),
            background_color: StyleField::BackgroundColor.domain().default_option(),
            content_width: StyleField::ContentWidth.domain().default_option(),
        }
    }
}
