//! Option domains for every style field.
//!
//! Each domain is an ordered, static list of options with one designated
//! default. The tables below are the only source of legal values.

use crate::style::option::StyleOption;

/// Ordered set of legal options for one field plus its default member.
#[derive(Debug)]
pub struct OptionDomain {
    options: &'static [StyleOption],
    default_index: usize,
}

impl OptionDomain {
    const fn new(options: &'static [StyleOption], default_index: usize) -> Self {
        Self {
            options,
            default_index,
        }
    }

    pub fn options(&self) -> &'static [StyleOption] {
        self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn default_option(&self) -> StyleOption {
        self.options[self.default_index]
    }

    pub fn contains(&self, option: &StyleOption) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    pub fn position(&self, option: &StyleOption) -> Option<usize> {
        self.options.iter().position(|candidate| candidate == option)
    }

    /// Look up an option by its id.
    pub fn find(&self, id: &str) -> Option<StyleOption> {
        self.options.iter().copied().find(|option| option.id == id)
    }

    /// Step `delta` positions from `current`, wrapping at both ends.
    ///
    /// An option outside the domain steps from the default.
    pub fn step(&self, current: &StyleOption, delta: isize) -> StyleOption {
        let len = self.options.len() as isize;
        let from = self.position(current).unwrap_or(self.default_index) as isize;
        let index = (from + delta).rem_euclid(len);
        self.options[index as usize]
    }
}

static FONT_FAMILY_OPTIONS: [StyleOption; 5] = [
    StyleOption::new("open-sans", "Open Sans", "Open Sans, sans-serif"),
    StyleOption::new("ubuntu", "Ubuntu", "Ubuntu, sans-serif"),
    StyleOption::new(
        "cormorant-garamond",
        "Cormorant Garamond",
        "Cormorant Garamond, serif",
    ),
    StyleOption::new("days-one", "Days One", "Days One, sans-serif"),
    StyleOption::new("merriweather", "Merriweather", "Merriweather, serif"),
];

pub static FONT_FAMILIES: OptionDomain = OptionDomain::new(&FONT_FAMILY_OPTIONS, 0);

static FONT_SIZE_OPTIONS: [StyleOption; 3] = [
    StyleOption::new("18", "18px", "18px"),
    StyleOption::new("24", "24px", "24px"),
    StyleOption::new("38", "38px", "38px"),
];

pub static FONT_SIZES: OptionDomain = OptionDomain::new(&FONT_SIZE_OPTIONS, 0);

static FONT_COLOR_OPTIONS: [StyleOption; 9] = [
    StyleOption::new("black", "Black", "#000000"),
    StyleOption::new("white", "White", "#FFFFFF"),
    StyleOption::new("gray", "Gray", "#C4C4C4"),
    StyleOption::new("pink", "Pink", "#FED7E2"),
    StyleOption::new("yellow", "Yellow", "#FFC802"),
    StyleOption::new("green", "Green", "#80D994"),
    StyleOption::new("blue", "Blue", "#6FC1FC"),
    StyleOption::new("purple", "Purple", "#5F3DC4"),
    StyleOption::new("red", "Red", "#FD2455"),
];

pub static FONT_COLORS: OptionDomain = OptionDomain::new(&FONT_COLOR_OPTIONS, 0);

static BACKGROUND_COLOR_OPTIONS: [StyleOption; 9] = [
    StyleOption::new("white", "White", "#FFFFFF"),
    StyleOption::new("black", "Black", "#000000"),
    StyleOption::new("gray", "Gray", "#C4C4C4"),
    StyleOption::new("pink", "Pink", "#FED7E2"),
    StyleOption::new("yellow", "Yellow", "#FFC802"),
    StyleOption::new("green", "Green", "#80D994"),
    StyleOption::new("blue", "Blue", "#6FC1FC"),
    StyleOption::new("purple", "Purple", "#5F3DC4"),
    StyleOption::new("beige", "Beige", "#F5F5DC"),
];

pub static BACKGROUND_COLORS: OptionDomain = OptionDomain::new(&BACKGROUND_COLOR_OPTIONS, 0);

static CONTENT_WIDTH_OPTIONS: [StyleOption; 3] = [
    StyleOption::new("800px", "Medium", "800px"),
    StyleOption::new("548px", "Narrow", "548px"),
    StyleOption::new("1394px", "Wide", "1394px"),
];

pub static CONTENT_WIDTHS: OptionDomain = OptionDomain::new(&CONTENT_WIDTH_OPTIONS, 0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleField;

    #[test]
    fn every_domain_has_a_member_default() {
        for field in StyleField::ALL {
            let domain = field.domain();
            assert!(!domain.is_empty(), "{} has no options", field.key());
            assert!(domain.contains(&domain.default_option()));
        }
    }

    #[test]
    fn ids_are_unique_within_a_domain() {
        for field in StyleField::ALL {
            let options = field.domain().options();
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id in {}", field.key());
                }
            }
        }
    }

    #[test]
    fn find_by_id() {
        assert_eq!(FONT_SIZES.find("24").map(|o| o.label), Some("24px"));
        assert!(FONT_SIZES.find("25").is_none());
    }

    #[test]
    fn step_wraps_both_ways() {
        let first = FONT_SIZES.options()[0];
        let last = FONT_SIZES.options()[FONT_SIZES.len() - 1];
        assert_eq!(FONT_SIZES.step(&last, 1), first);
        assert_eq!(FONT_SIZES.step(&first, -1), last);
        assert_eq!(FONT_SIZES.step(&first, 1).id, "24");
    }

    #[test]
    fn step_from_foreign_option_starts_at_default() {
        let foreign = StyleOption::new("nope", "Nope", "");
        assert_eq!(FONT_SIZES.step(&foreign, 1).id, "24");
    }
}
