use std::fmt;
use std::hash::{Hash, Hasher};

/// One selectable choice for a style field.
///
/// Identity is the `id`. The `label` and `value` are presentation data
/// (display text and the concrete CSS-like value) and take no part in
/// equality.
#[derive(Debug, Clone, Copy)]
pub struct StyleOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

impl StyleOption {
    pub const fn new(id: &'static str, label: &'static str, value: &'static str) -> Self {
        Self { id, label, value }
    }
}

impl PartialEq for StyleOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StyleOption {}

impl Hash for StyleOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for StyleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_presentation() {
        let a = StyleOption::new("red", "Red", "#FD2455");
        let b = StyleOption::new("red", "Crimson", "#ff0000");
        assert_eq!(a, b);
        assert_ne!(a, StyleOption::new("blue", "Red", "#FD2455"));
    }

    #[test]
    fn display_uses_label() {
        let option = StyleOption::new("open-sans", "Open Sans", "Open Sans, sans-serif");
        assert_eq!(option.to_string(), "Open Sans");
    }
}
