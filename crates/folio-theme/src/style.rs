//! Style declarations and selector tables.
//!
//! A [`Style`] is an ordered block of `property: value` declarations. A
//! [`StyleRules`] maps selectors to styles and is what themes and the site
//! override table are made of. Merging is property by property and the
//! incoming value wins, so an override only has to name what it changes.

use std::fmt::Write as _;

use indexmap::IndexMap;

/// An ordered set of CSS declarations, keyed by kebab-case property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: IndexMap<String, String>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, returning the style for chaining.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.set(property, value);
        self
    }

    /// Set a declaration, replacing any earlier value for the property.
    pub fn set(&mut self, property: impl Into<String>, value: impl ToString) {
        self.declarations.insert(property.into(), value.to_string());
    }

    /// Get the value for a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Merge `other` into this style. Values from `other` win.
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in &other.declarations {
            self.declarations.insert(property.clone(), value.clone());
        }
    }

    /// Return this style merged with `other`.
    #[must_use]
    pub fn merged(mut self, other: &Style) -> Self {
        self.merge(other);
        self
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the style has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as the value of an HTML `style` attribute.
    #[must_use]
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K, V> FromIterator<(K, V)> for Style
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            declarations: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A selector to style table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRules {
    rules: IndexMap<String, Style>,
}

impl StyleRules {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, returning the table for chaining. An existing selector is
    /// merged rather than replaced.
    #[must_use]
    pub fn rule(mut self, selector: impl Into<String>, style: Style) -> Self {
        self.insert(selector, style);
        self
    }

    /// Insert a rule, merging into an existing rule for the same selector.
    pub fn insert(&mut self, selector: impl Into<String>, style: Style) {
        self.rules
            .entry(selector.into())
            .and_modify(|existing| existing.merge(&style))
            .or_insert(style);
    }

    /// Get the style for a selector.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&Style> {
        self.rules.get(selector)
    }

    /// Get one property of one selector.
    #[must_use]
    pub fn property(&self, selector: &str, property: &str) -> Option<&str> {
        self.get(selector).and_then(|style| style.get(property))
    }

    /// Merge `other` into this table. New selectors are appended; shared
    /// selectors are merged property by property with `other` winning.
    pub fn merge(&mut self, other: StyleRules) {
        for (selector, style) in other.rules {
            self.insert(selector, style);
        }
    }

    /// Return this table merged with `other`.
    #[must_use]
    pub fn merged(mut self, other: StyleRules) -> Self {
        self.merge(other);
        self
    }

    /// Iterate rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the table as a stylesheet. Empty rules are skipped.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (selector, style) in self.iter().filter(|(_, s)| !s.is_empty()) {
            let _ = writeln!(css, "{selector} {{");
            for (property, value) in style.iter() {
                let _ = writeln!(css, "  {property}: {value};");
            }
            css.push_str("}\n");
        }
        css
    }
}

impl<S> FromIterator<(S, Style)> for StyleRules
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, Style)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (selector, style) in iter {
            rules.insert(selector, style);
        }
        rules
    }
}

impl From<IndexMap<String, IndexMap<String, String>>> for StyleRules {
    fn from(map: IndexMap<String, IndexMap<String, String>>) -> Self {
        map.into_iter()
            .map(|(selector, declarations)| (selector, declarations.into_iter().collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_inline() {
        let style = Style::new()
            .with("margin-top", 0)
            .with("color", "#d23669");
        assert_eq!(style.to_inline(), "margin-top: 0; color: #d23669");
    }

    #[test]
    fn test_style_set_replaces_in_place() {
        let mut style = Style::new().with("a", "1").with("b", "2");
        style.set("a", "3");
        assert_eq!(style.to_inline(), "a: 3; b: 2");
    }

    #[test]
    fn test_merge_later_wins_per_property() {
        let mut base = StyleRules::new().rule(
            "a",
            Style::new()
                .with("color", "#007acc")
                .with("text-decoration", "none"),
        );
        let overrides = StyleRules::new().rule("a", Style::new().with("color", "#d23669"));

        base.merge(overrides);

        assert_eq!(base.property("a", "color"), Some("#d23669"));
        assert_eq!(base.property("a", "text-decoration"), Some("none"));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_merge_appends_new_selectors_in_order() {
        let base = StyleRules::new().rule("h1", Style::new().with("margin", "0"));
        let merged = base.merged(
            StyleRules::new()
                .rule("p code", Style::new().with("font-size", "1rem"))
                .rule("hr", Style::new().with("height", "1px")),
        );

        let selectors: Vec<_> = merged.iter().map(|(s, _)| s).collect();
        assert_eq!(selectors, vec!["h1", "p code", "hr"]);
    }

    #[test]
    fn test_malformed_selector_is_carried_through() {
        let rules = StyleRules::new().rule("a[[[", Style::new().with("color", "red"));
        let css = rules.to_css();
        assert!(css.contains("a[[[ {"));
    }

    #[test]
    fn test_to_css_skips_empty_rules() {
        let rules = StyleRules::new()
            .rule("empty", Style::new())
            .rule("hr", Style::new().with("height", "1px"));
        assert_eq!(rules.to_css(), "hr {\n  height: 1px;\n}\n");
    }

    #[test]
    fn test_from_index_map() {
        let mut decls = IndexMap::new();
        decls.insert("box-shadow".to_string(), "none".to_string());
        let mut map = IndexMap::new();
        map.insert("a.anchor".to_string(), decls);

        let rules = StyleRules::from(map);
        assert_eq!(rules.property("a.anchor", "box-shadow"), Some("none"));
    }
}
