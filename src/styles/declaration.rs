use serde::{Deserialize, Serialize};

use crate::styles::{CssValue, GLOBAL};

/// A single style declaration to add to a store.
///
/// Every field is optional when deserializing and falls back to its default:
///
/// | Field      | Default    |
/// |------------|------------|
/// | `query`    | `"global"` |
/// | `element`  | `""`       |
/// | `property` | `""`       |
/// | `value`    | `""`       |
///
/// # Example
///
/// ```rust
/// use css_compiler::styles::Declaration;
///
/// let declaration = Declaration::new()
///     .query("(max-width:600px)")
///     .element("body")
///     .property("margin")
///     .value("4px");
///
/// assert_eq!(declaration.query, "(max-width:600px)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Declaration {
    /// Media query the declaration belongs to
    pub query: String,

    /// Selector the declaration targets
    pub element: String,

    /// CSS property name
    pub property: String,

    /// Property value, or a list of fallback values
    pub value: CssValue,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            query: GLOBAL.to_string(),
            element: String::new(),
            property: String::new(),
            value: CssValue::default(),
        }
    }
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a declaration outside any media query.
    pub fn rule(
        element: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<CssValue>,
    ) -> Self {
        Self::new().element(element).property(property).value(value)
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn value(mut self, value: impl Into<CssValue>) -> Self {
        self.value = value.into();
        self
    }
}

/// Criteria for a filtered store query.
///
/// Fields left as `None` impose no constraint. All present fields must match
/// for an entry to survive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Keep only the media query with this exact key
    pub query: Option<String>,

    /// Keep only selectors with this exact key
    pub element: Option<String>,

    /// Keep only properties with this exact name
    pub property: Option<String>,

    /// Keep only properties whose value equals, or lists, this string
    pub value: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns true if no field is set, i.e. the filter keeps everything.
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.element.is_none()
            && self.property.is_none()
            && self.value.is_none()
    }

    pub(crate) fn accepts_query(&self, query: &str) -> bool {
        self.query.as_deref().map_or(true, |wanted| wanted == query)
    }

    pub(crate) fn accepts_element(&self, element: &str) -> bool {
        self.element.as_deref().map_or(true, |wanted| wanted == element)
    }

    pub(crate) fn accepts_property(&self, property: &str) -> bool {
        self.property.as_deref().map_or(true, |wanted| wanted == property)
    }

    pub(crate) fn accepts_value(&self, value: &CssValue) -> bool {
        self.value.as_deref().map_or(true, |wanted| value.matches(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_defaults() {
        let declaration = Declaration::default();
        assert_eq!(declaration.query, "global");
        assert_eq!(declaration.element, "");
        assert_eq!(declaration.property, "");
        assert_eq!(declaration.value, CssValue::Single(String::new()));
    }

    #[test]
    fn test_declaration_rule_is_global() {
        let declaration = Declaration::rule("body", "margin", "0");
        assert_eq!(declaration.query, GLOBAL);
        assert_eq!(declaration.element, "body");
        assert_eq!(declaration.value, CssValue::from("0"));
    }

    #[test]
    fn test_declaration_deserializes_with_defaults() {
        let declaration: Declaration = toml::from_str(
            r#"
            element = ".a"
            value = ["-webkit-box", "flex"]
            "#,
        )
        .unwrap();

        assert_eq!(declaration.query, "global");
        assert_eq!(declaration.element, ".a");
        assert_eq!(declaration.property, "");
        assert!(declaration.value.matches("flex"));
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert!(filter.accepts_query("anything"));
        assert!(filter.accepts_element(""));
        assert!(filter.accepts_property("color"));
        assert!(filter.accepts_value(&CssValue::from("red")));
    }

    #[test]
    fn test_filter_fields_are_exact_match() {
        let filter = Filter::new()
            .query("screen")
            .element(".a")
            .property("color")
            .value("red");

        assert!(!filter.is_empty());
        assert!(filter.accepts_query("screen"));
        assert!(!filter.accepts_query("print"));
        assert!(!filter.accepts_element(".ab"));
        assert!(!filter.accepts_property("background-color"));
        assert!(filter.accepts_value(&CssValue::from(["blue", "red"])));
        assert!(!filter.accepts_value(&CssValue::from("blue")));
    }
}
