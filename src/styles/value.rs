use serde::{Deserialize, Serialize};

/// The value stored for one CSS property.
///
/// A property usually holds a single value, but callers can register several
/// fallbacks (vendor-prefixed alternatives, for example) that are emitted in
/// sequence under the same property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Single(String),
    Multiple(Vec<String>),
}

impl CssValue {
    /// Returns true if this value is `candidate`, or lists it as one of its fallbacks.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            CssValue::Single(value) => value == candidate,
            CssValue::Multiple(values) => values.iter().any(|value| value == candidate),
        }
    }

    /// Iterate the individual values in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            CssValue::Single(value) => std::slice::from_ref(value),
            CssValue::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

impl Default for CssValue {
    fn default() -> Self {
        CssValue::Single(String::new())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Single(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for CssValue {
    fn from(values: Vec<String>) -> Self {
        CssValue::Multiple(values)
    }
}

impl From<Vec<&str>> for CssValue {
    fn from(values: Vec<&str>) -> Self {
        CssValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CssValue {
    fn from(values: [&str; N]) -> Self {
        CssValue::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}
