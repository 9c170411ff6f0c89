use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::Result,
    generator::Generator,
    styles::{CssValue, Properties, StyleSheet, GLOBAL},
};

/// Output settings for [`CssGenerator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Emit compact CSS with no optional whitespace
    pub minify: bool,

    /// Indentation unit for pretty output
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            minify: false,
            indent: "    ".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn minified() -> Self {
        Self {
            minify: true,
            ..Self::default()
        }
    }
}

/// Serializes a [`StyleSheet`] to plain CSS text.
///
/// - Rules under the `"global"` media query are written at top level.
/// - Every other media query becomes an at-rule block. Keys that already start
///   with `@` are used verbatim, anything else is prefixed with `@media `.
/// - A property with several fallback values is written once per value.
/// - Selectors without properties and media queries without rules are skipped.
/// - Entries with an empty selector or property name are skipped with a warning.
///
/// ```rust
/// use css_compiler::generator::{CssGenerator, Generator};
/// use css_compiler::styles::{Declaration, StyleSheet};
///
/// let sheet: StyleSheet = [Declaration::rule("body", "margin", "0")].into_iter().collect();
/// let css = CssGenerator::new().generate(&sheet).unwrap();
/// assert_eq!(css, "body {\n    margin: 0;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CssGenerator {
    config: GeneratorConfig,
}

impl CssGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn at_rule(query: &str) -> String {
        if query.starts_with('@') {
            query.to_string()
        } else {
            format!("@media {}", query)
        }
    }

    /// Selectors of one media query that can produce a rule
    fn renderable<'a>(
        query: &str,
        selectors: impl Iterator<Item = (&'a String, &'a Properties)>,
    ) -> Vec<(&'a str, Vec<(&'a str, &'a CssValue)>)> {
        selectors
            .filter_map(|(element, properties)| {
                if element.is_empty() {
                    if !properties.is_empty() {
                        warn!(
                            "Skipping {} declarations with no selector in '{}'",
                            properties.len(),
                            query
                        );
                    }
                    return None;
                }

                let declarations: Vec<_> = properties
                    .iter()
                    .filter(|(property, _)| {
                        if property.is_empty() {
                            warn!(
                                "Skipping declaration with no property in '{}' ({})",
                                element, query
                            );
                            return false;
                        }
                        true
                    })
                    .map(|(property, value)| (property.as_str(), value))
                    .collect();

                if declarations.is_empty() {
                    None
                } else {
                    Some((element.as_str(), declarations))
                }
            })
            .collect()
    }

    fn write_rule(
        &self,
        out: &mut String,
        element: &str,
        declarations: &[(&str, &CssValue)],
        depth: usize,
    ) {
        if self.config.minify {
            out.push_str(element);
            out.push('{');
            for (property, value) in declarations {
                for single in value.iter() {
                    out.push_str(&format!("{}:{};", property, single));
                }
            }
            out.push('}');
            return;
        }

        let outer = self.config.indent.repeat(depth);
        let inner = self.config.indent.repeat(depth + 1);

        out.push_str(&format!("{}{} {{\n", outer, element));
        for (property, value) in declarations {
            for single in value.iter() {
                out.push_str(&format!("{}{}: {};\n", inner, property, single));
            }
        }
        out.push_str(&format!("{}}}\n", outer));
    }
}

impl Generator for CssGenerator {
    fn name(&self) -> &str {
        "css"
    }

    fn generate(&self, sheet: &StyleSheet) -> Result<String> {
        let mut out = String::new();

        for (query, selectors) in sheet {
            let rules = Self::renderable(query, selectors.iter());
            if rules.is_empty() {
                continue;
            }

            if query == GLOBAL {
                for (element, declarations) in &rules {
                    self.write_rule(&mut out, element, declarations, 0);
                }
                continue;
            }

            let at_rule = Self::at_rule(query);
            if self.config.minify {
                out.push_str(&at_rule);
                out.push('{');
                for (element, declarations) in &rules {
                    self.write_rule(&mut out, element, declarations, 0);
                }
                out.push('}');
            } else {
                out.push_str(&format!("{} {{\n", at_rule));
                for (element, declarations) in &rules {
                    self.write_rule(&mut out, element, declarations, 1);
                }
                out.push_str("}\n");
            }
        }

        Ok(out)
    }
}
