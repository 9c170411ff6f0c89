use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::styles::{CssValue, Declaration, Filter};

/// Property name to value, in insertion order.
pub type Properties = IndexMap<String, CssValue>;

/// Selector to properties, in insertion order.
pub type Selectors = IndexMap<String, Properties>;

/// The nested `media query -> selector -> property -> value` structure.
///
/// Keys are unique at every level and keep the position of their first
/// insertion; writing an existing path replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    queries: IndexMap<String, Selectors>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value at the declaration's path, creating intermediate levels.
    ///
    /// Returns the value that was replaced, if any.
    pub fn insert(&mut self, declaration: Declaration) -> Option<CssValue> {
        let Declaration {
            query,
            element,
            property,
            value,
        } = declaration;

        self.queries
            .entry(query)
            .or_default()
            .entry(element)
            .or_default()
            .insert(property, value)
    }

    /// Returns a pruned copy holding only what `filter` accepts.
    ///
    /// Pruning happens per level: a media query or selector whose own key
    /// matches is kept even when all of its children were filtered out.
    pub fn filtered(&self, filter: &Filter) -> StyleSheet {
        let queries = self
            .queries
            .iter()
            .filter(|(query, _)| filter.accepts_query(query))
            .map(|(query, selectors)| {
                let selectors = selectors
                    .iter()
                    .filter(|(element, _)| filter.accepts_element(element))
                    .map(|(element, properties)| {
                        let properties = properties
                            .iter()
                            .filter(|(property, value)| {
                                filter.accepts_property(property) && filter.accepts_value(value)
                            })
                            .map(|(property, value)| (property.clone(), value.clone()))
                            .collect::<Properties>();
                        (element.clone(), properties)
                    })
                    .collect::<Selectors>();
                (query.clone(), selectors)
            })
            .collect();

        StyleSheet { queries }
    }

    /// Look up the value stored at a full path.
    pub fn get(&self, query: &str, element: &str, property: &str) -> Option<&CssValue> {
        self.queries.get(query)?.get(element)?.get(property)
    }

    /// Selectors registered under one media query.
    pub fn selectors(&self, query: &str) -> Option<&Selectors> {
        self.queries.get(query)
    }

    pub fn media_queries(&self) -> impl Iterator<Item = &str> {
        self.queries.keys().map(String::as_str)
    }

    /// Number of media query branches.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Total number of property entries across every branch.
    pub fn declaration_count(&self) -> usize {
        self.queries
            .values()
            .flat_map(|selectors| selectors.values())
            .map(|properties| properties.len())
            .sum()
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }
}

impl<'a> IntoIterator for &'a StyleSheet {
    type Item = (&'a String, &'a Selectors);
    type IntoIter = indexmap::map::Iter<'a, String, Selectors>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

impl FromIterator<Declaration> for StyleSheet {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut sheet = StyleSheet::new();
        for declaration in iter {
            sheet.insert(declaration);
        }
        sheet
    }
}
