//! # Style Collection
//!
//! This module holds the accumulation side of the compiler: a registry of
//! independent stores, each collecting declarations as
//! `media query -> selector -> property -> value`.
//!
//! ## Usage
//!
//! ```rust
//! use css_compiler::styles::{Declaration, Filter, StyleRegistry};
//!
//! let registry = StyleRegistry::new();
//! let store = registry.global();
//!
//! store.add(Declaration::rule("body", "margin", "0"));
//! store.add(
//!     Declaration::new()
//!         .query("(max-width:600px)")
//!         .element("body")
//!         .property("margin")
//!         .value("4px"),
//! );
//!
//! let narrow = store.query(&Filter::new().query("(max-width:600px)"));
//! assert_eq!(narrow.declaration_count(), 1);
//!
//! let css = store.render().unwrap();
//! assert!(css.contains("@media (max-width:600px)"));
//! ```

pub mod declaration;
pub mod registry;
pub mod sheet;
pub mod store;
pub mod value;

// Re-exports for convenience
pub use declaration::{Declaration, Filter};
pub use registry::StyleRegistry;
pub use sheet::{Properties, Selectors, StyleSheet};
pub use store::StyleStore;
pub use value::CssValue;

/// Default instance id, and the media query key for rules outside any media query.
pub const GLOBAL: &str = "global";
