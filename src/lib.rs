//! # CSS-Compiler
//!
//! Collect CSS declarations from many independent producers and compile them into
//! one stylesheet.
//!
//! Producers never coordinate: each one asks a [`StyleRegistry`] for the store of
//! an instance (`"global"` by default) and adds declarations to it. Later, the
//! store can be inspected through a filtered query or rendered to CSS text.
//!
//! ## Quick Start
//!
//! ```rust
//! use css_compiler::styles::{Declaration, Filter, StyleRegistry};
//!
//! # fn main() -> css_compiler::Result<()> {
//! let registry = StyleRegistry::new();
//! let store = registry.get_or_create("global");
//!
//! store.add(Declaration::rule("body", "margin", "0"));
//! store.add(Declaration::rule(".row", "display", ["-webkit-box", "flex"]));
//!
//! let flex = store.query(&Filter::new().value("flex"));
//! assert_eq!(flex.declaration_count(), 1);
//!
//! let css = store.render()?;
//! assert!(css.contains("display: -webkit-box;\n    display: flex;"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`styles`] - Registry, stores, declarations and the nested stylesheet
//! - [`generator`] - Serialization of a stylesheet to text
//! - [`config`] - Configuration and declaration manifests
//! - [`error`] - Error types
//!
//! ## Custom Generators
//!
//! Stores delegate rendering to a [`Generator`](generator::Generator). Supply your
//! own to change the output format:
//!
//! ```rust
//! use std::sync::Arc;
//! use css_compiler::generator::Generator;
//! use css_compiler::styles::{StyleRegistry, StyleSheet};
//!
//! struct CountingGenerator;
//!
//! impl Generator for CountingGenerator {
//!     fn name(&self) -> &str {
//!         "count"
//!     }
//!
//!     fn generate(&self, sheet: &StyleSheet) -> css_compiler::Result<String> {
//!         Ok(format!("/* {} declarations */", sheet.declaration_count()))
//!     }
//! }
//!
//! let registry = StyleRegistry::with_generator(Arc::new(CountingGenerator));
//! assert_eq!(registry.global().render().unwrap(), "/* 0 declarations */");
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod styles;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{CompilerError, Result},
    generator::{CssGenerator, Generator},
    styles::{CssValue, Declaration, Filter, StyleRegistry, StyleSheet, StyleStore},
};
