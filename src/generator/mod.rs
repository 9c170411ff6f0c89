//! # Stylesheet Generators
//!
//! Generators turn the nested structure held by a store into stylesheet text.
//! The [`Generator`] trait is the only contract stores depend on; [`CssGenerator`]
//! is the built-in implementation.
//!
//! ## Usage
//!
//! ```rust
//! use css_compiler::generator::{CssGenerator, GeneratorConfig, Generator};
//! use css_compiler::styles::{Declaration, StyleSheet};
//!
//! let sheet: StyleSheet = [Declaration::rule("a", "color", "red")].into_iter().collect();
//! let generator = CssGenerator::with_config(GeneratorConfig::minified());
//! assert_eq!(generator.generate(&sheet).unwrap(), "a{color:red;}");
//! ```

pub mod css;
pub mod traits;

// Re-exports for convenience
pub use css::{CssGenerator, GeneratorConfig};
pub use traits::Generator;
