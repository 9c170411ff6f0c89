use crate::{error::Result, styles::StyleSheet};

/// Core trait for turning an accumulated stylesheet into text
///
/// Stores hold no serialization logic of their own; `render` hands the full
/// nested structure to a generator and returns whatever it produces.
pub trait Generator: Send + Sync {
    /// Returns the unique name of this generator
    fn name(&self) -> &str;

    /// Serialize the stylesheet
    ///
    /// # Arguments
    ///
    /// * `sheet` - The full `media query -> selector -> property -> value` structure
    ///
    /// # Returns
    ///
    /// Stylesheet text, or an error if the structure cannot be serialized.
    /// Implementations must emit every level in the sheet's insertion order.
    fn generate(&self, sheet: &StyleSheet) -> Result<String>;
}
