use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::{
    error::Result,
    generator::Generator,
    styles::{Declaration, Filter, StyleSheet},
};

/// One independent collection of style declarations.
///
/// A store is shared between every producer that asked the registry for the
/// same instance id. `add` takes the write lock; `query`, `snapshot` and
/// `render` take the read lock and so always see a consistent sheet.
pub struct StyleStore {
    id: String,
    sheet: RwLock<StyleSheet>,
    generator: Arc<dyn Generator>,
}

impl StyleStore {
    /// Create an empty store that renders through `generator`
    pub fn new(id: impl Into<String>, generator: Arc<dyn Generator>) -> Self {
        Self {
            id: id.into(),
            sheet: RwLock::new(StyleSheet::new()),
            generator,
        }
    }

    /// The instance id this store was created for
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add a declaration, overwriting any value already stored at its path.
    ///
    /// Overwriting keeps the entry's original position in the sheet.
    pub fn add(&self, declaration: Declaration) {
        debug!(
            "[{}] add {} {} {}",
            self.id, declaration.query, declaration.element, declaration.property
        );
        self.write().insert(declaration);
    }

    /// Add several declarations in order under a single lock
    pub fn add_all<I>(&self, declarations: I)
    where
        I: IntoIterator<Item = Declaration>,
    {
        let mut sheet = self.write();
        for declaration in declarations {
            sheet.insert(declaration);
        }
        debug!("[{}] now holds {} declarations", self.id, sheet.declaration_count());
    }

    /// Return a filtered copy of the sheet.
    ///
    /// The store itself is never modified; the result can be changed freely.
    pub fn query(&self, filter: &Filter) -> StyleSheet {
        let result = self.read().filtered(filter);
        debug!(
            "[{}] query {:?} matched {} declarations",
            self.id,
            filter,
            result.declaration_count()
        );
        result
    }

    /// Copy of the full sheet
    pub fn snapshot(&self) -> StyleSheet {
        self.read().clone()
    }

    /// Render the sheet through this store's generator
    pub fn render(&self) -> Result<String> {
        self.render_with(self.generator.as_ref())
    }

    /// Render the sheet through an explicitly supplied generator
    pub fn render_with(&self, generator: &dyn Generator) -> Result<String> {
        let sheet = self.read();
        generator.generate(&sheet).map_err(|e| {
            warn!("[{}] generator '{}' failed: {}", self.id, generator.name(), e);
            e
        })
    }

    /// Number of property entries across all media queries
    pub fn len(&self) -> usize {
        self.read().declaration_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every declaration
    pub fn clear(&self) {
        self.write().clear();
    }

    // Every mutation is a single map insert, so a poisoned lock still holds a
    // well-formed sheet.
    fn read(&self) -> RwLockReadGuard<'_, StyleSheet> {
        self.sheet.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StyleSheet> {
        self.sheet.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for StyleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleStore")
            .field("id", &self.id)
            .field("generator", &self.generator.name())
            .field("sheet", &*self.read())
            .finish()
    }
}
