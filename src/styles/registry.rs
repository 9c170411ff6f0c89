use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    config::Config,
    error::Result,
    generator::{CssGenerator, Generator},
    styles::{StyleStore, GLOBAL},
};

/// Registry of independent style stores, keyed by instance id
///
/// Each distinct id maps to exactly one [`StyleStore`] for the lifetime of the
/// registry. Stores are created empty on first lookup and shared through
/// `Arc`, so every producer asking for the same id writes to the same store.
///
/// The registry is an ordinary value: create one at startup and pass it (or
/// an `Arc` of it) to the code that collects styles.
pub struct StyleRegistry {
    stores: RwLock<IndexMap<String, Arc<StyleStore>>>,
    generator: Arc<dyn Generator>,
}

impl StyleRegistry {
    /// Create a registry whose stores render with the default [`CssGenerator`]
    pub fn new() -> Self {
        Self::with_generator(Arc::new(CssGenerator::new()))
    }

    /// Create a registry whose stores all render through `generator`
    pub fn with_generator(generator: Arc<dyn Generator>) -> Self {
        Self {
            stores: RwLock::new(IndexMap::new()),
            generator,
        }
    }

    /// Create a registry using the generator settings from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::with_generator(Arc::new(CssGenerator::with_config(config.generator.clone())))
    }

    /// Get the store for `instance_id`, creating an empty one if needed
    pub fn get_or_create(&self, instance_id: &str) -> Arc<StyleStore> {
        if let Some(store) = self.get(instance_id) {
            return store;
        }

        let mut stores = self.stores.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have created it between the two locks
        stores
            .entry(instance_id.to_string())
            .or_insert_with(|| {
                debug!("Creating style store '{}'", instance_id);
                Arc::new(StyleStore::new(instance_id, Arc::clone(&self.generator)))
            })
            .clone()
    }

    /// The store for the default `"global"` instance
    pub fn global(&self) -> Arc<StyleStore> {
        self.get_or_create(GLOBAL)
    }

    /// Look up an existing store without creating one
    pub fn get(&self, instance_id: &str) -> Option<Arc<StyleStore>> {
        self.stores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(instance_id)
            .cloned()
    }

    /// Check if a store exists for `instance_id`
    pub fn contains(&self, instance_id: &str) -> bool {
        self.stores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(instance_id)
    }

    /// Instance ids in the order their stores were created
    pub fn instance_ids(&self) -> Vec<String> {
        self.stores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Get the number of stores
    pub fn len(&self) -> usize {
        self.stores.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every store.
    ///
    /// Stores already handed out stay usable but are no longer reachable
    /// through the registry; the next lookup creates a fresh one.
    pub fn clear(&self) {
        self.stores.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Render every store in creation order and concatenate the output
    pub fn render_all(&self) -> Result<String> {
        let stores: Vec<Arc<StyleStore>> = self
            .stores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        let mut css = String::new();
        for store in stores {
            css.push_str(&store.render()?);
        }
        Ok(css)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("instances", &self.instance_ids())
            .field("generator", &self.generator.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use crate::styles::{Declaration, Filter};

    #[test]
    fn test_same_id_returns_same_store() {
        let registry = StyleRegistry::new();
        let first = registry.get_or_create("x");
        let second = registry.get_or_create("x");

        assert!(Arc::ptr_eq(&first, &second));

        first.add(Declaration::rule("body", "margin", "0"));
        assert_eq!(second.len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_stores_are_isolated() {
        let registry = StyleRegistry::new();
        let a = registry.get_or_create("a");
        let b = registry.get_or_create("b");

        assert!(!Arc::ptr_eq(&a, &b));

        a.add(Declaration::rule("body", "margin", "0"));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
        assert!(b.query(&Filter::new().element("body")).is_empty());
    }

    #[test]
    fn test_global_is_default_instance() {
        let registry = StyleRegistry::new();
        let global = registry.global();

        assert_eq!(global.id(), "global");
        assert!(Arc::ptr_eq(&global, &registry.get_or_create(GLOBAL)));
    }

    #[test]
    fn test_get_does_not_create() {
        let registry = StyleRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(!registry.contains("missing"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_instance_ids_in_creation_order() {
        let registry = StyleRegistry::new();
        registry.get_or_create("head");
        registry.get_or_create("footer");
        registry.get_or_create("head");
        registry.get_or_create("body");

        assert_eq!(registry.instance_ids(), vec!["head", "footer", "body"]);
    }

    #[test]
    fn test_clear_resets_registry() {
        let registry = StyleRegistry::new();
        let old = registry.get_or_create("x");
        old.add(Declaration::rule("a", "color", "red"));

        registry.clear();
        assert!(registry.is_empty());

        let fresh = registry.get_or_create("x");
        assert!(!Arc::ptr_eq(&old, &fresh));
        assert!(fresh.is_empty());
        assert_eq!(old.len(), 1);
    }

    #[test]
    fn test_stores_use_registry_generator() {
        let config = Config {
            generator: GeneratorConfig::minified(),
            ..Config::default()
        };
        let registry = StyleRegistry::from_config(&config);
        registry.global().add(Declaration::rule("a", "color", "red"));

        assert_eq!(registry.global().render().unwrap(), "a{color:red;}");
    }

    #[test]
    fn test_render_all_in_creation_order() {
        let registry = StyleRegistry::with_generator(Arc::new(CssGenerator::with_config(
            GeneratorConfig::minified(),
        )));
        registry.get_or_create("footer").add(Declaration::rule("footer", "color", "gray"));
        registry.global().add(Declaration::rule("body", "margin", "0"));

        assert_eq!(
            registry.render_all().unwrap(),
            "footer{color:gray;}body{margin:0;}"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(StyleRegistry::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .global()
                        .add(Declaration::rule(format!(".item-{}", i), "order", i.to_string()));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.global().len(), 4);
    }
}
