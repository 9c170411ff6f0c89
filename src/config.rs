use std::path::Path;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{CompilerError, ConfigError, Result},
    generator::GeneratorConfig,
    styles::{CssValue, Declaration, StyleRegistry, StyleStore, GLOBAL},
};

/// Main configuration for the CSS compiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Instance rendered when no instance is named explicitly
    pub default_instance: String,

    /// Output settings for the built-in generator
    pub generator: GeneratorConfig,

    /// Declarations to seed into the registry, in file order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub declarations: Vec<ManifestEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_instance: GLOBAL.to_string(),
            generator: GeneratorConfig::default(),
            declarations: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_instance.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "default_instance".to_string(),
                value: String::new(),
            }.into());
        }

        let indent = &self.generator.indent;
        if indent.chars().any(|c| !c.is_whitespace())
            || (indent.is_empty() && !self.generator.minify)
        {
            return Err(ConfigError::InvalidValue {
                key: "generator.indent".to_string(),
                value: format!("{:?}", indent),
            }.into());
        }

        Ok(())
    }

    /// Add every manifest declaration to its instance's store, in file order
    pub fn apply(&self, registry: &StyleRegistry) {
        for entry in &self.declarations {
            registry
                .get_or_create(&entry.instance)
                .add(entry.declaration());
        }
        debug!("Applied {} manifest declarations", self.declarations.len());
    }

    /// Resolve the store to render
    ///
    /// With no explicit instance the default instance is used, and created
    /// empty if nothing was collected for it. An explicitly requested
    /// instance must already exist.
    pub fn target_store(
        &self,
        registry: &StyleRegistry,
        requested: Option<&str>,
    ) -> Result<Arc<StyleStore>> {
        match requested {
            Some(id) => registry.get(id).ok_or_else(|| CompilerError::InstanceNotFound {
                id: id.to_string(),
            }),
            None => Ok(registry.get_or_create(&self.default_instance)),
        }
    }
}

/// One `[[declarations]]` entry of a configuration file
///
/// Same fields and defaults as [`Declaration`], plus the instance to add to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestEntry {
    /// Instance id of the target store
    pub instance: String,
    pub query: String,
    pub element: String,
    pub property: String,
    pub value: CssValue,
}

impl Default for ManifestEntry {
    fn default() -> Self {
        let Declaration {
            query,
            element,
            property,
            value,
        } = Declaration::default();

        Self {
            instance: GLOBAL.to_string(),
            query,
            element,
            property,
            value,
        }
    }
}

impl ManifestEntry {
    pub fn declaration(&self) -> Declaration {
        Declaration {
            query: self.query.clone(),
            element: self.element.clone(),
            property: self.property.clone(),
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Filter;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
default_instance = "head"

[generator]
minify = true

[[declarations]]
element = "body"
property = "margin"
value = "0"

[[declarations]]
instance = "head"
query = "(max-width:600px)"
element = ".a"
property = "display"
value = ["-webkit-box", "flex"]
"#;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.generator.indent = "\t".to_string();
        original_config.declarations.push(ManifestEntry {
            element: "body".to_string(),
            property: "margin".to_string(),
            value: CssValue::from("0"),
            ..ManifestEntry::default()
        });

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_manifest_defaults() {
        let config: Config = toml::from_str(MANIFEST).unwrap();

        assert_eq!(config.default_instance, "head");
        assert!(config.generator.minify);
        assert_eq!(config.generator.indent, "    ");
        assert_eq!(config.declarations.len(), 2);
        assert_eq!(config.declarations[0].instance, "global");
        assert_eq!(config.declarations[0].query, "global");
        assert!(config.declarations[1].value.matches("flex"));
    }

    #[test]
    fn test_apply_seeds_registry() {
        let config: Config = toml::from_str(MANIFEST).unwrap();
        let registry = StyleRegistry::from_config(&config);
        config.apply(&registry);

        assert_eq!(registry.instance_ids(), vec!["global", "head"]);
        assert_eq!(registry.global().render().unwrap(), "body{margin:0;}");

        let head = registry.get_or_create("head");
        let flex = head.query(&Filter::new().value("flex"));
        assert_eq!(flex.declaration_count(), 1);
    }

    #[test]
    fn test_default_target_without_declarations() {
        let config = Config::default();
        let registry = StyleRegistry::from_config(&config);
        config.apply(&registry);

        let store = config.target_store(&registry, None).unwrap();
        assert_eq!(store.id(), "global");
        assert_eq!(store.render().unwrap(), "");
    }

    #[test]
    fn test_default_target_when_manifest_seeds_other_instance() {
        let config: Config = toml::from_str(
            r#"
[[declarations]]
instance = "head"
element = "body"
property = "margin"
value = "0"
"#,
        )
        .unwrap();
        let registry = StyleRegistry::from_config(&config);
        config.apply(&registry);

        let store = config.target_store(&registry, None).unwrap();
        assert_eq!(store.id(), "global");
        assert!(store.is_empty());

        let head = config.target_store(&registry, Some("head")).unwrap();
        assert_eq!(head.len(), 1);
    }

    #[test]
    fn test_explicit_unknown_target() {
        let config = Config::default();
        let registry = StyleRegistry::from_config(&config);

        let result = config.target_store(&registry, Some("footer"));
        assert!(matches!(
            result,
            Err(CompilerError::InstanceNotFound { ref id }) if id == "footer"
        ));
        assert!(!registry.contains("footer"));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/definitely/not/here.toml");
        assert!(matches!(
            result,
            Err(CompilerError::Config(ConfigError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_invalid_indent() {
        let mut config = Config::default();
        config.generator.indent = "--".to_string();
        assert!(config.validate().is_err());

        config.generator.indent = String::new();
        assert!(config.validate().is_err());

        config.generator.minify = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_default_instance() {
        let mut config = Config::default();
        config.default_instance.clear();
        assert!(config.validate().is_err());
    }
}
