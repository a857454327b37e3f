//! Template registry - the catalog of instantiable block kinds
//!
//! This module provides a thread-safe registry over block templates. The
//! builtin catalog covers the closed kind set; host applications may also
//! register replacement entries (e.g. different defaults) after unregistering
//! the builtin one. It supports:
//! - Template registration and unregistration
//! - Lookup by kind, category, or search query
//! - Template validation before registration

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::schema::{BlockKind, ALL_KINDS};
use super::template::{builtin_template, BlockTemplate, TemplateCategory};

/// Thread-safe catalog of block templates
///
/// Uses `Arc<RwLock<HashMap>>` for concurrent reads with exclusive writes,
/// via parking_lot's RwLock. Clones share the same underlying catalog.
#[derive(Clone)]
pub struct TemplateRegistry {
    templates: Arc<RwLock<HashMap<BlockKind, BlockTemplate>>>,
}

impl TemplateRegistry {
    /// Create an empty registry with no templates
    pub fn empty() -> Self {
        Self {
            templates: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry seeded with the builtin catalog
    pub fn builtin() -> Self {
        let registry = Self::empty();
        {
            let mut templates = registry.templates.write();
            for kind in ALL_KINDS {
                templates.insert(kind, builtin_template(kind));
            }
        }
        registry
    }

    /// Register a template
    ///
    /// # Returns
    /// * `Ok(())` if registration succeeds
    /// * `Err(RegistryError)` if the kind already has an entry or the
    ///   template fails validation
    pub fn register(&self, template: BlockTemplate) -> Result<(), RegistryError> {
        Self::validate_template(&template)?;

        let mut templates = self.templates.write();
        if templates.contains_key(&template.kind) {
            return Err(RegistryError::DuplicateTemplate(
                template.kind.as_str().to_string(),
            ));
        }
        templates.insert(template.kind, template);
        Ok(())
    }

    /// Unregister the template for a kind
    pub fn unregister(&self, kind: BlockKind) -> Result<(), RegistryError> {
        let mut templates = self.templates.write();
        templates
            .remove(&kind)
            .ok_or_else(|| RegistryError::TemplateNotFound(kind.as_str().to_string()))?;
        Ok(())
    }

    /// Get the template for a kind
    pub fn get(&self, kind: BlockKind) -> Result<BlockTemplate, RegistryError> {
        let templates = self.templates.read();
        templates
            .get(&kind)
            .cloned()
            .ok_or_else(|| RegistryError::TemplateNotFound(kind.as_str().to_string()))
    }

    /// All registered templates in stable catalog order
    ///
    /// Kinds outside `ALL_KINDS` cannot exist in the map, so iterating the
    /// catalog order covers every entry.
    pub fn all(&self) -> Vec<BlockTemplate> {
        let templates = self.templates.read();
        ALL_KINDS
            .iter()
            .filter_map(|kind| templates.get(kind).cloned())
            .collect()
    }

    /// Templates in the given category, in catalog order
    pub fn by_category(&self, category: TemplateCategory) -> Vec<BlockTemplate> {
        self.all()
            .into_iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Search templates by query string
    ///
    /// Matches against label and kind tag, case-insensitive.
    pub fn search(&self, query: &str) -> Vec<BlockTemplate> {
        let query = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|t| {
                t.label.to_lowercase().contains(&query)
                    || t.kind.as_str().contains(&query)
            })
            .collect()
    }

    /// The number of registered templates
    pub fn count(&self) -> usize {
        let templates = self.templates.read();
        templates.len()
    }

    /// Whether the kind has a registered template
    pub fn contains(&self, kind: BlockKind) -> bool {
        let templates = self.templates.read();
        templates.contains_key(&kind)
    }

    /// Validate a template before registration
    fn validate_template(template: &BlockTemplate) -> Result<(), RegistryError> {
        if template.label.is_empty() {
            return Err(RegistryError::ValidationError(
                "Template label cannot be empty".into(),
            ));
        }

        // Defaults must satisfy the kind's own schema; a template whose
        // defaults produce invalid blocks would break every add operation.
        let schema = template.kind.schema();
        for attr in schema {
            match template.defaults.get(attr.name) {
                Some(value) if !attr.kind.accepts(value) => {
                    return Err(RegistryError::ValidationError(format!(
                        "Default for '{}' has the wrong value kind",
                        attr.name
                    )));
                }
                None if attr.required => {
                    return Err(RegistryError::ValidationError(format!(
                        "Defaults are missing required attribute '{}'",
                        attr.name
                    )));
                }
                _ => {}
            }
        }
        for key in template.defaults.keys() {
            if !schema.iter().any(|attr| attr.name == key) {
                return Err(RegistryError::ValidationError(format!(
                    "Default attribute '{}' is not in the schema",
                    key
                )));
            }
        }
        Ok(())
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Registry error types
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No template registered for the kind
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Attempted to register a second template for a kind
    #[error("Duplicate template for kind: {0}")]
    DuplicateTemplate(String),

    /// Template validation failed
    #[error("Validation error: {0}")]
    ValidationError(String),
}
