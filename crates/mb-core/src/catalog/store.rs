//! In-memory template catalog

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::HashMap;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::path::Path;
use thiserror::Error;

use super::{Catalog, ObjectTemplate, TemplateParts};
use crate::object::GameObject;

/// Errors raised while building or loading a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate template '{0}'")]
    DuplicateTemplate(String),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// On-disk shape of a catalog file
#[cfg(feature = "std")]
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    templates: Vec<ObjectTemplate>,
}

/// Ordered list of templates with a name index
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<ObjectTemplate>,
    index: HashMap<String, usize>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list, rejecting duplicate names
    pub fn from_templates(
        templates: impl IntoIterator<Item = ObjectTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for template in templates {
            catalog.insert(template)?;
        }
        Ok(catalog)
    }

    /// Add a template. Names are unique within a catalog.
    pub fn insert(&mut self, template: ObjectTemplate) -> Result<(), CatalogError> {
        if self.index.contains_key(&template.name) {
            return Err(CatalogError::DuplicateTemplate(template.name));
        }
        self.index.insert(template.name.clone(), self.templates.len());
        self.templates.push(template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ObjectTemplate> {
        self.index.get(name).map(|&i| &self.templates[i])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectTemplate> {
        self.templates.iter()
    }

    /// Parse a catalog from JSON: `{"templates": [ ... ]}`
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_templates(file.templates)
    }

    #[cfg(feature = "std")]
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            templates: self.templates.clone(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    #[cfg(feature = "std")]
    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let catalog = Self::from_json(&contents)?;
        log::debug!(
            "loaded {} templates from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl Catalog for TemplateCatalog {
    fn templates(&self) -> &[ObjectTemplate] {
        &self.templates
    }

    fn create_object(&self, name: &str) -> Option<GameObject> {
        let template = self.get(name)?;
        Some(
            GameObject::new(&template.name, template.shown_name())
                .with_brain(template.has_part(TemplateParts::BRAIN)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TAG_TERRAIN;

    fn sample() -> TemplateCatalog {
        TemplateCatalog::from_templates([
            ObjectTemplate::new("Dagger")
                .with_display_name("&cdagger")
                .with_parts(TemplateParts::PHYSICS | TemplateParts::RENDER),
            ObjectTemplate::new("Snapjaw")
                .with_parts(TemplateParts::PHYSICS | TemplateParts::RENDER | TemplateParts::BRAIN),
            ObjectTemplate::new("Shale").with_tag(TAG_TERRAIN),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("Snapjaw").unwrap().name, "Snapjaw");
        assert!(catalog.get("Nothing").is_none());
        let names: Vec<_> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Dagger", "Snapjaw", "Shale"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = sample();
        let err = catalog.insert(ObjectTemplate::new("Dagger")).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTemplate("Dagger".to_string()));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_create_object() {
        let catalog = sample();
        let dagger = catalog.create_object("Dagger").unwrap();
        assert_eq!(dagger.blueprint, "Dagger");
        assert_eq!(dagger.display_name, "&cdagger");
        assert!(!dagger.brain);

        let snapjaw = catalog.create_object("Snapjaw").unwrap();
        assert_eq!(snapjaw.display_name, "Snapjaw");
        assert!(snapjaw.brain);

        assert!(catalog.create_object("Nothing").is_none());
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let catalog = sample();
        let json = catalog.to_json().unwrap();
        let parsed = TemplateCatalog::from_json(&json).unwrap();
        assert_eq!(parsed.templates(), catalog.templates());
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            TemplateCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
        let dup = r#"{"templates":[{"name":"A"},{"name":"A"}]}"#;
        assert_eq!(
            TemplateCatalog::from_json(dup).unwrap_err(),
            CatalogError::DuplicateTemplate("A".to_string())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = TemplateCatalog::load_from_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
