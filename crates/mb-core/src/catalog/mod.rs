//! Object template catalog
//!
//! Templates are loaded once and never mutated. The prize engine only sees
//! them through the [`Catalog`] trait so a host can plug in its own store.

mod store;
mod template;

pub use store::{CatalogError, TemplateCatalog};
pub use template::{
    ObjectTemplate, TemplateParts, PROP_CANONICAL_BLUEPRINT, TAG_BASE_OBJECT,
    TAG_NO_MYSTERY_BOX, TAG_TERRAIN,
};

use crate::object::GameObject;

/// Catalog service: enumerate templates and instantiate them by name
pub trait Catalog {
    fn templates(&self) -> &[ObjectTemplate];

    /// Build a fresh, unplaced object from the named template
    fn create_object(&self, name: &str) -> Option<GameObject>;
}
