//! mb-data: Static prize catalog for the mystery box
//!
//! Contains the built-in blueprint table. A host with its own object
//! catalog can ignore this crate and implement `mb_core::catalog::Catalog`
//! directly.

pub mod blueprints;

pub use blueprints::{default_catalog, get_blueprint, num_blueprints, BlueprintDef, BLUEPRINTS};
