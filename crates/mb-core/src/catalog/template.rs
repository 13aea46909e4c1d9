//! Object templates (blueprints)
//!
//! A template is an immutable catalog entry describing a spawnable kind of
//! object: which parts it carries, which tags mark it, and a small property
//! bag.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use bitflags::bitflags;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Tag marking an abstract template other templates inherit from
pub const TAG_BASE_OBJECT: &str = "BaseObject";
/// Tag marking terrain (walls, floors, foliage)
pub const TAG_TERRAIN: &str = "Terrain";
/// Tag excluding a template from the mystery box prize pool
pub const TAG_NO_MYSTERY_BOX: &str = "NoMysteryBox";
/// Property naming the one canonical blueprint of a specially flagged family
pub const PROP_CANONICAL_BLUEPRINT: &str = "CanonicalBlueprint";

bitflags! {
    /// Parts declared by a template
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TemplateParts: u8 {
        /// Physical presence in a cell
        const PHYSICS = 0x01;
        /// Visual representation
        const RENDER = 0x02;
        /// Autonomous behaviour; instances take turns
        const BRAIN = 0x04;
    }
}

// Serialized as a list of flag names, e.g. ["PHYSICS", "RENDER"]
impl Serialize for TemplateParts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for (name, _) in self.iter_names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TemplateParts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut parts = TemplateParts::empty();
        for name in &names {
            let flag = TemplateParts::from_name(&name.to_uppercase()).ok_or_else(|| {
                serde::de::Error::custom(format!("unknown template part '{}'", name))
            })?;
            parts |= flag;
        }
        Ok(parts)
    }
}

/// Catalog entry for a spawnable object kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Unique name, used to instantiate objects
    pub name: String,

    /// Name shown to the player; defaults to `name`
    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub parts: TemplateParts,

    /// Tags; most are presence-only and carry an empty value
    #[serde(default)]
    pub tags: HashMap<String, String>,

    #[serde(default)]
    pub props: HashMap<String, String>,
}

impl ObjectTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: String::new(),
            parts: TemplateParts::empty(),
            tags: HashMap::new(),
            props: HashMap::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_parts(mut self, parts: TemplateParts) -> Self {
        self.parts |= parts;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into(), String::new());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn has_part(&self, part: TemplateParts) -> bool {
        self.parts.contains(part)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Display name, falling back to the template name
    pub fn shown_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}
