//! Blueprint definitions
//!
//! Besides ordinary prizes the table carries base templates, terrain,
//! excluded items and non-canonical variants so the selector always has
//! something to reject.

use mb_core::catalog::{
    CatalogError, ObjectTemplate, TemplateCatalog, TemplateParts, PROP_CANONICAL_BLUEPRINT,
    TAG_BASE_OBJECT, TAG_NO_MYSTERY_BOX, TAG_TERRAIN,
};

const ITEM: TemplateParts = TemplateParts::PHYSICS.union(TemplateParts::RENDER);
const CREATURE: TemplateParts = ITEM.union(TemplateParts::BRAIN);

/// Static blueprint definition
#[derive(Debug, Clone, Copy)]
pub struct BlueprintDef {
    pub name: &'static str,
    pub display_name: &'static str,
    pub parts: TemplateParts,
    pub tags: &'static [&'static str],
    pub props: &'static [(&'static str, &'static str)],
}

impl BlueprintDef {
    const fn new(name: &'static str, display_name: &'static str, parts: TemplateParts) -> Self {
        Self {
            name,
            display_name,
            parts,
            tags: &[],
            props: &[],
        }
    }

    const fn tags(mut self, tags: &'static [&'static str]) -> Self {
        self.tags = tags;
        self
    }

    const fn props(mut self, props: &'static [(&'static str, &'static str)]) -> Self {
        self.props = props;
        self
    }

    /// Build the catalog entry
    pub fn to_template(&self) -> ObjectTemplate {
        let mut template = ObjectTemplate::new(self.name)
            .with_display_name(self.display_name)
            .with_parts(self.parts);
        for tag in self.tags {
            template = template.with_tag(*tag);
        }
        for (key, value) in self.props {
            template = template.with_prop(*key, *value);
        }
        template
    }
}

pub const BLUEPRINTS: &[BlueprintDef] = &[
    // Abstract parents
    BlueprintDef::new("Object", "object", ITEM).tags(&[TAG_BASE_OBJECT]),
    BlueprintDef::new("Item", "item", ITEM).tags(&[TAG_BASE_OBJECT]),
    BlueprintDef::new("Creature", "creature", CREATURE).tags(&[TAG_BASE_OBJECT]),
    // Terrain
    BlueprintDef::new("Shale", "&yshale", ITEM).tags(&[TAG_TERRAIN]),
    BlueprintDef::new("Brinestalk", "&gbrinestalk", ITEM).tags(&[TAG_TERRAIN]),
    BlueprintDef::new("Sandstone", "&wsandstone", ITEM).tags(&[TAG_TERRAIN]),
    // Not physical or not drawn
    BlueprintDef::new("Widget", "widget", TemplateParts::RENDER),
    BlueprintDef::new("ZoneManager", "zone manager", TemplateParts::empty()),
    BlueprintDef::new("Phantasm", "phantasm", TemplateParts::PHYSICS),
    // Excluded from the prize pool
    BlueprintDef::new("MysteryBox", "&Mmystery box", ITEM).tags(&[TAG_NO_MYSTERY_BOX]),
    BlueprintDef::new("WorldCore", "&Rworld core", ITEM).tags(&[TAG_NO_MYSTERY_BOX]),
    // Flagged families: only the canonical member is a prize
    BlueprintDef::new("StarlightCrown", "&Wstarlight crown", ITEM)
        .props(&[(PROP_CANONICAL_BLUEPRINT, "StarlightCrown")]),
    BlueprintDef::new("StarlightCrownTarnished", "&ytarnished starlight crown", ITEM)
        .props(&[(PROP_CANONICAL_BLUEPRINT, "StarlightCrown")]),
    BlueprintDef::new("StarlightCrownReplica", "&creplica starlight crown", ITEM)
        .props(&[(PROP_CANONICAL_BLUEPRINT, "StarlightCrown")]),
    // Ordinary prizes
    BlueprintDef::new("Dagger", "&cbronze dagger", ITEM),
    BlueprintDef::new("Longsword", "&clongsword", ITEM),
    BlueprintDef::new("Torch", "&Ytorch", ITEM),
    BlueprintDef::new("Waterskin", "&wwaterskin", ITEM),
    BlueprintDef::new("Apple", "&rapple", ITEM),
    BlueprintDef::new("UnicornHorn", "&Wunicorn horn", ITEM),
    BlueprintDef::new("Umbrella", "&Bumbrella", ITEM),
    BlueprintDef::new("Compass", "&ybrass compass", ITEM),
    BlueprintDef::new("Spellbook", "&Mspellbook", ITEM),
    BlueprintDef::new("Lantern", "&Ylantern", ITEM),
    BlueprintDef::new("Crossbow", "&wcrossbow", ITEM),
    BlueprintDef::new("HealingTonic", "&Rhealing tonic", ITEM),
    // Creatures
    BlueprintDef::new("Snapjaw", "&wsnapjaw", CREATURE),
    BlueprintDef::new("Glowfish", "&Cglowfish", CREATURE),
    BlueprintDef::new("Chicken", "&Wchicken", CREATURE),
    BlueprintDef::new("Salthopper", "&ysalthopper", CREATURE),
];

/// Get blueprint definition by name
pub fn get_blueprint(name: &str) -> Option<&'static BlueprintDef> {
    BLUEPRINTS.iter().find(|b| b.name == name)
}

/// Get total number of blueprints
pub const fn num_blueprints() -> usize {
    BLUEPRINTS.len()
}

/// Build a catalog holding every built-in blueprint
pub fn default_catalog() -> Result<TemplateCatalog, CatalogError> {
    TemplateCatalog::from_templates(BLUEPRINTS.iter().map(BlueprintDef::to_template))
}
