//! Prize selection by rejection sampling
//!
//! Draws templates uniformly (with replacement) from the whole catalog and
//! keeps the first one that passes [`check_prize`]. No filtered index is
//! maintained; the draw budget bounds the search instead.

use strum::{Display, EnumCount, EnumIter};

use crate::catalog::{
    ObjectTemplate, TemplateParts, PROP_CANONICAL_BLUEPRINT, TAG_BASE_OBJECT,
    TAG_NO_MYSTERY_BOX, TAG_TERRAIN,
};
use crate::error::OpenError;
use crate::rng::GameRng;
use crate::MAX_PRIZE_DRAWS;

/// First acceptance clause a template failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[repr(u8)]
pub enum Rejection {
    #[strum(to_string = "no physical presence")]
    NoPhysics = 0,
    #[strum(to_string = "not rendered")]
    NoRender = 1,
    #[strum(to_string = "base object")]
    BaseObject = 2,
    #[strum(to_string = "terrain")]
    Terrain = 3,
    #[strum(to_string = "excluded from mystery boxes")]
    Excluded = 4,
    #[strum(to_string = "non-canonical variant")]
    NonCanonical = 5,
}

/// Check a template against every prize clause, in order.
pub fn check_prize(template: &ObjectTemplate) -> Result<(), Rejection> {
    if !template.has_part(TemplateParts::PHYSICS) {
        return Err(Rejection::NoPhysics);
    }
    if !template.has_part(TemplateParts::RENDER) {
        return Err(Rejection::NoRender);
    }
    if template.has_tag(TAG_BASE_OBJECT) {
        return Err(Rejection::BaseObject);
    }
    if template.has_tag(TAG_TERRAIN) {
        return Err(Rejection::Terrain);
    }
    if template.has_tag(TAG_NO_MYSTERY_BOX) {
        return Err(Rejection::Excluded);
    }
    // Only the canonical member of a flagged family may be won
    if let Some(canonical) = template.prop(PROP_CANONICAL_BLUEPRINT)
        && canonical != template.name
    {
        return Err(Rejection::NonCanonical);
    }
    Ok(())
}

pub fn is_valid_prize(template: &ObjectTemplate) -> bool {
    check_prize(template).is_ok()
}

/// An accepted template and the number of draws it took (including the
/// accepted one)
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub template: &'a ObjectTemplate,
    pub draws: u32,
}

/// Rejection sampler with a bounded draw budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeSelector {
    pub max_draws: u32,
}

impl Default for PrizeSelector {
    fn default() -> Self {
        Self {
            max_draws: MAX_PRIZE_DRAWS,
        }
    }
}

impl PrizeSelector {
    pub fn new(max_draws: u32) -> Self {
        Self { max_draws }
    }

    /// Draw until a template is accepted or the budget runs out.
    ///
    /// Returns `NoPrizeAvailable { draws }` with `draws == max_draws` on
    /// exhaustion, or `draws == 0` when the catalog is empty.
    pub fn select<'a>(
        &self,
        templates: &'a [ObjectTemplate],
        rng: &mut GameRng,
    ) -> Result<Selection<'a>, OpenError> {
        if templates.is_empty() {
            log::warn!("prize catalog is empty");
            return Err(OpenError::NoPrizeAvailable { draws: 0 });
        }

        let mut rejected = [0u32; Rejection::COUNT];
        for draw in 1..=self.max_draws {
            let Some(template) = rng.choose(templates) else {
                break;
            };
            match check_prize(template) {
                Ok(()) => {
                    log::debug!(
                        "accepted prize template '{}' after {} draws",
                        template.name,
                        draw
                    );
                    return Ok(Selection {
                        template,
                        draws: draw,
                    });
                }
                Err(reason) => rejected[reason as usize] += 1,
            }
        }

        log::warn!(
            "no prize template accepted after {} draws (rejections: {:?})",
            self.max_draws,
            rejected
        );
        Err(OpenError::NoPrizeAvailable {
            draws: self.max_draws,
        })
    }
}
