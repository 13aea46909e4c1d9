//! Opening a mystery box
//!
//! The open command runs start to finish inside one player action:
//! resolve the anchor cell, draw a prize, then destroy the box, place the
//! prize and throw confetti. The box is destroyed only after both the anchor
//! and the prize are known; every failure leaves it untouched.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::catalog::Catalog;
use crate::error::OpenError;
use crate::host::{Presentation, Scheduler, World};
use crate::object::{an, strip_markup, GameObject, ObjectId, Position};
use crate::options::OpenerOptions;
use crate::rng::GameRng;
use crate::{DESTROY_REASON, MSG_NOWHERE_TO_PUT, OPEN_COMMAND, OPEN_HOTKEY, OPEN_PRIORITY};

use super::feedback::CONFETTI_PALETTE;
use super::placement::{place_at, resolve_anchor, AnchorSource};
use super::selector::PrizeSelector;

/// Entry for the generic inventory action list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryAction {
    pub command: &'static str,
    pub hotkey: char,
    pub label: &'static str,
    pub priority: i32,
}

/// The "open" action offered for a mystery box, or `None` while the player
/// is on the world map.
pub fn open_action(world: &dyn World) -> Option<InventoryAction> {
    if world.on_world_map() {
        return None;
    }
    Some(InventoryAction {
        command: OPEN_COMMAND,
        hotkey: OPEN_HOTKEY,
        label: "open",
        priority: OPEN_PRIORITY,
    })
}

/// Everything an open touches
pub struct OpenContext<'a> {
    pub catalog: &'a dyn Catalog,
    pub world: &'a mut dyn World,
    pub scheduler: &'a mut dyn Scheduler,
    pub ui: &'a mut dyn Presentation,
    /// Gameplay stream: prize draw and landing cell
    pub rng: &'a mut GameRng,
    /// Cosmetic stream: confetti only
    pub cosmetic: &'a mut GameRng,
}

/// A successfully awarded prize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeAward {
    pub prize: ObjectId,
    /// Template the prize was built from
    pub blueprint: String,
    /// Plain display name, without markup
    pub prize_name: String,
    pub cell: Position,
    pub source: AnchorSource,
    /// Draws the selector needed
    pub draws: u32,
}

/// "You have won A DAGGER!"
pub fn reveal_message(prize: &GameObject) -> String {
    format!("You have won {}!", an(&prize.plain_name()).to_uppercase())
}

/// "You cautiously pry open the mystery box. ..."
pub fn pry_message(box_name: &str) -> String {
    format!(
        "You cautiously pry open the {}. It vanishes in an explosion of confetti!",
        strip_markup(box_name)
    )
}

/// Mystery box behaviour
#[derive(Debug, Clone, Default)]
pub struct MysteryOpener {
    pub options: OpenerOptions,
}

impl MysteryOpener {
    pub fn new(options: OpenerOptions) -> Self {
        Self { options }
    }

    fn selector(&self) -> PrizeSelector {
        self.options.selector()
    }

    /// Handle an inventory command. Returns `None` for commands that are
    /// not ours.
    pub fn handle_command(
        &self,
        ctx: &mut OpenContext<'_>,
        command: &str,
        container: ObjectId,
    ) -> Option<Result<PrizeAward, OpenError>> {
        if command != OPEN_COMMAND {
            return None;
        }
        ctx.ui.request_interface_exit();
        Some(self.open(ctx, container))
    }

    /// Open `container` and award a prize.
    pub fn open(
        &self,
        ctx: &mut OpenContext<'_>,
        container: ObjectId,
    ) -> Result<PrizeAward, OpenError> {
        let anchor = match resolve_anchor(&*ctx.world, container) {
            Ok(anchor) => anchor,
            Err(e) => {
                ctx.ui.show_popup(MSG_NOWHERE_TO_PUT);
                return Err(e);
            }
        };

        let selection = match self.selector().select(ctx.catalog.templates(), ctx.rng) {
            Ok(selection) => selection,
            Err(e) => {
                if let Some(notice) = &self.options.exhausted_notice {
                    ctx.ui.show_popup(notice);
                }
                return Err(e);
            }
        };
        let draws = selection.draws;

        let prize = ctx
            .catalog
            .create_object(&selection.template.name)
            .ok_or_else(|| OpenError::UnknownTemplate(selection.template.name.clone()))?;

        // Point of no return
        let box_name = ctx
            .world
            .display_name(container)
            .unwrap_or_else(|| "mystery box".to_string());
        ctx.ui.show_popup(&pry_message(&box_name));
        ctx.ui.show_popup(&reveal_message(&prize));

        if !ctx.world.destroy(container, DESTROY_REASON) {
            log::warn!("container {:?} vanished before it could be destroyed", container);
        }

        let blueprint = prize.blueprint.clone();
        let prize_name = prize.plain_name();
        let placed = place_at(ctx.world, ctx.scheduler, prize, anchor.cell, ctx.rng);

        self.options
            .confetti()
            .emit(ctx.ui, placed.cell, CONFETTI_PALETTE, ctx.cosmetic);
        if self.options.sound {
            ctx.ui.play_sound(&self.options.sound_cue);
        }

        log::info!(
            "mystery box {:?} awarded '{}' at ({}, {}) via {}",
            container,
            blueprint,
            placed.cell.x,
            placed.cell.y,
            anchor.source
        );

        Ok(PrizeAward {
            prize: placed.id,
            blueprint,
            prize_name,
            cell: placed.cell,
            source: anchor.source,
            draws,
        })
    }
}
