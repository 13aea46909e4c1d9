//! Prize placement
//!
//! The anchor is the cell the box "is in": its own cell if it lies on the
//! map, otherwise the cell of whoever holds or wears it. The prize goes into
//! the anchor if that is free, else into a random free neighbour, else into
//! the anchor regardless.

use strum::Display;

use crate::error::OpenError;
use crate::host::{Scheduler, World};
use crate::object::{GameObject, ObjectId, Position};
use crate::rng::GameRng;

/// Where the anchor cell was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AnchorSource {
    /// The box lies directly on the map
    Own,
    /// The box is in this object's inventory
    Holder(ObjectId),
    /// The box is equipped by this object
    Equipper(ObjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub cell: Position,
    pub source: AnchorSource,
}

/// Find the anchor cell for a container.
///
/// Own cell first, then the inventory holder's cell, then the equipper's.
pub fn resolve_anchor(world: &dyn World, container: ObjectId) -> Result<Anchor, OpenError> {
    if let Some(cell) = world.current_cell(container) {
        return Ok(Anchor {
            cell,
            source: AnchorSource::Own,
        });
    }

    if let Some(holder) = world.in_inventory_of(container)
        && let Some(cell) = world.current_cell(holder)
    {
        return Ok(Anchor {
            cell,
            source: AnchorSource::Holder(holder),
        });
    }

    if let Some(equipper) = world.equipped_by(container)
        && let Some(cell) = world.current_cell(equipper)
    {
        return Ok(Anchor {
            cell,
            source: AnchorSource::Equipper(equipper),
        });
    }

    log::warn!("no anchor cell for container {:?}", container);
    Err(OpenError::NoAnchorAvailable)
}

/// Pick the cell a prize should land in.
pub fn choose_cell(world: &dyn World, anchor: Position, rng: &mut GameRng) -> Position {
    if world.is_empty(anchor) {
        return anchor;
    }
    let nearby = world.empty_adjacent_cells(anchor);
    match rng.choose(&nearby) {
        Some(&cell) => cell,
        None => {
            log::debug!("no free cell around {:?}, stacking prize on anchor", anchor);
            anchor
        }
    }
}

/// Result of a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub id: ObjectId,
    pub cell: Position,
}

/// Insert an object near `anchor` and schedule it if it has a brain.
pub fn place_at(
    world: &mut dyn World,
    scheduler: &mut dyn Scheduler,
    object: GameObject,
    anchor: Position,
    rng: &mut GameRng,
) -> Placed {
    let cell = choose_cell(world, anchor, rng);
    let brain = object.brain;
    let id = world.add_object(object, cell);
    if brain {
        scheduler.add_active_object(id);
    }
    Placed { id, cell }
}
