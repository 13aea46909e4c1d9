//! Host collaborator seams
//!
//! The prize engine owns none of the world. It asks the host where objects
//! are, which cells are free, and hands finished objects back through these
//! traits. [`crate::zone`] provides an in-memory implementation.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::object::{GameObject, ObjectId, Position};
use crate::prize::Particle;

/// World and location service
pub trait World {
    /// Cell the object lies in, if it is directly on the map
    fn current_cell(&self, id: ObjectId) -> Option<Position>;

    /// Object whose inventory holds `id`
    fn in_inventory_of(&self, id: ObjectId) -> Option<ObjectId>;

    /// Object that has `id` equipped
    fn equipped_by(&self, id: ObjectId) -> Option<ObjectId>;

    fn display_name(&self, id: ObjectId) -> Option<String>;

    /// Whether the cell is free of anything that occupies it
    fn is_empty(&self, cell: Position) -> bool;

    /// Empty cells adjacent to `cell` within the same zone
    fn empty_adjacent_cells(&self, cell: Position) -> Vec<Position>;

    /// Insert an object into a cell. Occupancy is advisory here: the object
    /// is added even if the cell is not empty.
    fn add_object(&mut self, object: GameObject, cell: Position) -> ObjectId;

    /// Remove an object from the world. Returns false if it was not found.
    fn destroy(&mut self, id: ObjectId, reason: &str) -> bool;

    /// Whether the player is currently travelling on the world map
    fn on_world_map(&self) -> bool {
        false
    }
}

/// Active-object scheduler: grants brain-bearing objects their turns
pub trait Scheduler {
    fn add_active_object(&mut self, id: ObjectId);
}

/// Presentation service
pub trait Presentation {
    /// Blocking modal message
    fn show_popup(&mut self, message: &str);

    /// Leave the menu the current action was invoked from
    fn request_interface_exit(&mut self);

    fn play_sound(&mut self, name: &str);

    fn add_particle(&mut self, particle: Particle);
}
