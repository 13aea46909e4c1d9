//! In-memory zone implementing the world service

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::HashMap;

use super::{Cell, Terrain};
use crate::host::World;
use crate::object::{GameObject, ObjectId, Position};
use crate::{ZONE_HEIGHT, ZONE_WIDTH};

/// Where an object currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Lying in a cell
    Floor(Position),
    /// In another object's inventory
    Inventory(ObjectId),
    /// Equipped by another object
    Equipped(ObjectId),
    /// Not reachable from the map
    #[default]
    Detached,
}

#[derive(Debug, Clone)]
struct Entry {
    object: GameObject,
    placement: Placement,
}

/// A single zone map with its objects
#[derive(Debug, Clone)]
pub struct Zone {
    /// Map cells, indexed `[x][y]`
    cells: Vec<Vec<Cell>>,

    objects: HashMap<ObjectId, Entry>,

    /// Player is travelling on the world map rather than inside a zone
    pub world_map: bool,

    /// Next object ID to assign
    next_object_id: u32,
}

impl Default for Zone {
    fn default() -> Self {
        Self::new()
    }
}

impl Zone {
    /// Create an open zone: all floor, no objects
    pub fn new() -> Self {
        Self {
            cells: vec![vec![Cell::default(); ZONE_HEIGHT]; ZONE_WIDTH],
            objects: HashMap::new(),
            world_map: false,
            next_object_id: 1,
        }
    }

    /// Check if position is valid
    pub const fn is_valid_pos(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < ZONE_WIDTH && (pos.y as usize) < ZONE_HEIGHT
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.is_valid_pos(pos) {
            return None;
        }
        Some(&self.cells[pos.x as usize][pos.y as usize])
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !self.is_valid_pos(pos) {
            return None;
        }
        Some(&mut self.cells[pos.x as usize][pos.y as usize])
    }

    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.terrain = terrain;
        }
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id).map(|e| &e.object)
    }

    pub fn placement(&self, id: ObjectId) -> Option<Placement> {
        self.objects.get(&id).map(|e| e.placement)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Objects lying in a cell, oldest first
    pub fn objects_at(&self, pos: Position) -> Vec<&GameObject> {
        let Some(cell) = self.cell(pos) else {
            return Vec::new();
        };
        cell.objects.iter().filter_map(|id| self.object(*id)).collect()
    }

    /// Add an object that is not on the map yet
    pub fn insert_detached(&mut self, mut object: GameObject) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        object.id = id;
        self.objects.insert(
            id,
            Entry {
                object,
                placement: Placement::Detached,
            },
        );
        id
    }

    /// Move an object. Returns false if the object is unknown or the
    /// target cell is off the map.
    pub fn set_placement(&mut self, id: ObjectId, placement: Placement) -> bool {
        if let Placement::Floor(pos) = placement
            && !self.is_valid_pos(pos)
        {
            return false;
        }
        let Some(old) = self.placement(id) else {
            return false;
        };
        self.unlink(id, old);
        if let Placement::Floor(pos) = placement
            && let Some(cell) = self.cell_mut(pos)
        {
            cell.objects.push(id);
        }
        if let Some(entry) = self.objects.get_mut(&id) {
            entry.placement = placement;
        }
        true
    }

    fn unlink(&mut self, id: ObjectId, placement: Placement) {
        if let Placement::Floor(pos) = placement
            && let Some(cell) = self.cell_mut(pos)
        {
            cell.objects.retain(|&oid| oid != id);
        }
    }

    /// Remove an object. Anything it carried or wore becomes detached.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<GameObject> {
        let entry = self.objects.remove(&id)?;
        self.unlink(id, entry.placement);
        for other in self.objects.values_mut() {
            if matches!(other.placement, Placement::Inventory(h) | Placement::Equipped(h) if h == id)
            {
                other.placement = Placement::Detached;
            }
        }
        Some(entry.object)
    }
}

impl World for Zone {
    fn current_cell(&self, id: ObjectId) -> Option<Position> {
        match self.placement(id)? {
            Placement::Floor(pos) => Some(pos),
            _ => None,
        }
    }

    fn in_inventory_of(&self, id: ObjectId) -> Option<ObjectId> {
        match self.placement(id)? {
            Placement::Inventory(holder) => Some(holder),
            _ => None,
        }
    }

    fn equipped_by(&self, id: ObjectId) -> Option<ObjectId> {
        match self.placement(id)? {
            Placement::Equipped(holder) => Some(holder),
            _ => None,
        }
    }

    fn display_name(&self, id: ObjectId) -> Option<String> {
        self.object(id).map(|o| o.display_name.clone())
    }

    fn is_empty(&self, cell: Position) -> bool {
        self.cell(cell).is_some_and(Cell::is_empty)
    }

    fn empty_adjacent_cells(&self, cell: Position) -> Vec<Position> {
        cell.neighbors().filter(|&n| self.is_empty(n)).collect()
    }

    fn add_object(&mut self, object: GameObject, cell: Position) -> ObjectId {
        let id = self.insert_detached(object);
        if !self.set_placement(id, Placement::Floor(cell)) {
            log::warn!("object {:?} added off the map at {:?}", id, cell);
        }
        id
    }

    fn destroy(&mut self, id: ObjectId, reason: &str) -> bool {
        let removed = self.remove_object(id).is_some();
        if removed {
            log::debug!("destroyed {:?} ({})", id, reason);
        }
        removed
    }

    fn on_world_map(&self) -> bool {
        self.world_map
    }
}
