//! Zone cells

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::ObjectId;

/// Terrain type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Terrain {
    #[default]
    Floor = 0,
    Wall = 1,
}

impl Terrain {
    /// Check if objects can be dropped here
    pub const fn is_passable(&self) -> bool {
        matches!(self, Terrain::Floor)
    }
}

/// A single map cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Terrain,
    /// Objects lying here, oldest first
    pub objects: Vec<ObjectId>,
}

impl Cell {
    /// Passable and holding nothing
    pub fn is_empty(&self) -> bool {
        self.terrain.is_passable() && self.objects.is_empty()
    }
}
