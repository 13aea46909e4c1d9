//! In-memory host
//!
//! A single zone map, an active-object queue and a recording presentation
//! layer. Enough of a world to drive the prize engine without a game engine.

mod actions;
mod cell;
mod level;
mod transcript;

pub use actions::ActionQueue;
pub use cell::{Cell, Terrain};
pub use level::{Placement, Zone};
pub use transcript::Transcript;
