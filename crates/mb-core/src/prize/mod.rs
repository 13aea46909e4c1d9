//! Prize resolution and placement
//!
//! - [`selector`]: draw a valid template from the catalog
//! - [`placement`]: find the anchor cell and a landing cell near it
//! - [`feedback`]: confetti and sound
//! - [`opener`]: the open command tying it together

pub mod feedback;
pub mod opener;
pub mod placement;
pub mod selector;

pub use feedback::{ConfettiBurst, Particle, CONFETTI_GLYPHS, CONFETTI_PALETTE};
pub use opener::{
    open_action, pry_message, reveal_message, InventoryAction, MysteryOpener, OpenContext,
    PrizeAward,
};
pub use placement::{choose_cell, place_at, resolve_anchor, Anchor, AnchorSource, Placed};
pub use selector::{check_prize, is_valid_prize, PrizeSelector, Rejection, Selection};
