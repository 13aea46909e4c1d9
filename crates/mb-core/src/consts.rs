//! Tuning constants for the mystery box

/// Zone dimensions
pub const ZONE_WIDTH: usize = 80;
pub const ZONE_HEIGHT: usize = 25;

/// Draws the prize selector makes before giving up
pub const MAX_PRIZE_DRAWS: u32 = 10_000;

/// Confetti burst shown where the prize lands
pub const CONFETTI_COUNT: usize = 32;
pub const CONFETTI_LIFETIME: u32 = 999;
/// Velocity rolls are drawn from `-CONFETTI_SPREAD..=CONFETTI_SPREAD`
pub const CONFETTI_SPREAD: i32 = 6;
pub const CONFETTI_DX_STEP: f32 = 0.13;
pub const CONFETTI_DY_BASE: f32 = -0.7;
pub const CONFETTI_DY_STEP: f32 = 0.1;
pub const CONFETTI_DDX: f32 = 0.0;
pub const CONFETTI_DDY: f32 = 0.015;

/// World sound played when a prize is awarded
pub const PRIZE_SOUND: &str = "party";

/// Inventory command that opens the box
pub const OPEN_COMMAND: &str = "OpenMysteryBox";
pub const OPEN_HOTKEY: char = 'o';
pub const OPEN_PRIORITY: i32 = 2;

/// Reason recorded when the box is destroyed
pub const DESTROY_REASON: &str = "prizes!";

/// Messages
pub const MSG_NOWHERE_TO_PUT: &str = "There's nowhere to put your prize.";
