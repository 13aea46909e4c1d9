//! Cosmetic feedback: confetti and sound
//!
//! Nothing here can fail or change the outcome of an open. All randomness
//! comes from the cosmetic RNG.

use serde::{Deserialize, Serialize};

use crate::host::Presentation;
use crate::object::Position;
use crate::rng::GameRng;
use crate::{
    CONFETTI_COUNT, CONFETTI_DDX, CONFETTI_DDY, CONFETTI_DX_STEP, CONFETTI_DY_BASE,
    CONFETTI_DY_STEP, CONFETTI_LIFETIME, CONFETTI_SPREAD,
};

/// Color constants
pub const CLR_RED: u8 = 1;
pub const CLR_BRIGHT_GREEN: u8 = 10;
pub const CLR_YELLOW: u8 = 11;
pub const CLR_BRIGHT_BLUE: u8 = 12;
pub const CLR_BRIGHT_MAGENTA: u8 = 13;
pub const CLR_WHITE: u8 = 15;

/// Bright rainbow used for confetti
pub const CONFETTI_PALETTE: &[u8] = &[
    CLR_RED,
    CLR_BRIGHT_GREEN,
    CLR_BRIGHT_BLUE,
    CLR_BRIGHT_MAGENTA,
    CLR_YELLOW,
    CLR_WHITE,
];

/// Bullet, degree sign and middle dot
pub const CONFETTI_GLYPHS: &[char] = &['\u{2022}', '\u{00b0}', '\u{2219}'];

/// A short-lived decorative particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub glyph: char,
    pub color: u8,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Frames to live
    pub lifetime: u32,
    pub ddx: f32,
    pub ddy: f32,
}

/// Shape of a confetti burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfettiBurst {
    pub count: usize,
    pub lifetime: u32,
    /// Velocity rolls are drawn from `-spread..=spread`
    pub spread: i32,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            count: CONFETTI_COUNT,
            lifetime: CONFETTI_LIFETIME,
            spread: CONFETTI_SPREAD,
        }
    }
}

impl ConfettiBurst {
    /// Build one particle centred on `cell`
    pub fn particle(&self, cell: Position, palette: &[u8], rng: &mut GameRng) -> Particle {
        let color = rng.choose(palette).copied().unwrap_or(CLR_WHITE);
        let glyph = rng.choose(CONFETTI_GLYPHS).copied().unwrap_or('*');
        let rx = rng.rn_range(-self.spread, self.spread);
        let ry = rng.rn_range(-self.spread, self.spread);
        Particle {
            glyph,
            color,
            x: cell.x as f32,
            y: cell.y as f32,
            dx: CONFETTI_DX_STEP * rx as f32,
            dy: CONFETTI_DY_BASE + CONFETTI_DY_STEP * ry as f32,
            lifetime: self.lifetime,
            ddx: CONFETTI_DDX,
            ddy: CONFETTI_DDY,
        }
    }

    /// Spawn the whole burst
    pub fn emit(
        &self,
        ui: &mut dyn Presentation,
        cell: Position,
        palette: &[u8],
        rng: &mut GameRng,
    ) {
        for _ in 0..self.count {
            ui.add_particle(self.particle(cell, palette, rng));
        }
    }
}
