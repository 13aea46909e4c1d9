//! Recording presentation layer

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::host::Presentation;
use crate::prize::Particle;

/// Records everything shown to the player instead of drawing it
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub popups: Vec<String>,
    pub sounds: Vec<String>,
    pub particles: Vec<Particle>,
    pub exit_requests: u32,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.popups.clear();
        self.sounds.clear();
        self.particles.clear();
        self.exit_requests = 0;
    }
}

impl Presentation for Transcript {
    fn show_popup(&mut self, message: &str) {
        self.popups.push(message.to_string());
    }

    fn request_interface_exit(&mut self) {
        self.exit_requests += 1;
    }

    fn play_sound(&mut self, name: &str) {
        self.sounds.push(name.to_string());
    }

    fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_clears() {
        let mut ui = Transcript::new();
        ui.show_popup("hello");
        ui.play_sound("party");
        ui.request_interface_exit();
        assert_eq!(ui.popups, ["hello"]);
        assert_eq!(ui.sounds, ["party"]);
        assert_eq!(ui.exit_requests, 1);

        ui.clear();
        assert!(ui.popups.is_empty());
        assert_eq!(ui.exit_requests, 0);
    }
}
