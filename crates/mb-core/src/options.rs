//! Mystery box configuration
//!
//! Options use the same rc format as the rest of the game:
//!
//! ```text
//! # comment
//! OPTIONS=max_draws:500,confetti_count:16,!sound
//! OPTIONS=exhausted_notice:The box is empty.
//! ```

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::path::Path;
use thiserror::Error;

use crate::prize::{ConfettiBurst, PrizeSelector};
use crate::{CONFETTI_COUNT, CONFETTI_LIFETIME, CONFETTI_SPREAD, MAX_PRIZE_DRAWS, PRIZE_SOUND};

/// Options whose value is free text and may contain commas
const TEXT_OPTIONS: [&str; 2] = ["exhausted_notice", "sound_cue"];

/// Options error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

/// Tunables for opening mystery boxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenerOptions {
    /// Draw budget for the prize selector
    pub max_draws: u32,

    // Confetti
    pub confetti_count: usize,
    pub confetti_lifetime: u32,
    pub confetti_spread: i32,

    // Sound
    pub sound: bool,
    pub sound_cue: String,

    /// Popup shown when no prize could be drawn. `None` keeps the
    /// exhausted case silent.
    pub exhausted_notice: Option<String>,
}

impl Default for OpenerOptions {
    fn default() -> Self {
        Self {
            max_draws: MAX_PRIZE_DRAWS,
            confetti_count: CONFETTI_COUNT,
            confetti_lifetime: CONFETTI_LIFETIME,
            confetti_spread: CONFETTI_SPREAD,
            sound: true,
            sound_cue: PRIZE_SOUND.to_string(),
            exhausted_notice: None,
        }
    }
}

impl OpenerOptions {
    pub fn selector(&self) -> PrizeSelector {
        PrizeSelector::new(self.max_draws)
    }

    pub fn confetti(&self) -> ConfettiBurst {
        ConfettiBurst {
            count: self.confetti_count,
            lifetime: self.confetti_lifetime,
            spread: self.confetti_spread,
        }
    }

    #[cfg(feature = "std")]
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    ///
    /// `exhausted_notice` and `sound_cue` take the rest of their line, commas included.
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(mut rest) = line.strip_prefix("OPTIONS=") {
                while !rest.is_empty() {
                    rest = rest.trim_start();
                    // Free text options run to the end of the line
                    let (opt, tail) = if TEXT_OPTIONS.iter().any(|key| rest.starts_with(key)) {
                        (rest, "")
                    } else {
                        rest.split_once(',').unwrap_or((rest, ""))
                    };
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                    rest = tail;
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        let (negated, opt_name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };

        if let Some((key, value)) = opt_name.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }
        if let Some((key, value)) = opt_name.split_once('=') {
            return self.set_option(key.trim(), value.trim());
        }

        self.set_bool_option(opt_name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "sound" => self.sound = value,
            // Only the negated form makes sense without a message
            "exhausted_notice" if !value => self.exhausted_notice = None,
            "exhausted_notice" => return Err(OptionsError::MissingValue(name.to_string())),
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "max_draws" => self.max_draws = value.parse().map_err(|_| invalid())?,
            "confetti_count" => self.confetti_count = value.parse().map_err(|_| invalid())?,
            "confetti_lifetime" => {
                self.confetti_lifetime = value.parse().map_err(|_| invalid())?;
            }
            "confetti_spread" => {
                let spread: i32 = value.parse().map_err(|_| invalid())?;
                if spread < 0 {
                    return Err(invalid());
                }
                self.confetti_spread = spread;
            }
            "sound_cue" => {
                if value.is_empty() {
                    return Err(OptionsError::MissingValue(name.to_string()));
                }
                self.sound_cue = value.to_string();
            }
            "exhausted_notice" => {
                self.exhausted_notice = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    #[cfg(feature = "std")]
    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        let contents = self.to_config_string();
        std::fs::write(path, contents).map_err(|e| OptionsError::Io(e.to_string()))
    }

    /// Render options in the rc format accepted by [`Self::parse_config`]
    pub fn to_config_string(&self) -> String {
        let mut lines = Vec::new();
        lines.push("# Mystery box options".to_string());
        lines.push(format!(
            "OPTIONS=max_draws:{},confetti_count:{},confetti_lifetime:{},confetti_spread:{}",
            self.max_draws, self.confetti_count, self.confetti_lifetime, self.confetti_spread
        ));
        lines.push(format!(
            "OPTIONS={}sound,sound_cue:{}",
            if self.sound { "" } else { "!" },
            self.sound_cue
        ));
        if let Some(notice) = &self.exhausted_notice {
            lines.push(format!("OPTIONS=exhausted_notice:{}", notice));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = OpenerOptions::default();
        assert_eq!(opts.max_draws, 10_000);
        assert_eq!(opts.confetti_count, 32);
        assert!(opts.sound);
        assert_eq!(opts.sound_cue, "party");
        assert!(opts.exhausted_notice.is_none());
    }

    #[test]
    fn test_parse_values() {
        let config = "# tuned for tests\nOPTIONS=max_draws:50, confetti_count:4,!sound\n";
        let opts = OpenerOptions::parse_config(config).unwrap();
        assert_eq!(opts.max_draws, 50);
        assert_eq!(opts.confetti_count, 4);
        assert!(!opts.sound);
        assert_eq!(opts.selector().max_draws, 50);
        assert_eq!(opts.confetti().count, 4);
    }

    #[test]
    fn test_parse_notice_with_spaces() {
        let opts =
            OpenerOptions::parse_config("OPTIONS=exhausted_notice:The box is empty.").unwrap();
        assert_eq!(opts.exhausted_notice.as_deref(), Some("The box is empty."));

        let opts = OpenerOptions::parse_config(
            "OPTIONS=exhausted_notice:Empty.\nOPTIONS=!exhausted_notice",
        )
        .unwrap();
        assert!(opts.exhausted_notice.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            OpenerOptions::parse_config("OPTIONS=bogus").unwrap_err(),
            OptionsError::UnknownOption("bogus".to_string())
        );
        assert_eq!(
            OpenerOptions::parse_config("OPTIONS=max_draws:lots").unwrap_err(),
            OptionsError::InvalidValue("max_draws".to_string(), "lots".to_string())
        );
        assert_eq!(
            OpenerOptions::parse_config("OPTIONS=confetti_spread:-1").unwrap_err(),
            OptionsError::InvalidValue("confetti_spread".to_string(), "-1".to_string())
        );
        assert_eq!(
            OpenerOptions::parse_config("OPTIONS=exhausted_notice").unwrap_err(),
            OptionsError::MissingValue("exhausted_notice".to_string())
        );
    }

    #[test]
    fn test_ignores_other_lines() {
        let opts = OpenerOptions::parse_config("BIND=g:pickup\n\n# OPTIONS=max_draws:1").unwrap();
        assert_eq!(opts, OpenerOptions::default());
    }

    #[test]
    fn test_roundtrip() {
        let opts = OpenerOptions {
            max_draws: 12,
            sound: false,
            sound_cue: "fanfare".to_string(),
            exhausted_notice: Some("Nothing inside.".to_string()),
            ..OpenerOptions::default()
        };

        let config_str = opts.to_config_string();
        let parsed = OpenerOptions::parse_config(&config_str).unwrap();

        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_roundtrip_notice_with_comma() {
        let opts = OpenerOptions {
            exhausted_notice: Some("The box is empty, sadly.".to_string()),
            ..OpenerOptions::default()
        };

        let parsed = OpenerOptions::parse_config(&opts.to_config_string()).unwrap();

        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_text_option_ends_line() {
        let opts =
            OpenerOptions::parse_config("OPTIONS=max_draws:5, sound_cue:drum, roll,!sound")
                .unwrap();
        assert_eq!(opts.max_draws, 5);
        assert_eq!(opts.sound_cue, "drum, roll,!sound");
        assert!(opts.sound);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("mb-options-{}.rc", std::process::id()));
        let opts = OpenerOptions {
            confetti_count: 8,
            ..OpenerOptions::default()
        };
        opts.save_to_file(&path).unwrap();
        let loaded = OpenerOptions::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
