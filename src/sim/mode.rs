//! Difficulty presets
//!
//! The mode table is fixed data; there is no runtime tuning beyond picking
//! one of the named presets.

use serde::{Deserialize, Serialize};

/// Named difficulty preset identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModeId {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl ModeId {
    pub const ALL: [ModeId; 3] = [ModeId::Easy, ModeId::Normal, ModeId::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeId::Easy => "easy",
            ModeId::Normal => "normal",
            ModeId::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(ModeId::Easy),
            "normal" => Some(ModeId::Normal),
            "hard" => Some(ModeId::Hard),
            _ => None,
        }
    }

    /// HUD label ("EASY", "NORMAL", "HARD")
    pub fn label(&self) -> &'static str {
        match self {
            ModeId::Easy => "EASY",
            ModeId::Normal => "NORMAL",
            ModeId::Hard => "HARD",
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            ModeId::Easy => Mode {
                id: ModeId::Easy,
                starting_lives: 5,
                spawn_interval: 0.45,
                fall_speed: 650.0,
            },
            ModeId::Normal => Mode {
                id: ModeId::Normal,
                starting_lives: 3,
                spawn_interval: 0.28,
                fall_speed: 900.0,
            },
            ModeId::Hard => Mode {
                id: ModeId::Hard,
                starting_lives: 2,
                spawn_interval: 0.18,
                fall_speed: 1200.0,
            },
        }
    }
}

/// Immutable difficulty parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub id: ModeId,
    pub starting_lives: u32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Fall speed in px/s
    pub fall_speed: f32,
}

impl Default for Mode {
    fn default() -> Self {
        ModeId::default().mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        let easy = ModeId::Easy.mode();
        assert_eq!(easy.starting_lives, 5);
        assert_eq!(easy.spawn_interval, 0.45);
        assert_eq!(easy.fall_speed, 650.0);

        let hard = ModeId::Hard.mode();
        assert_eq!(hard.starting_lives, 2);
        assert_eq!(hard.spawn_interval, 0.18);
        assert_eq!(hard.fall_speed, 1200.0);

        assert_eq!(Mode::default().id, ModeId::Normal);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(ModeId::from_str("hard"), Some(ModeId::Hard));
        assert_eq!(ModeId::from_str(" Easy "), Some(ModeId::Easy));
        assert_eq!(ModeId::from_str("nightmare"), None);
        for id in ModeId::ALL {
            assert_eq!(ModeId::from_str(id.as_str()), Some(id));
            assert_eq!(id.label(), id.as_str().to_uppercase());
        }
    }
}
