//! The color palette the circle cycles through.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color the circle can show.
///
/// `Green` is the tap target; `Idle` is the neutral color shown before the
/// first cycle of a session (and after game over). Everything else is a
/// distractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameColor {
    Red,
    Blue,
    Yellow,
    Brown,
    White,
    Orange,
    LightGreen,
    /// The tap target
    Green,
    /// Neutral, not part of any round
    #[default]
    Idle,
}

impl GameColor {
    /// Every color a round may sample distractors from.
    pub const DISTRACTORS: [GameColor; 7] = [
        GameColor::Red,
        GameColor::Blue,
        GameColor::Yellow,
        GameColor::Brown,
        GameColor::White,
        GameColor::Orange,
        GameColor::LightGreen,
    ];

    /// Is this the color the player must tap?
    pub fn is_target(&self) -> bool {
        *self == GameColor::Green
    }

    /// Is this the neutral pre-round color?
    pub fn is_idle(&self) -> bool {
        *self == GameColor::Idle
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameColor::Red => "red",
            GameColor::Blue => "blue",
            GameColor::Yellow => "yellow",
            GameColor::Brown => "brown",
            GameColor::White => "white",
            GameColor::Orange => "orange",
            GameColor::LightGreen => "light-green",
            GameColor::Green => "green",
            GameColor::Idle => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(GameColor::Red),
            "blue" => Some(GameColor::Blue),
            "yellow" => Some(GameColor::Yellow),
            "brown" => Some(GameColor::Brown),
            "white" => Some(GameColor::White),
            "orange" => Some(GameColor::Orange),
            "light-green" => Some(GameColor::LightGreen),
            "green" => Some(GameColor::Green),
            "default" | "idle" => Some(GameColor::Idle),
            _ => None,
        }
    }
}

impl fmt::Display for GameColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distractors_exclude_target_and_idle() {
        assert_eq!(GameColor::DISTRACTORS.len(), 7);
        for color in GameColor::DISTRACTORS {
            assert!(!color.is_target());
            assert!(!color.is_idle());
        }
    }

    #[test]
    fn test_distractors_are_distinct() {
        let colors = GameColor::DISTRACTORS;
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_name_round_trip() {
        let all = [
            GameColor::Red,
            GameColor::Blue,
            GameColor::Yellow,
            GameColor::Brown,
            GameColor::White,
            GameColor::Orange,
            GameColor::LightGreen,
            GameColor::Green,
            GameColor::Idle,
        ];
        for color in all {
            assert_eq!(GameColor::from_str(color.as_str()), Some(color));
        }
        assert_eq!(GameColor::from_str("purple"), None);
    }
}
