//! Player names and symbols, loadable from a TOML file.

use std::path::Path;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

use crate::error::ConfigError;
use crate::types::Player;

/// Display details of one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Name shown in status messages.
    name: String,
    /// Marker drawn in the player's cells.
    symbol: String,
}

impl PlayerInfo {
    /// Creates player details.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

fn default_player_one() -> PlayerInfo {
    PlayerInfo::new("1", "X")
}

fn default_player_two() -> PlayerInfo {
    PlayerInfo::new("2", "O")
}

/// Names and symbols for both players.
///
/// ```toml
/// [player_one]
/// name = "Cat"
/// symbol = "C"
///
/// [player_two]
/// name = "Dog"
/// symbol = "D"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Roster {
    /// First player (moves first).
    #[serde(default = "default_player_one")]
    player_one: PlayerInfo,

    /// Second player.
    #[serde(default = "default_player_two")]
    player_two: PlayerInfo,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl Roster {
    /// Widest symbol, in terminal columns, a board cell can show.
    pub const MAX_SYMBOL_WIDTH: usize = 5;

    /// Creates a validated roster.
    #[instrument]
    pub fn new(player_one: PlayerInfo, player_two: PlayerInfo) -> Result<Self, ConfigError> {
        let roster = Self {
            player_one,
            player_two,
        };
        roster.validate()?;
        Ok(roster)
    }

    /// Parses and validates a roster from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let roster: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse roster: {}", e)))?;
        roster.validate()?;
        Ok(roster)
    }

    /// Loads a roster from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading roster from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read roster file: {}", e)))?;

        let roster = Self::from_toml_str(&content)?;
        info!(
            player_one = %roster.player_one.name,
            player_two = %roster.player_two.name,
            "Roster loaded successfully"
        );
        Ok(roster)
    }

    /// Details of the given player.
    pub fn get(&self, player: Player) -> &PlayerInfo {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Symbol drawn for the given player.
    pub fn symbol(&self, player: Player) -> &str {
        &self.get(player).symbol
    }

    /// Both symbols, player one first.
    pub fn symbols(&self) -> [&str; 2] {
        [&self.player_one.symbol, &self.player_two.symbol]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for info in [&self.player_one, &self.player_two] {
            if info.name.trim().is_empty() {
                return Err(ConfigError::new("Player name must not be empty"));
            }
            if info.symbol.trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "Symbol for player '{}' must not be empty",
                    info.name
                )));
            }
            let width = info.symbol.width();
            if width > Self::MAX_SYMBOL_WIDTH {
                return Err(ConfigError::new(format!(
                    "Symbol '{}' for player '{}' is {} columns wide (max {})",
                    info.symbol,
                    info.name,
                    width,
                    Self::MAX_SYMBOL_WIDTH
                )));
            }
        }
        if self.player_one.symbol == self.player_two.symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol '{}'",
                self.player_one.symbol
            )));
        }
        Ok(())
    }
}
