use serde::{Deserialize, Serialize};

use crate::types::Mark;

pub const DEFAULT_SYMBOLS: [&str; 2] = ["🐙", "🐡"];
pub const DEFAULT_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Why a `GameConfig` was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("symbol for seat {seat} is empty")]
    EmptySymbol { seat: usize },
    #[display("both players use the symbol {symbol:?}")]
    DuplicateSymbol { symbol: String },
    #[display("default name for seat {seat} is empty")]
    EmptyDefaultName { seat: usize },
}

/// Presentation-facing settings: mark symbols and fallback player labels.
///
/// Every field has a default, so the page may pass a partial object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub symbols: [String; 2],
    pub default_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.map(String::from),
            default_names: DEFAULT_NAMES.map(String::from),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seat) = self.symbols.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptySymbol { seat });
        }
        if self.symbols[0] == self.symbols[1] {
            return Err(ConfigError::DuplicateSymbol {
                symbol: self.symbols[0].clone(),
            });
        }
        if let Some(seat) = self
            .default_names
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::EmptyDefaultName { seat });
        }
        Ok(())
    }

    pub fn symbol(&self, mark: Mark) -> &str {
        &self.symbols[mark.seat()]
    }

    /// Trimmed `name`, or the seat's default label when blank or absent.
    pub fn resolve_name(&self, name: Option<&str>, seat: usize) -> String {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.default_names[seat].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.symbol(Mark::A), "🐙");
        assert_eq!(config.symbol(Mark::B), "🐡");
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let config = GameConfig {
            symbols: ["X".to_string(), "X".to_string()],
            ..GameConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateSymbol {
                symbol: "X".to_string()
            }
        );
        assert!(err.to_string().contains("both players"));
    }

    #[test]
    fn blank_symbol_is_rejected() {
        let config = GameConfig {
            symbols: ["X".to_string(), "  ".to_string()],
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::EmptySymbol { seat: 1 }));
    }

    #[test]
    fn blank_default_name_is_rejected() {
        let config = GameConfig {
            default_names: ["".to_string(), "  ".to_string()],
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyDefaultName { seat: 0 })
        );

        let config = GameConfig {
            default_names: ["Host".to_string(), " ".to_string()],
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyDefaultName { seat: 1 })
        );
    }

    #[test]
    fn blank_or_missing_names_fall_back_to_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.resolve_name(None, 0), "Player 1");
        assert_eq!(config.resolve_name(Some(""), 1), "Player 2");
        assert_eq!(config.resolve_name(Some("   "), 0), "Player 1");
        assert_eq!(config.resolve_name(Some("  Ann "), 0), "Ann");
    }
}
