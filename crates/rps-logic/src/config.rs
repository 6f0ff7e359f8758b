//! Game configuration

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Knobs for a game session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Refuse to play or claim without a connected wallet.
    pub require_wallet: bool,
    /// Label shown on the prize modal.
    pub prize_label: String,
}

impl GameConfig {
    /// Wallet-gated play, the normal mode.
    pub fn standard() -> Self {
        Self {
            require_wallet: true,
            prize_label: "Rock Paper Scissors Prize".to_string(),
        }
    }

    /// No wallet needed; used for demos and local testing.
    pub fn free_play() -> Self {
        Self {
            require_wallet: false,
            ..Self::standard()
        }
    }

    /// Decode from JSON. Missing fields fall back to `standard()`.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(GameConfig::default(), GameConfig::standard());
        assert!(GameConfig::standard().require_wallet);
        assert!(!GameConfig::free_play().require_wallet);
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{"require_wallet": false}"#).unwrap();
        assert!(!config.require_wallet);
        assert_eq!(config.prize_label, GameConfig::standard().prize_label);

        let empty = GameConfig::from_json("{}").unwrap();
        assert_eq!(empty, GameConfig::standard());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = GameConfig::from_json(r#"{"require_wallet": "yes"}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }
}
