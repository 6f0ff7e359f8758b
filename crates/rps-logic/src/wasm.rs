//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{random_choice, resolve, Choice, GameConfig, GameError, Session};

fn to_js_error(e: GameError) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_choice(input: &str) -> Result<Choice, JsError> {
    input.parse::<Choice>().map_err(to_js_error)
}

/// Resolve a round from the player's side
///
/// # Arguments
/// * `player` - Player's choice name ("Rock", "Paper" or "Scissors")
/// * `opponent` - Opponent's choice name
///
/// # Returns
/// Outcome name: "Win", "Lose" or "Tie"
#[wasm_bindgen]
pub fn resolve_round(player: &str, opponent: &str) -> Result<String, JsError> {
    let player = parse_choice(player)?;
    let opponent = parse_choice(opponent)?;
    Ok(resolve(player, opponent).to_string())
}

/// Draw a random opponent choice
#[wasm_bindgen]
pub fn random_opponent_choice() -> String {
    random_choice().to_string()
}

#[derive(serde::Serialize)]
struct ChoiceInfo {
    id: &'static str,
    symbol: &'static str,
}

/// Get all choices in button order, with their glyphs
#[wasm_bindgen]
pub fn get_choices() -> Result<JsValue, JsError> {
    let choices: Vec<ChoiceInfo> = Choice::ALL
        .iter()
        .map(|c| ChoiceInfo { id: c.name(), symbol: c.symbol() })
        .collect();

    serde_wasm_bindgen::to_value(&choices)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// One game component's state, owned by JavaScript
#[wasm_bindgen]
pub struct GameSession {
    inner: Session,
}

#[wasm_bindgen]
impl GameSession {
    /// Create a session. `config_json` is an optional serialized GameConfig.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameSession, JsError> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(to_js_error)?,
            None => GameConfig::standard(),
        };
        Ok(GameSession { inner: Session::new(config) })
    }

    pub fn connect(&mut self, account: &str) -> Result<(), JsError> {
        self.inner.connect(account).map_err(to_js_error)
    }

    pub fn disconnect(&mut self) {
        self.inner.disconnect();
    }

    /// Play a round; returns the serialized Round
    pub fn play(&mut self, choice: &str) -> Result<JsValue, JsError> {
        let choice = parse_choice(choice)?;
        let round = self.inner.play(choice).map_err(to_js_error)?;

        serde_wasm_bindgen::to_value(&round)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = playAgain)]
    pub fn play_again(&mut self) {
        self.inner.play_again();
    }

    #[wasm_bindgen(js_name = claimPrize)]
    pub fn claim_prize(&mut self) -> Result<(), JsError> {
        self.inner.claim_prize().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = confirmClaim)]
    pub fn confirm_claim(&mut self) -> Result<(), JsError> {
        self.inner.confirm_claim().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = closeModal)]
    pub fn close_modal(&mut self) {
        self.inner.close_modal();
    }

    /// Serialized SessionView for rendering
    pub fn view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.view())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}
