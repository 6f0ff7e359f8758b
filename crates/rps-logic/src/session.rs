//! Game session: the view-state a renderer reads, plus its transitions
//!
//! A session tracks the connected wallet, the last round and the prize flags.
//! Claiming is simulated: confirming only flips `prize_claimed`.

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::choice::Choice;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{play_round, Round};

/// State of one game component instance
#[derive(Clone, Debug, Default)]
pub struct Session {
    config: GameConfig,
    account: Option<String>,
    round: Option<Round>,
    prize_available: bool,
    modal_open: bool,
    prize_claimed: bool,
}

/// Snapshot handed to renderers
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<Round>,
    pub prize_available: bool,
    pub modal_open: bool,
    pub prize_claimed: bool,
    pub prize_label: String,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn prize_available(&self) -> bool {
        self.prize_available
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn prize_claimed(&self) -> bool {
        self.prize_claimed
    }

    /// Record the wallet account supplied by the wallet provider.
    pub fn connect(&mut self, account: &str) -> Result<(), GameError> {
        let account = account.trim();
        if account.is_empty() {
            warn!("rejected empty wallet account");
            return Err(GameError::InvalidAccount);
        }
        match self.account.as_deref() {
            Some(current) if current == account => return Ok(()),
            Some(current) => {
                info!("wallet switched: {} -> {}", current, account);
                // a round and its prize belong to the account that played it
                self.play_again();
            }
            None => info!("wallet connected: {}", account),
        }
        self.account = Some(account.to_string());
        Ok(())
    }

    /// Forget the wallet. Play is gated, so the round goes with it.
    pub fn disconnect(&mut self) {
        if let Some(account) = self.account.take() {
            info!("wallet disconnected: {}", account);
        }
        self.play_again();
    }

    /// Play a round against the thread-local generator.
    pub fn play(&mut self, choice: Choice) -> Result<Round, GameError> {
        self.play_with(choice, &mut rand::rng())
    }

    /// Play a round against `rng`. Replaces any previous round.
    pub fn play_with<R: Rng + ?Sized>(
        &mut self,
        choice: Choice,
        rng: &mut R,
    ) -> Result<Round, GameError> {
        self.ensure_wallet()?;

        let round = play_round(choice, rng);
        debug!(
            "round played: {} vs {} -> {}",
            round.player_choice, round.opponent_choice, round.outcome
        );

        self.round = Some(round);
        self.prize_available = round.is_win();
        self.prize_claimed = false;
        self.modal_open = false;
        Ok(round)
    }

    /// "Play again": clear the round and all prize state.
    pub fn play_again(&mut self) {
        debug!("session reset");
        self.round = None;
        self.prize_available = false;
        self.prize_claimed = false;
        self.modal_open = false;
    }

    /// Open the prize modal for the last winning round.
    pub fn claim_prize(&mut self) -> Result<(), GameError> {
        self.ensure_wallet()?;
        if self.prize_claimed {
            return Err(GameError::PrizeAlreadyClaimed);
        }
        if !self.prize_available {
            return Err(GameError::NoPrizeAvailable);
        }
        self.modal_open = true;
        Ok(())
    }

    /// Complete the simulated claim started by `claim_prize`.
    pub fn confirm_claim(&mut self) -> Result<(), GameError> {
        if !self.modal_open {
            return Err(GameError::ClaimNotStarted);
        }
        self.modal_open = false;
        self.prize_claimed = true;
        info!(
            "prize claimed: {} by {}",
            self.config.prize_label,
            self.account.as_deref().unwrap_or("<anonymous>")
        );
        Ok(())
    }

    /// Dismiss the modal without claiming.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            connected: self.is_connected(),
            account: self.account.clone(),
            round: self.round,
            prize_available: self.prize_available,
            modal_open: self.modal_open,
            prize_claimed: self.prize_claimed,
            prize_label: self.config.prize_label.clone(),
        }
    }

    fn ensure_wallet(&self) -> Result<(), GameError> {
        if self.config.require_wallet && self.account.is_none() {
            warn!("action refused: no wallet connected");
            return Err(GameError::WalletNotConnected);
        }
        Ok(())
    }
}
