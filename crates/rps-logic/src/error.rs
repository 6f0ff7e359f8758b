//! Errors surfaced at the edges of the game (parsing, session guards, config)

/// Everything that can go wrong outside the pure core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Input did not name Rock, Paper or Scissors.
    UnknownChoice(String),
    /// Wallet account id was empty.
    InvalidAccount,
    /// Action requires a connected wallet.
    WalletNotConnected,
    /// Last round was not a win (or there is no last round).
    NoPrizeAvailable,
    /// Prize for this round was already claimed.
    PrizeAlreadyClaimed,
    /// Claim confirmed without opening the prize modal first.
    ClaimNotStarted,
    /// Config JSON could not be decoded.
    InvalidConfig(String),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::UnknownChoice(input) =>
                write!(f, "unknown choice {:?}, expected Rock, Paper or Scissors", input),
            GameError::InvalidAccount => write!(f, "wallet account id is empty"),
            GameError::WalletNotConnected => write!(f, "connect a wallet to play"),
            GameError::NoPrizeAvailable => write!(f, "no prize available for the last round"),
            GameError::PrizeAlreadyClaimed => write!(f, "prize already claimed"),
            GameError::ClaimNotStarted => write!(f, "prize claim has not been started"),
            GameError::InvalidConfig(reason) => write!(f, "invalid game config: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
