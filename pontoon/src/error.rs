use thiserror::Error;

/// Everything that can go wrong while driving a round. None of these are
/// fatal to the process; the game loop branches on them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("insufficient funds: balance {balance} cannot cover {amount}")]
    InsufficientFunds { balance: u32, amount: u32 },

    #[error("{0} is not supported")]
    Unsupported(&'static str),

    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("{0} is not a valid payout ratio")]
    InvalidRatio(String),

    #[error("{op} is only allowed in the {phase} phase")]
    WrongPhase {
        op: &'static str,
        phase: &'static str,
    },
}

impl GameError {
    pub fn wrong_phase(op: &'static str, phase: &'static str) -> Self {
        GameError::WrongPhase { op, phase }
    }
}
