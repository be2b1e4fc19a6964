pub mod dealer;
pub mod draw;
pub mod error;
pub mod hand;
pub mod ledger;
pub mod round;

pub use dealer::DealerHand;
pub use draw::{Rank, RankPile, Suit};
pub use error::GameError;
pub use hand::Hand;
pub use ledger::{Ledger, PayoutRatio};
pub use round::{Round, RoundPhase};

/// Table-level settings for a session of rounds. The ledger balance
/// persists across rounds; everything else is fixed when the player sits
/// down.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub starting_balance: u32,
    pub bet_amount: u32,
    /// Ratio applied to every winning main bet. 3:2 at a standard table.
    pub payout_ratio: PayoutRatio,
}

/// How a round ended for the player. `Undecided` is only ever produced by
/// the natural-blackjack check, never by `stand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Push,
    Loss,
    Undecided,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::Win => "win",
            Outcome::Push => "push",
            Outcome::Loss => "loss",
            Outcome::Undecided => "undecided",
        };
        write!(f, "{}", label)
    }
}
