use pontoon_macros::allowed_phase;

use crate::dealer::DealerHand;
use crate::draw::{Rank, RankPile};
use crate::error::GameError;
use crate::hand::Hand;
use crate::ledger::{Ledger, PayoutRatio};
use crate::Outcome;

/// Where a round currently is. Phase-restricted methods check this through
/// `#[allowed_phase(...)]` and refuse calls made out of order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    PlaceBet,
    SideBets,
    Play,
    Settled,
}

/// One round of play: the player's hand, the dealer's hand, the pile they
/// draw from, and a mutable borrow of the caller's ledger. The round is
/// transient; the ledger outlives it and carries the balance into the next
/// round.
pub struct Round<'a> {
    ledger: &'a mut Ledger,
    player: Hand,
    dealer: DealerHand,
    pile: RankPile,
    phase: RoundPhase,
}

impl<'a> Round<'a> {
    /// Deals a fresh round: two cards to the player, then two to the
    /// dealer (that order matters when the pile was scripted with
    /// `RankPile::with_firsts`).
    pub fn deal(ledger: &'a mut Ledger, mut pile: RankPile) -> Round<'a> {
        let player = Hand::deal(2, &mut pile);
        let dealer = DealerHand::deal(&mut pile);
        Round {
            ledger,
            player,
            dealer,
            pile,
            phase: RoundPhase::PlaceBet,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn player_count(&self) -> u16 {
        self.player.count()
    }

    pub fn player_is_bust(&self) -> bool {
        self.player.is_bust()
    }

    pub fn dealer_up_card(&self) -> Rank {
        self.dealer.up_card()
    }

    pub fn dealer_offers_insurance(&self) -> bool {
        self.dealer.offers_insurance()
    }

    /// The full dealer hand, hole card included. Only show it once the
    /// round has settled.
    pub fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    pub fn dealer_count(&self) -> u16 {
        self.dealer.count()
    }

    /// Stakes the main bet.
    #[allowed_phase(PlaceBet)]
    pub fn place_bet(&mut self) -> Result<(), GameError> {
        if !self.ledger.place_main_bet() {
            return Err(GameError::InsufficientFunds {
                balance: self.ledger.balance(),
                amount: self.ledger.bet_amount(),
            });
        }
        self.phase = RoundPhase::SideBets;
        Ok(())
    }

    /// Takes the insurance side bet: half the main stake against a dealer
    /// natural. Only offered while the dealer shows an Ace.
    #[allowed_phase(SideBets)]
    pub fn insure(&mut self) -> Result<(), GameError> {
        if !self.dealer.offers_insurance() {
            return Err(GameError::Precondition(String::from(
                "insurance requires the dealer to show an Ace",
            )));
        }
        if !self.ledger.insure() {
            return Err(GameError::InsufficientFunds {
                balance: self.ledger.balance(),
                amount: self.ledger.bet_amount() / 2,
            });
        }
        Ok(())
    }

    /// Whether even money is on the table: a player natural against a
    /// dealer Ace.
    #[allowed_phase(SideBets)]
    pub fn check_even_money(&self) -> Result<bool, GameError> {
        Ok(self.player.is_natural()? && self.dealer.offers_insurance())
    }

    /// Takes the guaranteed 1:1 payout instead of playing the natural out.
    /// Settles the round immediately; a pending insurance bet still
    /// resolves against the hole card.
    #[allowed_phase(SideBets)]
    pub fn take_even_money(&mut self) -> Result<u32, GameError> {
        if !(self.player.is_natural()? && self.dealer.offers_insurance()) {
            return Err(GameError::Precondition(String::from(
                "even money requires a player natural against a dealer Ace",
            )));
        }
        if self.dealer.is_natural()? {
            self.ledger.resolve_insurance();
        } else {
            self.ledger.forfeit_insurance();
        }
        let stake = self.ledger.bet_amount();
        let paid = self.ledger.payout(PayoutRatio::EVEN, stake);
        self.phase = RoundPhase::Settled;
        log::debug!("even money taken, paid {}", paid);
        Ok(paid)
    }

    /// The predetermined-win check on the two dealt hands. Settles the
    /// round unless neither side holds a natural, in which case play
    /// begins. Insurance resolves here, by name: it pays on any dealer
    /// natural and is forfeited otherwise.
    #[allowed_phase(SideBets)]
    pub fn resolve_naturals(&mut self) -> Result<Outcome, GameError> {
        let player_natural = self.player.is_natural()?;
        let dealer_natural = self.dealer.is_natural()?;

        if dealer_natural {
            self.ledger.resolve_insurance();
            self.phase = RoundPhase::Settled;
            if player_natural {
                self.ledger.return_stake();
                log::debug!("both naturals, push");
                return Ok(Outcome::Push);
            }
            log::debug!("dealer natural, loss");
            return Ok(Outcome::Loss);
        }

        self.ledger.forfeit_insurance();
        if player_natural {
            self.ledger.payout_win();
            self.phase = RoundPhase::Settled;
            log::debug!("player natural, win");
            return Ok(Outcome::Win);
        }
        self.phase = RoundPhase::Play;
        Ok(Outcome::Undecided)
    }

    /// One more card for the player. Reports nothing; re-query
    /// `player_count`/`player_is_bust` and settle with `stand`.
    #[allowed_phase(Play)]
    pub fn hit(&mut self) -> Result<(), GameError> {
        self.player.hit(&mut self.pile);
        Ok(())
    }

    /// Doubles the stake for exactly one more card, then stands. The extra
    /// debit is checked before any card is dealt; on insufficient funds
    /// the round is left exactly as it was.
    #[allowed_phase(Play)]
    pub fn double_down(&mut self) -> Result<Outcome, GameError> {
        if !self.ledger.double_down() {
            return Err(GameError::InsufficientFunds {
                balance: self.ledger.balance(),
                amount: self.ledger.bet_amount(),
            });
        }
        self.player.hit(&mut self.pile);
        Ok(self.settle())
    }

    /// Ends the player's turn, plays the dealer out, and settles the bet.
    #[allowed_phase(Play)]
    pub fn stand(&mut self) -> Result<Outcome, GameError> {
        Ok(self.settle())
    }

    /// Splitting is not supported at this table.
    pub fn check_split(&self) -> Result<bool, GameError> {
        Err(GameError::Unsupported("split"))
    }

    /// Splitting is not supported at this table.
    pub fn split(&mut self) -> Result<(), GameError> {
        Err(GameError::Unsupported("split"))
    }

    fn settle(&mut self) -> Outcome {
        self.phase = RoundPhase::Settled;
        if self.player.is_bust() {
            self.ledger.forfeit_bet();
            log::debug!("player bust on {}", self.player.count());
            return Outcome::Loss;
        }

        self.dealer.play(&mut self.pile);
        if self.dealer.is_bust() {
            self.ledger.payout_win();
            log::debug!("dealer bust on {}", self.dealer.count());
            return Outcome::Win;
        }

        let player_count = self.player.count();
        let dealer_count = self.dealer.count();
        log::debug!("stand: player {} vs dealer {}", player_count, dealer_count);
        match player_count.cmp(&dealer_count) {
            std::cmp::Ordering::Equal => {
                self.ledger.return_stake();
                Outcome::Push
            }
            std::cmp::Ordering::Greater => {
                self.ledger.payout_win();
                Outcome::Win
            }
            std::cmp::Ordering::Less => {
                self.ledger.forfeit_bet();
                Outcome::Loss
            }
        }
    }
}
