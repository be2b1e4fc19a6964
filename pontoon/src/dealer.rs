use crate::draw::{Rank, RankPile};
use crate::error::GameError;
use crate::hand::Hand;

/// The house side of a round: a two-card hand plus the fixed table policy.
/// The second card is the hole card; nothing here hides it mechanically,
/// callers simply must not show it before settlement.
#[derive(Debug, Clone)]
pub struct DealerHand {
    hand: Hand,
}

impl DealerHand {
    pub fn deal(pile: &mut RankPile) -> DealerHand {
        DealerHand {
            hand: Hand::deal(2, pile),
        }
    }

    /// The face-up card, the only one the player sees during play.
    pub fn up_card(&self) -> Rank {
        self.hand.ranks()[0]
    }

    /// Insurance is on the table exactly when the upcard is an Ace.
    pub fn offers_insurance(&self) -> bool {
        self.up_card().is_ace()
    }

    /// Plays out the fixed policy: hit until the count reaches 17, bust or
    /// not. Naturals are not special-cased here; check `is_natural` first
    /// when that distinction matters.
    pub fn play(&mut self, pile: &mut RankPile) {
        while self.hand.count() < 17 {
            self.hand.hit(pile);
        }
        log::trace!("dealer stands on {}", self.hand.count());
    }

    pub fn count(&self) -> u16 {
        self.hand.count()
    }

    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    pub fn is_natural(&self) -> Result<bool, GameError> {
        self.hand.is_natural()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}
