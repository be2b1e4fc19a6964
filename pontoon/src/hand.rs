use rand::seq::IteratorRandom;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::draw::{Rank, RankPile, Suit};
use crate::error::GameError;

/// One party's cards, in draw order. Draw order only matters for display;
/// scoring looks at the multiset of ranks.
#[derive(Debug, Clone)]
pub struct Hand {
    ranks: Vec<Rank>,
}

impl Hand {
    /// Deals a fresh hand of `initial_draws` cards. One card for a dealer
    /// hand still waiting on its hole card, two for a standard hand.
    /// Panics if `initial_draws` is zero; a hand is never empty.
    pub fn deal(initial_draws: usize, pile: &mut RankPile) -> Hand {
        if initial_draws == 0 {
            panic!("A hand must be dealt at least one card!");
        }
        let mut ranks = Vec::with_capacity(initial_draws + 1);
        for _ in 0..initial_draws {
            ranks.push(pile.draw());
        }
        Hand { ranks }
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Blackjack count with soft-ace promotion: sum the capped scoring
    /// values, then upgrade aces from 1 to 11 one at a time while the
    /// total stays at 11 or below.
    pub fn count(&self) -> u16 {
        let mut count = 0;
        let mut aces = 0;
        for rank in &self.ranks {
            if rank.is_ace() {
                aces += 1;
            }
            count += rank.score_value();
        }
        while count <= 11 && aces > 0 {
            count += 10;
            aces -= 1;
        }
        count
    }

    pub fn is_bust(&self) -> bool {
        self.count() > 21
    }

    /// Takes one more card. Does not report bust; callers re-query
    /// `count`/`is_bust` afterwards.
    pub fn hit(&mut self, pile: &mut RankPile) {
        self.ranks.push(pile.draw());
    }

    /// Whether the hand is a natural blackjack. Only meaningful on the two
    /// dealt cards, so any other length is a precondition error rather
    /// than a silent `false`.
    pub fn is_natural(&self) -> Result<bool, GameError> {
        if self.ranks.len() != 2 {
            return Err(GameError::Precondition(format!(
                "natural check requires exactly 2 cards, hand has {}",
                self.ranks.len()
            )));
        }
        Ok(self.ranks[0].score_value() + self.ranks[1].score_value() == 21)
    }

    /// Renders the hand with a random suit in front of each rank, e.g.
    /// "♠A ♥T". Suits are redrawn on every call, so render once per
    /// presentation and reuse the string.
    pub fn render<R: Rng>(&self, rng: &mut R) -> String {
        self.ranks
            .iter()
            .map(|rank| {
                let suit = Suit::iter().choose(rng).unwrap();
                format!("{}{}", suit, rank)
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hand_of(face_values: &[u8]) -> Hand {
        let mut pile = RankPile::with_firsts(face_values);
        Hand::deal(face_values.len(), &mut pile)
    }

    #[test]
    fn count_without_aces_is_the_capped_sum() {
        assert_eq!(hand_of(&[2, 3, 4]).count(), 9);
        assert_eq!(hand_of(&[10, 12]).count(), 20);
        assert_eq!(hand_of(&[14, 9]).count(), 19);
    }

    #[test]
    fn two_aces_count_twelve() {
        assert_eq!(hand_of(&[1, 1]).count(), 12);
    }

    #[test]
    fn ace_and_ten_is_a_natural_twenty_one() {
        let hand = hand_of(&[1, 13]);
        assert_eq!(hand.count(), 21);
        assert_eq!(hand.is_natural(), Ok(true));
    }

    #[test]
    fn only_one_ace_gets_promoted() {
        assert_eq!(hand_of(&[1, 1, 9]).count(), 21);
    }

    #[test]
    fn twenty_one_in_three_cards_is_not_natural() {
        let hand = hand_of(&[7, 7, 7]);
        assert_eq!(hand.count(), 21);
        assert!(matches!(
            hand.is_natural(),
            Err(GameError::Precondition(_))
        ));
    }

    #[test]
    fn bust_over_twenty_one() {
        assert!(hand_of(&[10, 10, 2]).is_bust());
        assert!(!hand_of(&[10, 10, 1]).is_bust());
    }

    #[test]
    fn hit_appends_in_draw_order() {
        let mut pile = RankPile::with_firsts(&[4, 5, 6]);
        let mut hand = Hand::deal(2, &mut pile);
        hand.hit(&mut pile);
        let face_values: Vec<u8> = hand.ranks().iter().map(|r| r.face_value).collect();
        assert_eq!(face_values, [4, 5, 6]);
    }

    #[test]
    fn render_pairs_every_rank_with_a_suit() {
        let hand = hand_of(&[1, 10, 13]);
        let mut rng = StdRng::seed_from_u64(7);
        let rendered = hand.render(&mut rng);
        let cards: Vec<&str> = rendered.split(' ').collect();
        assert_eq!(cards.len(), 3);
        for card in cards {
            let suit = card.chars().next().unwrap();
            assert!(['♠', '♥', '♣', '♦'].contains(&suit));
        }
        assert!(rendered.contains('A'));
        assert!(rendered.contains('T'));
        assert!(rendered.contains('K'));
    }
}
