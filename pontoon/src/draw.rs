use std::collections::VecDeque;
use std::fmt;

use rand::{thread_rng, Rng};
use strum_macros::EnumIter;

/// Scoring value for each face value. Ace scores 1 until the soft-ace
/// promotion in `Hand::count`; every court card (and the fourteenth rank
/// the uniform draw produces) caps at 10.
static FACE_VALUE_TO_SCORE: [u16; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 10];

/// Display-only suit. Suits never influence scoring; they exist so a hand
/// can be rendered the way a table would look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        };
        write!(f, "{}", symbol)
    }
}

/// A drawn card rank. Face values run 1..=14: Ace is 1, courts are 11..13,
/// and 14 is the extra ten-value rank the uniform draw yields. Immutable
/// once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub face_value: u8,
}

impl Rank {
    pub fn score_value(&self) -> u16 {
        FACE_VALUE_TO_SCORE[(self.face_value - 1) as usize]
    }

    pub fn is_ace(&self) -> bool {
        self.face_value == 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.face_value {
            1 => 'A',
            2 => '2',
            3 => '3',
            4 => '4',
            5 => '5',
            6 => '6',
            7 => '7',
            8 => '8',
            9 => '9',
            10 | 14 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => panic!("Invalid card face value!"),
        };
        write!(f, "{}", value)
    }
}

/// The rank source every hand draws from. Draws are uniform over 1..=14;
/// ranks queued with `with_firsts` are dealt first, in order, which is how
/// tests and replays pin down a round.
#[derive(Debug, Clone, Default)]
pub struct RankPile {
    queued: VecDeque<u8>,
}

impl RankPile {
    pub fn new() -> RankPile {
        RankPile {
            queued: VecDeque::new(),
        }
    }

    /// Creates a pile that deals the given face values first. Panics if any
    /// of them is outside 1..=14.
    pub fn with_firsts(firsts: &[u8]) -> RankPile {
        for &face_value in firsts {
            if face_value == 0 || face_value > 14 {
                panic!("Invalid face value {}! It must be in [1, 14]", face_value);
            }
        }
        RankPile {
            queued: firsts.iter().copied().collect(),
        }
    }

    /// Deals one rank. Queued ranks go first; after that every draw is an
    /// independent uniform pick.
    pub fn draw(&mut self) -> Rank {
        let face_value = match self.queued.pop_front() {
            Some(face_value) => face_value,
            None => thread_rng().gen_range(1..=14),
        };
        Rank { face_value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_ranks_come_out_in_order() {
        let mut pile = RankPile::with_firsts(&[1, 13, 7]);
        assert_eq!(pile.draw(), Rank { face_value: 1 });
        assert_eq!(pile.draw(), Rank { face_value: 13 });
        assert_eq!(pile.draw(), Rank { face_value: 7 });
    }

    #[test]
    fn draws_stay_in_range_after_script_runs_out() {
        let mut pile = RankPile::with_firsts(&[5]);
        pile.draw();
        for _ in 0..200 {
            let rank = pile.draw();
            assert!(rank.face_value >= 1 && rank.face_value <= 14);
        }
    }

    #[test]
    #[should_panic]
    fn invalid_firsts_should_panic() {
        RankPile::with_firsts(&[3, 15]);
    }

    #[test]
    fn court_cards_score_ten() {
        for face_value in 10..=14 {
            assert_eq!(Rank { face_value }.score_value(), 10);
        }
        assert_eq!(Rank { face_value: 1 }.score_value(), 1);
        assert_eq!(Rank { face_value: 9 }.score_value(), 9);
    }

    #[test]
    fn rank_symbols() {
        let symbols: Vec<String> = (1..=14)
            .map(|face_value| Rank { face_value }.to_string())
            .collect();
        assert_eq!(
            symbols,
            ["A", "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K", "T"]
        );
    }
}
