use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::Rule;

/// A payout multiplier expressed as a ratio, applied to the profit side of
/// a winning bet. There is no sentinel value: a push is the explicit
/// `Ledger::return_stake` operation, never a special ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl PayoutRatio {
    /// Standard blackjack payout.
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    /// Even money.
    pub const EVEN: Self = Self {
        numerator: 1,
        denominator: 1,
    };
    /// Insurance payout.
    pub const TWO_TO_ONE: Self = Self {
        numerator: 2,
        denominator: 1,
    };

    pub fn new(numerator: u32, denominator: u32) -> Result<Self, GameError> {
        if denominator == 0 {
            return Err(GameError::InvalidRatio(format!(
                "{}:{}",
                numerator, denominator
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Profit on a winning stake, rounded down.
    pub fn profit(&self, stake: u32) -> u32 {
        (stake as u64 * self.numerator as u64 / self.denominator as u64) as u32
    }
}

impl fmt::Display for PayoutRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

impl FromStr for PayoutRatio {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = s
            .split_once(':')
            .ok_or_else(|| GameError::InvalidRatio(s.to_string()))?;
        let numerator = numerator
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidRatio(s.to_string()))?;
        let denominator = denominator
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidRatio(s.to_string()))?;
        PayoutRatio::new(numerator, denominator)
    }
}

/// The money side of a session: the balance, the configured stake, and the
/// two one-shot side-bet flags. Every mutation goes through a named
/// operation here; nothing else in the crate touches the balance.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: u32,
    bet_amount: u32,
    payout_ratio: PayoutRatio,
    doubled_down: bool,
    insured: bool,
}

impl Ledger {
    /// A ledger paying the standard 3:2 on wins.
    pub fn new(starting_balance: u32, bet_amount: u32) -> Ledger {
        Ledger::with_payout(starting_balance, bet_amount, PayoutRatio::THREE_TO_TWO)
    }

    pub fn with_payout(starting_balance: u32, bet_amount: u32, payout_ratio: PayoutRatio) -> Ledger {
        Ledger {
            balance: starting_balance,
            bet_amount,
            payout_ratio,
            doubled_down: false,
            insured: false,
        }
    }

    pub fn from_rule(rule: &Rule) -> Ledger {
        Ledger::with_payout(rule.starting_balance, rule.bet_amount, rule.payout_ratio)
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn bet_amount(&self) -> u32 {
        self.bet_amount
    }

    pub fn payout_ratio(&self) -> PayoutRatio {
        self.payout_ratio
    }

    pub fn is_doubled_down(&self) -> bool {
        self.doubled_down
    }

    pub fn is_insured(&self) -> bool {
        self.insured
    }

    /// Debits `amount`. Returns false and leaves the ledger untouched when
    /// the balance cannot cover it; the balance never goes below zero.
    pub fn bet(&mut self, amount: u32) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        log::debug!("bet {} debited, balance {}", amount, self.balance);
        true
    }

    /// Debits the configured main stake.
    pub fn place_main_bet(&mut self) -> bool {
        self.bet(self.bet_amount)
    }

    /// Debits a second stake and arms the double-down flag. The debit is a
    /// precondition: when it fails the flag stays clear and nothing
    /// changes.
    pub fn double_down(&mut self) -> bool {
        if self.doubled_down || !self.bet(self.bet_amount) {
            return false;
        }
        self.doubled_down = true;
        true
    }

    /// Debits half the main stake as the insurance side bet and arms the
    /// insurance flag.
    pub fn insure(&mut self) -> bool {
        if self.insured || !self.bet(self.bet_amount / 2) {
            return false;
        }
        self.insured = true;
        true
    }

    /// Credits the stake plus profit at `ratio`. A doubled-down bet is
    /// paid the same amount a second time, consuming the flag. Returns the
    /// single payout amount.
    pub fn payout(&mut self, ratio: PayoutRatio, stake: u32) -> u32 {
        let paid = stake + ratio.profit(stake);
        self.balance += paid;
        if self.doubled_down {
            self.balance += paid;
            self.doubled_down = false;
        }
        log::debug!("payout {} at {}, balance {}", paid, ratio, self.balance);
        paid
    }

    /// Credits the configured win payout on the main stake.
    pub fn payout_win(&mut self) -> u32 {
        self.payout(self.payout_ratio, self.bet_amount)
    }

    /// Push: the stake comes back with no profit. A doubled-down stake
    /// comes back twice, consuming the flag.
    pub fn return_stake(&mut self) -> u32 {
        let stake = self.bet_amount;
        self.balance += stake;
        if self.doubled_down {
            self.balance += stake;
            self.doubled_down = false;
        }
        log::debug!("stake {} returned, balance {}", stake, self.balance);
        stake
    }

    /// Pays the insurance side bet at 2:1 on half the main stake. One-shot:
    /// the first call consumes the flag, later calls are no-ops returning 0.
    pub fn resolve_insurance(&mut self) -> u32 {
        if !self.insured {
            return 0;
        }
        self.insured = false;
        let stake = self.bet_amount / 2;
        let paid = stake + PayoutRatio::TWO_TO_ONE.profit(stake);
        self.balance += paid;
        log::debug!("insurance pays {}, balance {}", paid, self.balance);
        paid
    }

    /// The insurance side bet lost; the flag is consumed with no credit.
    pub fn forfeit_insurance(&mut self) {
        self.insured = false;
    }

    /// The main bet lost; nothing comes back and the double-down flag is
    /// consumed so the next round starts clean.
    pub fn forfeit_bet(&mut self) {
        self.doubled_down = false;
    }
}
