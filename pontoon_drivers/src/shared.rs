use pontoon;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rule: ConfigRule,
    pub game: ConfigGame,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRule {
    pub starting_balance: u32,
    pub bet_amount: u32,
    /// Win payout as a ratio string, e.g. "3:2" or "6:5".
    pub payout_ratio: String,
}

impl TryInto<pontoon::Rule> for ConfigRule {
    type Error = pontoon::GameError;

    fn try_into(self) -> Result<pontoon::Rule, Self::Error> {
        let rule = pontoon::Rule {
            starting_balance: self.starting_balance,
            bet_amount: self.bet_amount,
            payout_ratio: self.payout_ratio.parse()?,
        };

        Ok(rule)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigGame {
    /// Hard cap on rounds per session; 0 means play until the funds or the
    /// player give out.
    pub max_rounds: u64,
}

/// Reads the content of a given config file and parses it to a Config.
///
/// Panics if any error occurs.
pub fn parse_config_from_file(filename: &str) -> Config {
    let file_content = fs::read_to_string(filename).unwrap();
    serde_yaml::from_str(&file_content).unwrap()
}
