use std::io::{self, Write};

use pontoon::{GameError, Ledger, Outcome, RankPile, Round, Rule};
use pontoon_drivers::ConfigGame;
use rand::thread_rng;

/// Runs rounds against one ledger until the player quits, the funds run
/// out, or the configured round cap is reached.
pub fn play_session(rule: &Rule, config: &ConfigGame) -> Result<(), String> {
    let mut ledger = Ledger::from_rule(rule);
    let mut rounds_played = 0u64;

    println!(
        "sitting down with {} (bet {}, wins pay {})",
        ledger.balance(),
        ledger.bet_amount(),
        ledger.payout_ratio()
    );

    while ledger.balance() >= ledger.bet_amount() {
        if config.max_rounds > 0 && rounds_played == config.max_rounds {
            println!("round cap reached");
            break;
        }
        rounds_played += 1;

        let outcome = play_one_round(rule, &mut ledger).map_err(|e| e.to_string())?;
        log::info!("round {} ended in a {}", rounds_played, outcome);
        println!("balance: {}", ledger.balance());
        println!();

        if ledger.balance() >= ledger.bet_amount() && prompt("deal again? [y/n]") != "y" {
            break;
        }
    }

    println!(
        "leaving the table after {} rounds with {}",
        rounds_played,
        ledger.balance()
    );
    Ok(())
}

fn play_one_round(rule: &Rule, ledger: &mut Ledger) -> Result<Outcome, GameError> {
    let mut rng = thread_rng();
    let mut round = Round::deal(ledger, RankPile::new());
    round.place_bet()?;

    println!(
        "your hand:    {}  ({})",
        round.player_hand().render(&mut rng),
        round.player_count()
    );
    println!("dealer shows: {}", round.dealer_up_card());

    if round.dealer_offers_insurance() {
        if round.check_even_money()? {
            if prompt("take even money? [y/n]") == "y" {
                let paid = round.take_even_money()?;
                println!("even money pays {}", paid);
                return Ok(Outcome::Win);
            }
        } else if prompt("insurance? [y/n]") == "y" {
            match round.insure() {
                Ok(()) => println!("insured for {}", rule.bet_amount / 2),
                Err(GameError::InsufficientFunds { .. }) => {
                    println!("not enough left for insurance")
                }
                Err(e) => return Err(e),
            }
        }
    }

    match round.resolve_naturals()? {
        Outcome::Undecided => {}
        outcome => {
            println!(
                "dealer had:   {}  ({})",
                round.dealer_hand().render(&mut rng),
                round.dealer_count()
            );
            println!("result: {}", outcome);
            return Ok(outcome);
        }
    }

    let outcome = loop {
        match prompt("(h)it, (s)tand, or (d)ouble?").as_str() {
            "h" => {
                round.hit()?;
                println!(
                    "your hand:    {}  ({})",
                    round.player_hand().render(&mut rng),
                    round.player_count()
                );
                if round.player_is_bust() {
                    println!("bust!");
                    break round.stand()?;
                }
            }
            // Empty input (including EOF) stands rather than looping.
            "s" | "" => break round.stand()?,
            "d" => match round.double_down() {
                Ok(outcome) => {
                    println!(
                        "your hand:    {}  ({})",
                        round.player_hand().render(&mut rng),
                        round.player_count()
                    );
                    break outcome;
                }
                Err(GameError::InsufficientFunds { .. }) => {
                    println!("not enough left to double down")
                }
                Err(e) => return Err(e),
            },
            _ => println!("type h, s, or d"),
        }
    };

    println!(
        "dealer ends:  {}  ({})",
        round.dealer_hand().render(&mut rng),
        round.dealer_count()
    );
    println!("result: {}", outcome);
    Ok(outcome)
}

fn prompt(question: &str) -> String {
    print!("{} ", question);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}
