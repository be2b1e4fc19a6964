mod game;

use clap::Parser;
use pontoon_drivers::parse_config_from_file;

const DEFAULT_CONFIG_PATH: &str = "~/.pontoon.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,
}

fn main() {
    env_logger::init();

    let mut args = CommandLineArgs::parse();
    if args.config == DEFAULT_CONFIG_PATH {
        let home_dir = home::home_dir().expect("Cannot find home directory");
        let config_file_path = home_dir.join(".pontoon.yml");
        if !config_file_path.exists() {
            panic!("Config file not exists");
        }
        if config_file_path.is_dir() {
            panic!("This should be a path rather than a directory");
        }
        args.config = String::from(config_file_path.to_str().unwrap());
    }
    let args = args;

    let config = parse_config_from_file(&args.config);
    log::info!("loaded config from {}", args.config);

    let rule: pontoon::Rule = match config.rule.try_into() {
        Ok(rule) => rule,
        Err(e) => {
            eprintln!("invalid rule config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = game::play_session(&rule, &config.game) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
