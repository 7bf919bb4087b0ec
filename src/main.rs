//! Terminal Pig against the computer.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{error, info};
use pico_args::Arguments;
use pigrs::{ComputerStrategy, ConsoleError, Console, Game, GameOptions, PlayError};

const HELP: &str = "\
Play Pig against the computer

USAGE:
  pig [OPTIONS]

OPTIONS:
  --seed       N           Random seed  [default: env PIG_SEED or current time]
  --target     N           Score that ends a round  [default: 100]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  PIG_SEED                 Random seed
  RUST_LOG                 Log filter for stderr diagnostics
";

struct Args {
    seed: u64,
    target: u32,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let seed = match pargs.opt_value_from_str("--seed")? {
        Some(seed) => seed,
        None => std::env::var("PIG_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs()
            }),
    };
    let target = pargs.opt_value_from_str("--target")?.unwrap_or(100);
    if target == 0 {
        return Err(pico_args::Error::Utf8ArgumentParsingFailed {
            value: "0".to_string(),
            cause: "--target must be at least 1".to_string(),
        });
    }

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(Args { seed, target })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };
    info!("seed {} target {}", args.seed, args.target);

    let options = GameOptions::default().with_target_score(args.target);
    let mut game = Game::new(options, args.seed);
    let mut computer = ComputerStrategy::new(args.seed.wrapping_add(1));
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match console.run(&mut game, &mut computer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PlayError::Console(ConsoleError::Closed)) => {
            info!("input closed");
            ExitCode::SUCCESS
        }
        Err(err) if err.is_implausible() => {
            error!("{err}");
            println!("You have accomplished the implausible.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
