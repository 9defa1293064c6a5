mod console;
mod render;
mod session;
mod table;

use clap::Parser;
use console::Console;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use render::Labels;
use session::{format_amount, parse_amount, Session};
use std::io;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "blackjack-table", about = "Play blackjack against the dealer in the terminal")]
struct Cli {
    /// Starting wallet in dollars
    #[arg(long, env = "BLACKJACK_WALLET", default_value = "5.00")]
    wallet: String,

    /// Seed the shuffle for a reproducible session
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Print cards as `A-H` instead of `Ace of Hearts`
    #[arg(long)]
    short_cards: bool,

    /// Print each settled round as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxErr> {
    let wallet = parse_amount(&cli.wallet)?;
    let mut session = Session::new(wallet);

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("Seeded shuffle: {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let labels = if cli.short_cards {
        Labels::Short
    } else {
        Labels::Long
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), labels);

    log::info!("Sitting down with {}", format_amount(wallet));
    table::play_session(&mut session, &mut console, &mut rng, cli.json)?;
    log::info!(
        "Left the table after {} rounds with {}",
        session.rounds_played(),
        format_amount(session.wallet())
    );
    Ok(())
}
