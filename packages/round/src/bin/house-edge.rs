use blackjack_round::{RoundOutcome, Simulation};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "house-edge",
    about = "Estimate the house edge of the table rules under basic strategy"
)]
struct Args {
    /// Number of rounds to simulate
    #[arg(long, default_value = "100000")]
    rounds: u64,

    /// RNG seed
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Simulate a bankroll that can never double down
    #[arg(long, default_value_t = false)]
    no_double: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let mut simulation = Simulation::new(args.seed);
    if args.no_double {
        simulation = simulation.without_double();
    }

    eprintln!("Configuration:");
    eprintln!("  Rounds:       {}", args.rounds);
    eprintln!("  Seed:         {}", args.seed);
    eprintln!("  Double down:  {}", !args.no_double);
    eprintln!("Simulating...");

    let result = match simulation.run(args.rounds) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode result: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for outcome in RoundOutcome::ALL {
        let count = result.count(outcome);
        if count > 0 {
            println!(
                "{:<20} {:>8}  {:>7.3}%",
                format!("{outcome:?}"),
                count,
                result.frequency(outcome) * 100.0
            );
        }
    }
    println!();
    println!("House edge:     {:+.4}%", result.house_edge * 100.0);
    println!("Player return:  {:+.4}%", result.expected_return * 100.0);

    if result.house_edge > 0.0 {
        println!("Result: House advantage");
    } else {
        println!("Result: Player advantage (negative edge)");
    }
}
