//! CLI frontend for the Würfelbecher dice roller.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::roll::Keep;

#[derive(Parser)]
#[command(
    name = "wb",
    about = "Würfelbecher — a dice roller for tabletop games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice expression (e.g. "1d20+2d6+3")
    Roll {
        /// Dice expression; unrecognized fragments are ignored
        expression: String,

        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Roll 1d20 with advantage (two dice, keep the higher)
    Adv {
        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Roll 1d20 with disadvantage (two dice, keep the lower)
    Dis {
        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the standard polyhedral dice
    Dice,

    /// Start an interactive dice-rolling session
    Play {
        /// RNG seed for reproducible sessions (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { expression, seed } => commands::roll::run(&expression, seed),
        Commands::Adv { seed } => commands::roll::run_keep_one(Keep::Higher, seed),
        Commands::Dis { seed } => commands::roll::run_keep_one(Keep::Lower, seed),
        Commands::Dice => commands::roll::run_dice_list(),
        Commands::Play { seed } => commands::play::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
