//! Command-line surface: the top-level parser and its subcommands.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vegas", version, about = "Casino dice bidding game")]
pub struct VegasCli {
    /// Log engine events down to debug level (RUST_LOG still wins when set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game against AI seats, or take seat 0 yourself
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=5))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy for the computer seats
        #[arg(long)]
        ai: Option<String>,
    },
    /// Play many AI-only games and report results
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=5))]
        players: Option<u8>,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        /// Append one JSON line per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Play AI-only games and check every rule at each turn boundary
    Verify {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=5))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal the first round and show the table
    Deal {
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=5))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a sample of dice and a shuffled bank for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

/// Who sits in seat 0 for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Seat 0 reads faces from stdin.
    Human,
    /// Every seat is played by the strategy.
    Ai,
}

impl Vs {
    /// # Examples
    ///
    /// ```
    /// # use vegas_cli::Vs;
    /// assert_eq!(Vs::Human.as_str(), "human");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
