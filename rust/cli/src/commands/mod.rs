//! Command handler modules for the vegas CLI.
//!
//! Each command lives in its own file with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never `println!`
//! - Settings arrive already merged: flag, then environment, then config file,
//!   then default

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rng;
pub mod sim;
pub mod verify;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use verify::handle_verify_command;

use vegas_ai::{create_ai, DiceStrategy, AI_NAMES};

use crate::error::CliError;

pub(crate) fn strategy(name: &str) -> Result<Box<dyn DiceStrategy>, CliError> {
    create_ai(name).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown ai '{}' (expected one of {})",
            name,
            AI_NAMES.join(", ")
        ))
    })
}
