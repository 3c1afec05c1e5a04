//! Shared runner for the CLI integration tests.
//!
//! `run_cli` drives [`vegas_cli::run`] in-process and captures both
//! streams. Tests that touch the process environment must hold
//! [`ENV_LOCK`] for their whole body.

use std::sync::Mutex;

#[allow(dead_code)]
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv: Vec<String> = std::iter::once("vegas".to_string())
        .chain(args.iter().map(|s| s.to_string()))
        .collect();
    let code = vegas_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code: code,
        stdout: String::from_utf8_lossy(&out).to_string(),
        stderr: String::from_utf8_lossy(&err).to_string(),
    }
}

/// Settings the CLI reads from the environment.
#[allow(dead_code)]
pub const VEGAS_VARS: [&str; 5] = [
    "VEGAS_CONFIG",
    "VEGAS_PLAYERS",
    "VEGAS_SEED",
    "VEGAS_AI",
    "VEGAS_GAMES",
];

#[allow(dead_code)]
pub fn clear_vegas_env() {
    for key in VEGAS_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
