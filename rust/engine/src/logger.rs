use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::payout::Payout;

/// Outcome of one finished round: every bill paid out and the money each
/// seat held afterwards. Serialized one per line for round history files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Game identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed the game was played with (enables deterministic replay)
    pub seed: Option<u64>,
    /// Zero-based round number
    pub round: i32,
    pub player_count: usize,
    /// Bills paid this round, in payout order
    pub payouts: Vec<Payout>,
    /// Money held by each seat after the payout, indexed by seat
    pub money: Vec<u32>,
    /// Money held by the neutral pool after the payout
    pub neutral_money: u32,
    /// Timestamp when the round was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RoundRecord {
    pub fn from_state(
        game_id: impl Into<String>,
        seed: Option<u64>,
        state: &GameState,
        payouts: Vec<Payout>,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            seed,
            round: state.round_number,
            player_count: state.player_count,
            payouts,
            money: state.players.iter().map(|p| p.money()).collect(),
            neutral_money: state.neutral_player.money(),
            ts: None,
            meta: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
