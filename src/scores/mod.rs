//! Player scores.
//!
//! [`legacy`] is the untyped module the lesson imports, defects and all.
//! [`report_player_scores`] is the same aggregation behind a typed report.

pub mod legacy;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ScoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hp: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, hp: i64) -> Self {
        Self {
            name: name.into(),
            hp,
        }
    }

    pub fn congratulate(&self) -> String {
        congratulation(&self.name, &self.hp)
    }
}

/// The roster used throughout the lesson.
pub fn sample_roster() -> Vec<Player> {
    vec![
        Player::new("Lach", 7),
        Player::new("Natalie", 14),
        Player::new("Ben", 10),
        Player::new("Eli", 8),
    ]
}

/// Field names match what callers of the untyped module expect to read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub average_hp: f64,
    pub top_player: Player,
    pub total_hp: i64,
}

impl ScoreReport {
    pub fn congratulate(&self) -> String {
        self.top_player.congratulate()
    }
}

/// Totals, averages, and picks the player with the most hit points.
///
/// Ties go to the earliest player.
pub fn report_player_scores(players: &[Player]) -> Result<ScoreReport, ScoreError> {
    let top_player = players
        .iter()
        .reduce(|top, player| if player.hp > top.hp { player } else { top })
        .ok_or(ScoreError::EmptyRoster)?;
    let total_hp = players
        .iter()
        .try_fold(0i64, |total, player| total.checked_add(player.hp))
        .ok_or(ScoreError::HpOverflow)?;
    let average_hp = total_hp as f64 / players.len() as f64;

    debug!(players = players.len(), total_hp, "scored roster");
    Ok(ScoreReport {
        average_hp,
        top_player: top_player.clone(),
        total_hp,
    })
}

/// Congratulates whatever was handed over as a player.
///
/// Fields are looked up by key and anything missing prints as `undefined`,
/// so a value of the wrong shape produces a wrong message instead of an error.
/// A field explicitly set to `null` also prints as `undefined`.
pub fn congratulate_player(player: &Value) -> String {
    congratulation(&Field(&player["name"]), &Field(&player["hp"]))
}

fn congratulation(name: &dyn fmt::Display, hp: &dyn fmt::Display) -> String {
    format!("Great work, {name}! You reached {hp} hit points.")
}

struct Field<'a>(&'a Value);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("undefined"),
            Value::String(s) => f.write_str(s),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
                write!(f, "{}", self.0)
            }
        }
    }
}

/// Something wrong with a report, compared to the shape callers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDefect {
    MisspelledAverage,
    MisspelledTopPlayer,
    TopPlayerNotAPlayer,
}

impl fmt::Display for ReportDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDefect::MisspelledAverage => f.write_str("no `averageHp` field"),
            ReportDefect::MisspelledTopPlayer => f.write_str("no `topPlayer` field"),
            ReportDefect::TopPlayerNotAPlayer => {
                f.write_str("top player value is not a {name, hp} record")
            }
        }
    }
}

/// Lists every way `report` differs from a [`ScoreReport`].
///
/// The top player check looks at `topPlayer`, or at `topPlayr` when the
/// correctly spelled field is missing.
pub fn audit_report(report: &Value) -> Vec<ReportDefect> {
    let mut defects = Vec::new();

    if report.get("averageHp").is_none() {
        defects.push(ReportDefect::MisspelledAverage);
    }

    let top = match report.get("topPlayer") {
        Some(top) => Some(top),
        None => {
            defects.push(ReportDefect::MisspelledTopPlayer);
            report.get("topPlayr")
        }
    };

    let is_player = top.is_some_and(|top| Player::deserialize(top).is_ok());
    if !is_player {
        defects.push(ReportDefect::TopPlayerNotAPlayer);
    }

    defects
}
