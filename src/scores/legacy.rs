//! The untyped score module, kept exactly as broken as it shipped.
//!
//! There are at least three issues in here. [`super::audit_report`] lists
//! them; the tests below pin them down so nobody fixes them by accident.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ScoreError;
use crate::scores::Player;

/// Reports on `players` as a loosely shaped object.
///
/// The keys are `avrageHp`, `topPlayr` and `totalHp`, and `topPlayr` holds the
/// highest hit-point number rather than the player who reached it.
pub fn report_player_scores(players: &[Player]) -> Result<Value, ScoreError> {
    if players.is_empty() {
        return Err(ScoreError::EmptyRoster);
    }

    let total_hp = players
        .iter()
        .map(|player| player.hp)
        .try_fold(0i64, |hp_total, hp| hp_total.checked_add(hp))
        .ok_or(ScoreError::HpOverflow)?;

    let average_hp = total_hp as f64 / players.len() as f64;

    let top_player = players
        .iter()
        .map(|player| player.hp)
        .reduce(|previous_top_hp, hp| {
            if hp > previous_top_hp {
                hp
            } else {
                previous_top_hp
            }
        })
        .ok_or(ScoreError::EmptyRoster)?;

    debug!(players = players.len(), total_hp, "scored roster");
    warn!("legacy score report returns a hit-point number as the top player");

    Ok(json!({
        "avrageHp": average_hp,
        "topPlayr": top_player,
        "totalHp": total_hp,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::{audit_report, congratulate_player, sample_roster, ReportDefect};

    fn report() -> Value {
        report_player_scores(&sample_roster()).unwrap()
    }

    #[test]
    fn total_is_correct() {
        assert_eq!(report()["totalHp"], 39);
    }

    #[test]
    fn average_is_correct_under_a_misspelled_key() {
        let report = report();
        assert_eq!(report["avrageHp"], 9.75);
        assert!(report.get("averageHp").is_none());
    }

    #[test]
    fn top_player_is_a_number() {
        let report = report();
        assert_eq!(report["topPlayr"], 14);
        assert!(report["topPlayr"].is_number());
        assert!(report.get("topPlayer").is_none());
    }

    #[test]
    fn reading_the_top_player_is_silently_undefined() {
        let report = report();
        let expected = "Great work, undefined! You reached undefined hit points.";
        assert_eq!(congratulate_player(&report["topPlayer"]), expected);
        assert_eq!(congratulate_player(&report["topPlayr"]), expected);
    }

    #[test]
    fn audit_finds_all_three_defects() {
        assert_eq!(
            audit_report(&report()),
            vec![
                ReportDefect::MisspelledAverage,
                ReportDefect::MisspelledTopPlayer,
                ReportDefect::TopPlayerNotAPlayer,
            ]
        );
    }

    #[test]
    fn printed_report() {
        assert_eq!(
            report().to_string(),
            r#"{"avrageHp":9.75,"topPlayr":14,"totalHp":39}"#
        );
    }

    #[test]
    fn empty_roster_is_an_error() {
        assert_eq!(report_player_scores(&[]), Err(ScoreError::EmptyRoster));
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let players = vec![Player::new("A", i64::MAX), Player::new("B", 1)];
        assert_eq!(report_player_scores(&players), Err(ScoreError::HpOverflow));
    }
}
