//! Gross/net standings computed from per-hole scores.
//!
//! The engine folds one tournament's deduplicated score list into one entry
//! per scoring player, then ranks by gross or net total. Net subtracts a
//! handicap allowance prorated by the fraction of the 18-hole round
//! completed:
//!
//! ```text
//! net = gross - round(handicap * thru / 18)
//! ```
//!
//! The allowance rounds half away from zero ([`f64::round`]); with the
//! non-negative handicap invariant this agrees with the round-to-nearest
//! behavior the scoring rules were written against.

use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::records::{
    players::Player,
    scores::{SENTINEL_HOLE, Score},
};

/// The round is always 18 holes for proration, even on partial courses.
pub const ROUND_HOLES: u32 = 18;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    pub handicap: f64,
    /// Summed strokes over scored holes.
    pub gross: i64,
    /// Holes completed.
    pub thru: u32,
    pub net: i64,
    /// Strokes per hole number.
    pub scores: BTreeMap<u32, u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Gross,
    Net,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

pub fn net_score(gross: i64, handicap: f64, thru: u32) -> i64 {
    let allowance =
        (handicap * f64::from(thru) / f64::from(ROUND_HOLES)).round();
    gross - allowance as i64
}

/// Fold scores into unranked entries, in roster order.
///
/// Sentinel (hole 0) rows are dropped before anything else, so a player whose
/// only rows are sentinels gets no entry at all. Players without any score
/// row are likewise absent; an empty score list yields an empty board.
pub fn compute(players: &[Player], scores: &[Score]) -> Vec<LeaderboardEntry> {
    let scored: Vec<&Score> =
        scores.iter().filter(|s| s.hole != SENTINEL_HOLE).collect();
    let scoring_players: HashSet<&str> =
        scored.iter().map(|s| s.player_id.as_str()).collect();

    let mut entries: IndexMap<&str, LeaderboardEntry> = players
        .iter()
        .filter(|p| scoring_players.contains(p.id.as_str()))
        .map(|p| {
            (
                p.id.as_str(),
                LeaderboardEntry {
                    player_id: p.id.clone(),
                    player_name: p.name.clone(),
                    handicap: p.handicap,
                    gross: 0,
                    thru: 0,
                    net: 0,
                    scores: BTreeMap::new(),
                },
            )
        })
        .collect();

    for score in &scored {
        // Scores for players missing from the roster have nowhere to go.
        if let Some(entry) = entries.get_mut(score.player_id.as_str()) {
            entry.scores.insert(score.hole, score.strokes);
            entry.gross += i64::from(score.strokes);
            entry.thru += 1;
        }
    }

    for entry in entries.values_mut() {
        entry.net = net_score(entry.gross, entry.handicap, entry.thru);
    }

    entries.into_values().collect()
}

/// Stable sort by the chosen total; tied entries keep the order `compute`
/// produced (there is deliberately no secondary key).
pub fn rank(
    mut entries: Vec<LeaderboardEntry>,
    sort_by: SortBy,
    order: SortOrder,
) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        let ord = match sort_by {
            SortBy::Gross => a.gross.cmp(&b.gross),
            SortBy::Net => a.net.cmp(&b.net),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, handicap: f64) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {id}"),
            line_user_id: String::new(),
            handicap,
            team: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }

    fn score(pid: &str, hole: u32, strokes: u32) -> Score {
        Score {
            tournament_id: "t1".to_string(),
            player_id: pid.to_string(),
            hole,
            strokes,
            par: 4,
        }
    }

    #[test]
    fn net_prorates_the_handicap_by_holes_played() {
        assert_eq!(net_score(80, 18.0, 9), 71);
        assert_eq!(net_score(90, 18.0, 18), 72);
        assert_eq!(net_score(42, 10.0, 9), 37);
        assert_eq!(net_score(50, 0.0, 9), 50);
    }

    #[test]
    fn half_allowances_round_away_from_zero() {
        // 9 * 9/18 = 4.5 -> 5
        assert_eq!(net_score(40, 9.0, 9), 35);
        // 3 * 3/18 = 0.5 -> 1
        assert_eq!(net_score(12, 3.0, 3), 11);
    }

    #[test]
    fn no_scores_means_an_empty_board() {
        let players = vec![player("p1", 5.0)];
        assert!(compute(&players, &[]).is_empty());
    }

    #[test]
    fn sentinel_rows_never_count_and_never_qualify() {
        let players = vec![player("p1", 0.0), player("p2", 0.0)];
        let scores = vec![
            score("p1", 0, 1),
            score("p1", 1, 4),
            score("p2", 0, 1), // hole-0 only: excluded entirely
        ];

        let board = compute(&players, &scores);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].player_id, "p1");
        assert_eq!(board[0].gross, 4);
        assert_eq!(board[0].thru, 1);
        assert!(!board[0].scores.contains_key(&0));
    }

    #[test]
    fn folds_gross_thru_and_breakdown() {
        let players = vec![player("p1", 10.0), player("p2", 0.0)];
        let scores: Vec<Score> =
            (1..=9).map(|hole| score("p1", hole, hole % 2 + 4)).collect();

        let board = compute(&players, &scores);
        assert_eq!(board.len(), 1);
        let entry = &board[0];
        assert_eq!(entry.thru, 9);
        assert_eq!(entry.gross, 41);
        assert_eq!(entry.net, 36); // 41 - round(10 * 9/18)
        assert_eq!(entry.scores.len(), 9);
        assert_eq!(entry.scores[&1], 5);
    }

    #[test]
    fn rosterless_scores_are_ignored() {
        let players = vec![player("p1", 0.0)];
        let scores = vec![score("p1", 1, 4), score("ghost", 1, 4)];
        let board = compute(&players, &scores);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].gross, 4);
    }

    #[test]
    fn toggling_order_reverses_the_sequence() {
        let players =
            vec![player("p1", 0.0), player("p2", 0.0), player("p3", 0.0)];
        let scores = vec![
            score("p1", 1, 5),
            score("p2", 1, 3),
            score("p3", 1, 4),
        ];

        let board = compute(&players, &scores);
        let asc = rank(board.clone(), SortBy::Gross, SortOrder::Asc);
        let desc = rank(board, SortBy::Gross, SortOrder::Desc);

        let ids =
            |b: &[LeaderboardEntry]| -> Vec<String> { b.iter().map(|e| e.player_id.clone()).collect() };
        assert_eq!(ids(&asc), ["p2", "p3", "p1"]);
        let mut reversed = asc;
        reversed.reverse();
        assert_eq!(ids(&reversed), ids(&desc));
    }

    #[test]
    fn net_ranking_uses_the_net_total() {
        let players = vec![player("p1", 18.0), player("p2", 0.0)];
        let scores = vec![score("p1", 1, 6), score("p2", 1, 5)];
        // gross: p2 (5) < p1 (6); net: p1's allowance is round(18 * 1/18) = 1
        // so both net 5, and the tie keeps roster order.
        let board = rank(
            compute(&players, &scores),
            SortBy::Net,
            SortOrder::Asc,
        );
        assert_eq!(board[0].player_id, "p1");
        assert_eq!(board[0].net, board[1].net);
    }
}
