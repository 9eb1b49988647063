use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    records::{cell, is_blank, num_cell},
    store::{HEADER_OFFSET, RecordStore, Row},
};

const READ_RANGE: &str = "Scores!A2:E";
const WRITE_RANGE: &str = "Scores!A:E";

/// Hole number reserved for "player initialized, no strokes yet" marker rows.
/// Sentinel rows pre-create a player's slot and never count toward totals.
pub const SENTINEL_HOLE: u32 = 0;

/// Columns: tournamentId, playerId, hole, strokes, par. The logical key is
/// (tournament, player, hole); the row store may temporarily hold duplicates
/// for one key, resolved last-write-wins on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub tournament_id: String,
    pub player_id: String,
    pub hole: u32,
    pub strokes: u32,
    #[serde(default)]
    pub par: u32,
}

impl Score {
    fn from_row(row: &[String]) -> Self {
        Self {
            tournament_id: cell(row, 0),
            player_id: cell(row, 1),
            hole: num_cell(row, 2),
            strokes: num_cell(row, 3),
            par: num_cell(row, 4),
        }
    }

    fn to_row(&self) -> Row {
        vec![
            self.tournament_id.clone(),
            self.player_id.clone(),
            self.hole.to_string(),
            self.strokes.to_string(),
            self.par.to_string(),
        ]
    }
}

#[derive(Clone)]
pub struct Scores {
    store: RecordStore,
}

impl Scores {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Insert-or-overwrite on the (tournament, player, hole) key: a matching
    /// row is rewritten in place, otherwise the score is appended. Repeated
    /// submissions therefore leave a single live record.
    pub async fn upsert(&self, score: &Score) -> bool {
        let rows = self.store.rows(READ_RANGE).await;
        let existing = rows.iter().position(|row| {
            cell(row, 0) == score.tournament_id
                && cell(row, 1) == score.player_id
                && num_cell::<u32>(row, 2) == score.hole
        });

        match existing {
            Some(idx) => {
                self.store
                    .write(WRITE_RANGE, idx + HEADER_OFFSET, score.to_row())
                    .await
            }
            None => self.store.append(WRITE_RANGE, score.to_row()).await,
        }
    }

    /// Scores of one tournament, deduplicated per (player, hole) keeping the
    /// last-encountered row — append order stands in for submission order, so
    /// this is last-write-wins over any duplicates the upsert path missed.
    /// Key order of the result is first-seen order.
    pub async fn by_tournament(&self, tournament_id: &str) -> Vec<Score> {
        let mut unique: IndexMap<(String, u32), Score> = IndexMap::new();
        for row in self.store.rows(READ_RANGE).await {
            if is_blank(&row) || cell(&row, 0) != tournament_id {
                continue;
            }
            let score = Score::from_row(&row);
            unique.insert((score.player_id.clone(), score.hole), score);
        }
        unique.into_values().collect()
    }
}
