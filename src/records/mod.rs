//! Typed repositories over the row store, one per entity.
//!
//! Every repository follows the same shape: `get_all` parses rows by fixed
//! column position, `add` appends a full row, `update` merges a patch of
//! named optional fields over the re-fetched current record and writes the
//! merged row back, `delete` clears the row in place. Scores are the
//! exception — submission is an upsert keyed on (tournament, player, hole)
//! and there is no standalone update or delete.
//!
//! The store is the sole source of truth; nothing is cached between requests.

use std::{str::FromStr, sync::Arc};

use crate::store::{RecordStore, SheetsApi};

pub mod courses;
pub mod players;
pub mod registrations;
pub mod scores;
pub mod tournaments;

/// Cell at `idx`, defaulting to empty when the row is short.
pub(crate) fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

/// Numeric cell at `idx`; unparseable or missing cells default to zero,
/// mirroring the loose numeric conversion the sheet data was written under.
pub(crate) fn num_cell<T>(row: &[String], idx: usize) -> T
where
    T: FromStr + Default,
{
    row.get(idx)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}

/// A cleared (logically deleted) row: every cell empty.
pub(crate) fn is_blank(row: &[String]) -> bool {
    row.iter().all(String::is_empty)
}

/// Numeric value as a sheet cell, without a trailing `.0` for whole numbers.
pub(crate) fn num_to_cell(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Handle on every repository, sharing one store client. Constructed once at
/// startup and cloned into handlers; there is no other store state.
#[derive(Clone)]
pub struct Db {
    pub players: players::Players,
    pub tournaments: tournaments::Tournaments,
    pub courses: courses::Courses,
    pub scores: scores::Scores,
    pub registrations: registrations::Registrations,
}

impl Db {
    pub fn new(client: Arc<dyn SheetsApi>) -> Self {
        let store = RecordStore::new(client);
        Self {
            players: players::Players::new(store.clone()),
            tournaments: tournaments::Tournaments::new(store.clone()),
            courses: courses::Courses::new(store.clone()),
            scores: scores::Scores::new(store.clone()),
            registrations: registrations::Registrations::new(store),
        }
    }
}
