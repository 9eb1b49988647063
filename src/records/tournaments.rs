use serde::{Deserialize, Serialize};

use crate::{
    records::{cell, is_blank},
    store::{RecordStore, Row},
};

const READ_RANGE: &str = "Tournaments!A2:E";
const WRITE_RANGE: &str = "Tournaments!A:E";

/// Status labels are admin-driven; no transition rules are enforced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
}

impl TournamentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    fn from_cell(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Upcoming,
        }
    }
}

/// Columns: id, name, date, courseId, status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    /// ISO-8601 calendar date.
    pub date: String,
    pub course_id: String,
    pub status: TournamentStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub course_id: Option<String>,
    pub status: Option<TournamentStatus>,
}

impl Tournament {
    fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            name: cell(row, 1),
            date: cell(row, 2),
            course_id: cell(row, 3),
            status: TournamentStatus::from_cell(&cell(row, 4)),
        }
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.date.clone(),
            self.course_id.clone(),
            self.status.as_str().to_string(),
        ]
    }

    fn merged(mut self, patch: TournamentPatch) -> Self {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.course_id {
            self.course_id = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        self
    }
}

#[derive(Clone)]
pub struct Tournaments {
    store: RecordStore,
}

impl Tournaments {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Tournament> {
        self.store
            .rows(READ_RANGE)
            .await
            .iter()
            .filter(|row| !is_blank(row))
            .map(|row| Tournament::from_row(row))
            .collect()
    }

    pub async fn add(&self, tournament: &Tournament) -> bool {
        self.store.append(WRITE_RANGE, tournament.to_row()).await
    }

    pub async fn update(&self, id: &str, patch: TournamentPatch) -> bool {
        let Some(position) = self.store.find_row(READ_RANGE, id).await else {
            return false;
        };
        let Some(current) =
            self.get_all().await.into_iter().find(|t| t.id == id)
        else {
            return false;
        };
        self.store
            .write(WRITE_RANGE, position, current.merged(patch).to_row())
            .await
    }

    pub async fn delete(&self, id: &str) -> bool {
        let Some(position) = self.store.find_row(READ_RANGE, id).await else {
            return false;
        };
        self.store.clear(WRITE_RANGE, position).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_cells_fall_back_to_upcoming() {
        assert_eq!(TournamentStatus::from_cell("active"), TournamentStatus::Active);
        assert_eq!(
            TournamentStatus::from_cell("finished"),
            TournamentStatus::Upcoming
        );
        assert_eq!(TournamentStatus::from_cell(""), TournamentStatus::Upcoming);
    }

    #[test]
    fn status_round_trips_through_its_cell_form() {
        for status in [
            TournamentStatus::Upcoming,
            TournamentStatus::Active,
            TournamentStatus::Completed,
        ] {
            assert_eq!(TournamentStatus::from_cell(status.as_str()), status);
        }
    }
}
