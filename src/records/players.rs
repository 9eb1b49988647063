use serde::{Deserialize, Serialize};

use crate::{
    records::{cell, is_blank, num_cell, num_to_cell},
    store::{RecordStore, Row},
};

const READ_RANGE: &str = "Players!A2:G";
const WRITE_RANGE: &str = "Players!A:G";

/// Columns: id, name, lineUserId, handicap, team, email, phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// External identity linkage, set once the player logs in through the
    /// social-login provider. Empty until then.
    #[serde(default)]
    pub line_user_id: String,
    pub handicap: f64,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Partial update; `None` fields keep the current value. The id is immutable
/// once created and so has no slot here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub line_user_id: Option<String>,
    pub handicap: Option<f64>,
    pub team: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Player {
    fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            name: cell(row, 1),
            line_user_id: cell(row, 2),
            handicap: num_cell(row, 3),
            team: cell(row, 4),
            email: cell(row, 5),
            phone: cell(row, 6),
        }
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.line_user_id.clone(),
            num_to_cell(self.handicap),
            self.team.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }

    fn merged(mut self, patch: PlayerPatch) -> Self {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.line_user_id {
            self.line_user_id = v;
        }
        if let Some(v) = patch.handicap {
            self.handicap = v;
        }
        if let Some(v) = patch.team {
            self.team = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        self
    }
}

#[derive(Clone)]
pub struct Players {
    store: RecordStore,
}

impl Players {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Player> {
        self.store
            .rows(READ_RANGE)
            .await
            .iter()
            .filter(|row| !is_blank(row))
            .map(|row| Player::from_row(row))
            .collect()
    }

    pub async fn add(&self, player: &Player) -> bool {
        self.store.append(WRITE_RANGE, player.to_row()).await
    }

    /// Find-then-write with no atomicity between the two round trips;
    /// concurrent writers race last-writer-wins.
    pub async fn update(&self, id: &str, patch: PlayerPatch) -> bool {
        let Some(position) = self.store.find_row(READ_RANGE, id).await else {
            return false;
        };
        let Some(current) =
            self.get_all().await.into_iter().find(|p| p.id == id)
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
