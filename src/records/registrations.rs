use serde::{Deserialize, Serialize};

use crate::{
    records::{cell, is_blank},
    store::{RecordStore, Row},
};

const READ_RANGE: &str = "Registrations!A2:F";
const WRITE_RANGE: &str = "Registrations!A:F";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Awaiting payment; the default for public submissions.
    #[default]
    Pending,
    Paid,
}

impl RegistrationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    fn from_cell(s: &str) -> Self {
        match s {
            "paid" => Self::Paid,
            _ => Self::Pending,
        }
    }
}

/// Columns: id, tournamentId, playerName, email, phone, status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub tournament_id: String,
    pub player_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: RegistrationStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPatch {
    pub tournament_id: Option<String>,
    pub player_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<RegistrationStatus>,
}

impl Registration {
    fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            tournament_id: cell(row, 1),
            player_name: cell(row, 2),
            email: cell(row, 3),
            phone: cell(row, 4),
            status: RegistrationStatus::from_cell(&cell(row, 5)),
        }
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.tournament_id.clone(),
            self.player_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.status.as_str().to_string(),
        ]
    }

    fn merged(mut self, patch: RegistrationPatch) -> Self {
        if let Some(v) = patch.tournament_id {
            self.tournament_id = v;
        }
        if let Some(v) = patch.player_name {
            self.player_name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        self
    }
}

#[derive(Clone)]
pub struct Registrations {
    store: RecordStore,
}

impl Registrations {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Registration> {
        self.store
            .rows(READ_RANGE)
            .await
            .iter()
            .filter(|row| !is_blank(row))
            .map(|row| Registration::from_row(row))
            .collect()
    }

    pub async fn add(&self, registration: &Registration) -> bool {
        self.store.append(WRITE_RANGE, registration.to_row()).await
    }

    pub async fn update(&self, id: &str, patch: RegistrationPatch) -> bool {
        let Some(position) = self.store.find_row(READ_RANGE, id).await else {
            return false;
        };
        let Some(current) =
            self.get_all().await.into_iter().find(|r| r.id == id)
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
    use std::sync::Arc;

    use super::*;
    use crate::store::memory::MemorySheets;

    #[tokio::test]
    async fn marking_paid_keeps_contact_details() {
        let repo = Registrations::new(RecordStore::new(Arc::new(
            MemorySheets::default(),
        )));
        let reg = Registration {
            id: "r1".to_string(),
            tournament_id: "t1".to_string(),
            player_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "555".to_string(),
            status: RegistrationStatus::Pending,
        };
        assert!(repo.add(&reg).await);

        let ok = repo
            .update(
                "r1",
                RegistrationPatch {
                    status: Some(RegistrationStatus::Paid),
                    ..Default::default()
                },
            )
            .await;
        assert!(ok);

        let all = repo.get_all().await;
        assert_eq!(all[0].status, RegistrationStatus::Paid);
        assert_eq!(all[0].email, "alice@example.com");
    }
}
