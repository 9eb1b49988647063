use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    records::{cell, is_blank},
    store::{RecordStore, Row},
};

const READ_RANGE: &str = "Courses!A2:D";
const WRITE_RANGE: &str = "Courses!A:D";

/// Columns: id, name, comma-joined pars, comma-joined distances.
///
/// A full round has 18 pars, but partial courses are tolerated everywhere;
/// the leaderboard always treats the round as 18 holes regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub pars: Vec<u32>,
    #[serde(default)]
    pub distances: Vec<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub name: Option<String>,
    pub pars: Option<Vec<u32>>,
    pub distances: Option<Vec<u32>>,
}

/// `"4,3,5"` → `[4, 3, 5]`; junk entries parse as zero, an empty cell as an
/// empty sequence.
fn split_nums(cell: &str) -> Vec<u32> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(',')
        .map(|part| part.trim().parse().unwrap_or_default())
        .collect()
}

fn join_nums(nums: &[u32]) -> String {
    nums.iter().join(",")
}

impl Course {
    fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            name: cell(row, 1),
            pars: split_nums(&cell(row, 2)),
            distances: split_nums(&cell(row, 3)),
        }
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            join_nums(&self.pars),
            join_nums(&self.distances),
        ]
    }

    fn merged(mut self, patch: CoursePatch) -> Self {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.pars {
            self.pars = v;
        }
        if let Some(v) = patch.distances {
            self.distances = v;
        }
        self
    }
}

#[derive(Clone)]
pub struct Courses {
    store: RecordStore,
}

impl Courses {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Course> {
        self.store
            .rows(READ_RANGE)
            .await
            .iter()
            .filter(|row| !is_blank(row))
            .map(|row| Course::from_row(row))
            .collect()
    }

    pub async fn add(&self, course: &Course) -> bool {
        self.store.append(WRITE_RANGE, course.to_row()).await
    }

    pub async fn update(&self, id: &str, patch: CoursePatch) -> bool {
        let Some(position) = self.store.find_row(READ_RANGE, id).await else {
            return false;
        };
        let Some(current) =
            self.get_all().await.into_iter().find(|c| c.id == id)
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
