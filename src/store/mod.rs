//! Row-oriented access to the backing spreadsheet.
//!
//! The vendor spreadsheet client is an external collaborator; everything the
//! rest of the crate needs from it is captured by [`SheetsApi`]. Each logical
//! table is a sheet whose first row is a header, so data rows live at store
//! positions 2 and up. Records are addressed by scanning for an identifier in
//! column 1 rather than by any store-side key.

use std::{fmt, sync::Arc};

use async_trait::async_trait;

pub mod memory;

/// A single sheet row; cells are untyped strings, exactly as the backing
/// store hands them over.
pub type Row = Vec<String>;

/// Store row position of the first data row (row 1 is the header).
pub(crate) const HEADER_OFFSET: usize = 2;

#[derive(Debug)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet store error: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Boundary trait over the spreadsheet service. Ranges use the familiar
/// `Sheet!A2:G` notation; positions are 1-based and count the header row.
#[async_trait]
pub trait SheetsApi: Send + Sync {
    async fn read_range(&self, range: &str) -> Result<Vec<Row>, StoreError>;
    async fn append_row(&self, range: &str, row: Row) -> Result<(), StoreError>;
    async fn write_row(
        &self,
        range: &str,
        position: usize,
        row: Row,
    ) -> Result<(), StoreError>;
    async fn clear_row(
        &self,
        range: &str,
        position: usize,
    ) -> Result<(), StoreError>;
}

/// Fail-soft adapter over a [`SheetsApi`] client.
///
/// Transport failures never reach callers: reads degrade to an empty row set
/// and writes to `false`, with the swallowed error logged at warn level. An
/// empty read is therefore ambiguous between "no data" and "store
/// unreachable" — callers live with that, the log line is the only signal.
#[derive(Clone)]
pub struct RecordStore {
    client: Arc<dyn SheetsApi>,
}

impl RecordStore {
    pub fn new(client: Arc<dyn SheetsApi>) -> Self {
        Self { client }
    }

    /// All data rows of `range`, top to bottom, header excluded.
    pub async fn rows(&self, range: &str) -> Vec<Row> {
        match self.client.read_range(range).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(range, error = %e, "read failed, degrading to empty");
                Vec::new()
            }
        }
    }

    pub async fn append(&self, range: &str, row: Row) -> bool {
        match self.client.append_row(range, row).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(range, error = %e, "append failed");
                false
            }
        }
    }

    pub async fn write(&self, range: &str, position: usize, row: Row) -> bool {
        match self.client.write_row(range, position, row).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(range, position, error = %e, "row write failed");
                false
            }
        }
    }

    /// Logical delete: blanks the row in place so the positions of every
    /// other record stay stable.
    pub async fn clear(&self, range: &str, position: usize) -> bool {
        match self.client.clear_row(range, position).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(range, position, error = %e, "row clear failed");
                false
            }
        }
    }

    /// Position of the first row whose column 1 equals `id`, as a 1-based
    /// store row (array index plus the header offset). `None` when absent —
    /// not-found is a value here, never an error.
    pub async fn find_row(&self, range: &str, id: &str) -> Option<usize> {
        self.rows(range)
            .await
            .iter()
            .position(|row| row.first().map(String::as_str) == Some(id))
            .map(|idx| idx + HEADER_OFFSET)
    }
}
