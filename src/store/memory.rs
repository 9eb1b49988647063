//! In-memory [`SheetsApi`] implementation.
//!
//! Serves tests and local runs, and pins down the reference semantics of the
//! trait: appends go to the bottom, clears leave an empty row behind rather
//! than shifting anything, and positions count the header row. Individual
//! operations are serialized by a mutex, but there is deliberately no
//! atomicity across operations — a find-then-write pair races here just as it
//! does against the real service.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;

use super::{HEADER_OFFSET, Row, SheetsApi, StoreError};

#[derive(Default)]
pub struct MemorySheets {
    sheets: Mutex<HashMap<String, Vec<Row>>>,
    offline: AtomicBool,
}

impl MemorySheets {
    /// Simulate a store outage; every subsequent call fails until switched
    /// back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError("store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Sheet name of a range such as `Players!A2:G`.
fn sheet_of(range: &str) -> &str {
    range.split('!').next().unwrap_or(range)
}

#[async_trait]
impl SheetsApi for MemorySheets {
    async fn read_range(&self, range: &str) -> Result<Vec<Row>, StoreError> {
        self.check_online()?;
        let sheets = self.sheets.lock().expect("sheet map poisoned");
        Ok(sheets.get(sheet_of(range)).cloned().unwrap_or_default())
    }

    async fn append_row(&self, range: &str, row: Row) -> Result<(), StoreError> {
        self.check_online()?;
        let mut sheets = self.sheets.lock().expect("sheet map poisoned");
        sheets.entry(sheet_of(range).to_string()).or_default().push(row);
        Ok(())
    }

    async fn write_row(
        &self,
        range: &str,
        position: usize,
        row: Row,
    ) -> Result<(), StoreError> {
        self.check_online()?;
        let mut sheets = self.sheets.lock().expect("sheet map poisoned");
        let rows = sheets
            .get_mut(sheet_of(range))
            .ok_or_else(|| StoreError(format!("no such sheet in {range}")))?;
        let idx = position
            .checked_sub(HEADER_OFFSET)
            .filter(|idx| *idx < rows.len())
            .ok_or_else(|| StoreError(format!("row {position} out of range")))?;
        rows[idx] = row;
        Ok(())
    }

    async fn clear_row(
        &self,
        range: &str,
        position: usize,
    ) -> Result<(), StoreError> {
        self.check_online()?;
        let mut sheets = self.sheets.lock().expect("sheet map poisoned");
        let rows = sheets
            .get_mut(sheet_of(range))
            .ok_or_else(|| StoreError(format!("no such sheet in {range}")))?;
        let idx = position
            .checked_sub(HEADER_OFFSET)
            .filter(|idx| *idx < rows.len())
            .ok_or_else(|| StoreError(format!("row {position} out of range")))?;
        let width = rows[idx].len();
        rows[idx] = vec![String::new(); width];
        Ok(())
    }
}
