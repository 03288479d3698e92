use std::sync::{Mutex, PoisonError};

use crate::domain::hotel::Hotel;
use crate::error::Result;
use crate::store::record_store::RecordStore;

/// Serializes every load / mutate / save cycle on one record store.
///
/// Each call reads the complete document set, hands it to the closure and, for
/// `update`, writes everything back. The mutex covers the whole cycle, so two
/// operations in this process never interleave. Separate processes sharing the
/// same file are not coordinated.
#[derive(Debug)]
pub struct HotelStore<S: RecordStore> {
    records: S,
    lock: Mutex<()>,
}

impl<S: RecordStore> HotelStore<S> {
    pub fn new(records: S) -> Self {
        Self { records, lock: Mutex::new(()) }
    }

    pub fn records(&self) -> &S {
        &self.records
    }

    /// Runs `f` on a freshly loaded snapshot. Nothing is written.
    pub fn read<T>(&self, f: impl FnOnce(&[Hotel]) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let hotels = self.records.load_all()?;

        f(&hotels)
    }

    /// Runs `f` on a freshly loaded snapshot and saves it if `f` succeeds.
    ///
    /// When `f` fails, every change it made is dropped with the snapshot.
    pub fn update<T>(&self, f: impl FnOnce(&mut Vec<Hotel>) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut hotels = self.records.load_all()?;

        let outcome = f(&mut hotels)?;
        self.records.save_all(&hotels)?;

        Ok(outcome)
    }
}
