use std::sync::Arc;

use crate::config::StoreConfig;
use crate::manager::{CustomerManager, HotelManager, ReservationManager};
use crate::store::{HotelStore, JsonFileStore, RecordStore};

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod manager;
pub mod store;

pub use error::{Error, ReservationError, Result};

/// The three managers of one store, sharing its lock.
#[derive(Debug)]
pub struct HotelRecords<S: RecordStore> {
    pub hotels: HotelManager<S>,
    pub customers: CustomerManager<S>,
    pub reservations: ReservationManager<S>,
}

impl<S: RecordStore> HotelRecords<S> {
    pub fn new(records: S) -> Self {
        let store = Arc::new(HotelStore::new(records));

        Self {
            hotels: HotelManager::new(Arc::clone(&store)),
            customers: CustomerManager::new(Arc::clone(&store)),
            reservations: ReservationManager::new(store),
        }
    }
}

/// Opens the JSON store described by `config`.
pub fn open_json_store(config: &StoreConfig) -> HotelRecords<JsonFileStore> {
    log::debug!("Using hotel store '{}'.", config.path.display());
    HotelRecords::new(JsonFileStore::new(config))
}
