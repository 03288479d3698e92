use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::api::hotel_dto::HotelsDto;
use crate::config::StoreConfig;
use crate::domain::hotel::Hotel;
use crate::error::Result;
use crate::loader::parser::{parse_json_file, write_json_file};

/// Whole-collection persistence of hotel documents.
///
/// Implementations load and save the complete, ordered list of hotels. They do
/// not serialize callers; see `HotelStore` for that.
pub trait RecordStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<Hotel>>;

    fn save_all(&self, hotels: &[Hotel]) -> Result<()>;
}

fn to_dtos(hotels: &[Hotel]) -> HotelsDto {
    hotels.iter().map(Hotel::to_dto).collect()
}

fn from_dtos(dtos: HotelsDto) -> Vec<Hotel> {
    dtos.into_iter().map(Hotel::from_dto).collect()
}

/// Hotel documents kept in one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self { path: config.path.clone() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Hotel>> {
        let dtos: HotelsDto = parse_json_file(&self.path)?;
        log::debug!("Loaded {} hotel document(s) from '{}'.", dtos.len(), self.path.display());

        Ok(from_dtos(dtos))
    }

    fn save_all(&self, hotels: &[Hotel]) -> Result<()> {
        write_json_file(&self.path, &to_dtos(hotels))?;
        log::debug!("Saved {} hotel document(s) to '{}'.", hotels.len(), self.path.display());

        Ok(())
    }
}

/// Keeps the persisted form in memory. Goes through the same DTO conversion as
/// the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<HotelsDto>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: HotelsDto) -> Self {
        Self { documents: RwLock::new(documents) }
    }

    /// Snapshot of what is currently stored.
    pub fn documents(&self) -> HotelsDto {
        self.documents.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Hotel>> {
        Ok(from_dtos(self.documents()))
    }

    fn save_all(&self, hotels: &[Hotel]) -> Result<()> {
        *self.documents.write().unwrap_or_else(PoisonError::into_inner) = to_dtos(hotels);
        Ok(())
    }
}
