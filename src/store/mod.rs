pub mod hotel_store;
pub mod record_store;

pub use hotel_store::HotelStore;
pub use record_store::{InMemoryStore, JsonFileStore, RecordStore};
