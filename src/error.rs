use thiserror::Error;

use crate::domain::id::ReservationId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Store file not found or could not be written: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to encode or decode hotel store JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Hotel {0} not found")]
    HotelNotFound(String),

    #[error("Customer {customer} not found in {hotel}")]
    CustomerNotFound { hotel: String, customer: String },

    #[error("{room_type} room type not found in {hotel}")]
    RoomTypeNotFound { hotel: String, room_type: String },

    #[error("No {room_type} rooms available in {hotel}")]
    NoRoomsAvailable { hotel: String, room_type: String },

    #[error("No reservation found for {customer} in {hotel}")]
    ReservationNotFound { hotel: String, customer: String },

    #[error("Reservation {id} not found in {hotel}")]
    ReservationIdNotFound { hotel: String, id: ReservationId },

    #[error("Hotel {0} already exists")]
    DuplicateHotel(String),

    #[error("Customer {customer} already exists in {hotel}")]
    DuplicateCustomer { hotel: String, customer: String },

    #[error("Customer {customer} still holds {count} reservation(s) in {hotel}")]
    CustomerHasReservations { hotel: String, customer: String, count: usize },

    #[error("No {0} ids left to allocate")]
    IdSpaceExhausted(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for failures caused by the request itself rather than by the store file.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Error::IoError(_) | Error::DeserializationError(_))
    }
}

/// Failure type of the reservation operations.
pub type ReservationError = Error;

pub type Result<T> = std::result::Result<T, Error>;
