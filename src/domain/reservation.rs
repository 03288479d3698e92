use crate::api::hotel_dto::ReservationDto;
use crate::domain::id::{CustomerId, ReservationId};

/// Lifecycle of a reservation.
///
/// Every reservation stored in a hotel document is `Active` and holds one room of
/// its room type. Cancelling removes it from the document and returns the room;
/// the removed record is handed back to the caller as `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationState {
    Active,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub room_type: String,
    /// Free-form date text, stored as given.
    pub date: String,
    pub state: ReservationState,
}

impl Reservation {
    pub fn new(id: ReservationId, customer_id: CustomerId, customer_name: &str, room_type: &str, date: &str) -> Self {
        Self {
            id,
            customer_id,
            customer_name: customer_name.to_string(),
            room_type: room_type.to_string(),
            date: date.to_string(),
            state: ReservationState::Active,
        }
    }

    pub fn from_dto(dto: ReservationDto) -> Self {
        Self {
            id: ReservationId::new(dto.id),
            customer_id: CustomerId::new(dto.customer_id),
            customer_name: dto.customer_name,
            room_type: dto.room_type,
            date: dto.date,
            state: ReservationState::Active,
        }
    }

    pub fn to_dto(&self) -> ReservationDto {
        ReservationDto {
            id: self.id.value,
            customer_id: self.customer_id.value,
            customer_name: self.customer_name.clone(),
            room_type: self.room_type.clone(),
            date: self.date.clone(),
        }
    }

    pub(crate) fn into_cancelled(mut self) -> Self {
        self.state = ReservationState::Cancelled;
        self
    }
}
