use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One hotel document as stored in the JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HotelDto {
    pub hotel_id: u64,
    pub name: String,
    pub location: String,
    pub rooms: BTreeMap<String, u32>,
    #[serde(default)]
    pub reservations: Vec<ReservationDto>,
    #[serde(default)]
    pub customers: Vec<CustomerDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReservationDto {
    pub id: u64,
    pub customer_id: u64,
    pub customer_name: String,
    pub room_type: String,
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerDto {
    pub customer_id: u64,
    pub customer_name: String,
}

/// The whole store: an ordered list of hotel documents.
pub type HotelsDto = Vec<HotelDto>;
