use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::hotel::{Hotel, find_hotel, find_hotel_mut, validate_name};
use crate::domain::id::HotelId;
use crate::error::{Error, Result};
use crate::store::hotel_store::HotelStore;
use crate::store::record_store::RecordStore;

/// Creates, inspects, modifies and deletes hotel documents.
#[derive(Debug)]
pub struct HotelManager<S: RecordStore> {
    store: Arc<HotelStore<S>>,
}

impl<S: RecordStore> Clone for HotelManager<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<S: RecordStore> HotelManager<S> {
    pub fn new(store: Arc<HotelStore<S>>) -> Self {
        Self { store }
    }

    /// Adds a hotel with an empty reservation and customer list.
    ///
    /// # Returns
    /// The stored hotel. Its id is one above the largest id in the store, so ids
    /// freed by deletions are not handed out again.
    pub fn create_hotel(&self, name: &str, location: &str, rooms: BTreeMap<String, u32>) -> Result<Hotel> {
        validate_name("hotel name", name)?;
        if let Some(room_type) = rooms.keys().find(|room_type| room_type.trim().is_empty()) {
            return Err(Error::InvalidInput(format!("room type '{}' must not be empty", room_type)));
        }

        self.store.update(|hotels| {
            if hotels.iter().any(|h| h.name == name) {
                log::warn!("Refusing to create hotel '{}': name already taken.", name);
                return Err(Error::DuplicateHotel(name.to_string()));
            }

            let id = HotelId::after_max(hotels.iter().map(|h| &h.id)).ok_or(Error::IdSpaceExhausted("hotel"))?;
            let hotel = Hotel::new(id, name, location, rooms);
            hotels.push(hotel.clone());
            log::info!("Created hotel '{}' ({:?}) in '{}'.", name, id, location);

            Ok(hotel)
        })
    }

    /// Deletes the hotel together with everything it owns.
    pub fn delete_hotel(&self, name: &str) -> Result<Hotel> {
        self.store.update(|hotels| {
            let position = hotels.iter().position(|h| h.name == name).ok_or_else(|| Error::HotelNotFound(name.to_string()))?;
            let hotel = hotels.remove(position);
            log::info!("Deleted hotel '{}' with {} reservation(s).", name, hotel.reservations.len());

            Ok(hotel)
        })
    }

    pub fn get_hotel(&self, name: &str) -> Result<Hotel> {
        self.store.read(|hotels| find_hotel(hotels, name).cloned())
    }

    pub fn list_hotels(&self) -> Result<Vec<Hotel>> {
        self.store.read(|hotels| Ok(hotels.to_vec()))
    }

    /// Changes name and/or location. `None` or an empty string keeps the current value.
    pub fn modify_hotel(&self, name: &str, new_name: Option<&str>, new_location: Option<&str>) -> Result<Hotel> {
        let new_name = new_name.filter(|n| !n.trim().is_empty());
        let new_location = new_location.filter(|l| !l.trim().is_empty());

        self.store.update(|hotels| {
            find_hotel(hotels, name)?;
            if let Some(new_name) = new_name {
                if new_name != name && hotels.iter().any(|h| h.name == new_name) {
                    return Err(Error::DuplicateHotel(new_name.to_string()));
                }
            }

            let hotel = find_hotel_mut(hotels, name)?;
            if let Some(new_name) = new_name {
                hotel.name = new_name.to_string();
            }
            if let Some(new_location) = new_location {
                hotel.location = new_location.to_string();
            }
            log::info!("Modified hotel '{}' (now '{}' in '{}').", name, hotel.name, hotel.location);

            Ok(hotel.clone())
        })
    }
}
