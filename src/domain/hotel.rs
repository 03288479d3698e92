use std::collections::BTreeMap;

use crate::api::hotel_dto::HotelDto;
use crate::domain::customer::Customer;
use crate::domain::id::{CustomerId, HotelId, ReservationId};
use crate::domain::reservation::Reservation;
use crate::domain::room_inventory::{RoomInventory, RoomShortage};
use crate::error::{Error, Result};

/// A hotel document: metadata, room inventory, and the reservations and
/// customers it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub location: String,
    pub rooms: RoomInventory,
    pub reservations: Vec<Reservation>,
    pub customers: Vec<Customer>,
}

impl Hotel {
    pub fn new(id: HotelId, name: &str, location: &str, rooms: BTreeMap<String, u32>) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
            rooms: RoomInventory::new(rooms),
            reservations: Vec::new(),
            customers: Vec::new(),
        }
    }

    pub fn from_dto(dto: HotelDto) -> Self {
        Self {
            id: HotelId::new(dto.hotel_id),
            name: dto.name,
            location: dto.location,
            rooms: RoomInventory::new(dto.rooms),
            reservations: dto.reservations.into_iter().map(Reservation::from_dto).collect(),
            customers: dto.customers.into_iter().map(Customer::from_dto).collect(),
        }
    }

    pub fn to_dto(&self) -> HotelDto {
        HotelDto {
            hotel_id: self.id.value,
            name: self.name.clone(),
            location: self.location.clone(),
            rooms: self.rooms.as_map().clone(),
            reservations: self.reservations.iter().map(Reservation::to_dto).collect(),
            customers: self.customers.iter().map(Customer::to_dto).collect(),
        }
    }

    /// Pure lookup, never creates anything.
    pub fn find_customer(&self, customer_name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name == customer_name)
    }

    /// Registers a new customer with the next free per-hotel id.
    pub fn add_customer(&mut self, customer_name: &str) -> Result<Customer> {
        validate_name("customer name", customer_name)?;
        if self.find_customer(customer_name).is_some() {
            return Err(Error::DuplicateCustomer { hotel: self.name.clone(), customer: customer_name.to_string() });
        }

        let id = CustomerId::after_max(self.customers.iter().map(|c| &c.id)).ok_or(Error::IdSpaceExhausted("customer"))?;
        let customer = Customer::new(id, customer_name);
        self.customers.push(customer.clone());

        Ok(customer)
    }

    /// Renames a customer together with the name copies held by their reservations.
    pub fn rename_customer(&mut self, customer_name: &str, new_name: &str) -> Result<Customer> {
        validate_name("customer name", new_name)?;
        if customer_name != new_name && self.find_customer(new_name).is_some() {
            return Err(Error::DuplicateCustomer { hotel: self.name.clone(), customer: new_name.to_string() });
        }

        let hotel_name = self.name.clone();
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.name == customer_name)
            .ok_or_else(|| Error::CustomerNotFound { hotel: hotel_name, customer: customer_name.to_string() })?;
        customer.name = new_name.to_string();
        let renamed = customer.clone();

        for reservation in self.reservations.iter_mut().filter(|r| r.customer_id == renamed.id) {
            reservation.customer_name = new_name.to_string();
        }

        Ok(renamed)
    }

    /// Removes a customer who holds no reservations.
    pub fn remove_customer(&mut self, customer_name: &str) -> Result<Customer> {
        let position = self
            .customers
            .iter()
            .position(|c| c.name == customer_name)
            .ok_or_else(|| Error::CustomerNotFound { hotel: self.name.clone(), customer: customer_name.to_string() })?;

        let customer_id = self.customers[position].id;
        let count = self.reservations.iter().filter(|r| r.customer_id == customer_id).count();
        if count > 0 {
            return Err(Error::CustomerHasReservations { hotel: self.name.clone(), customer: customer_name.to_string(), count });
        }

        Ok(self.customers.remove(position))
    }

    /// Checks that a room of `room_type` can be reserved right now.
    pub fn check_room(&self, room_type: &str) -> Result<()> {
        self.rooms.check(room_type).map_err(|shortage| self.shortage_error(shortage, room_type))
    }

    /// Takes one room of `room_type` and appends the matching reservation.
    ///
    /// Either both happen or neither does.
    pub fn reserve_room(&mut self, id: ReservationId, customer: &Customer, room_type: &str, date: &str) -> Result<Reservation> {
        self.rooms.take(room_type).map_err(|shortage| self.shortage_error(shortage, room_type))?;

        let reservation = Reservation::new(id, customer.id, &customer.name, room_type, date);
        self.reservations.push(reservation.clone());

        Ok(reservation)
    }

    /// Cancels the first reservation (in list order) held under `customer_name`.
    pub fn cancel_first_for(&mut self, customer_name: &str) -> Result<Reservation> {
        let position = self
            .reservations
            .iter()
            .position(|r| r.customer_name == customer_name)
            .ok_or_else(|| Error::ReservationNotFound { hotel: self.name.clone(), customer: customer_name.to_string() })?;

        Ok(self.cancel_at(position))
    }

    pub fn cancel_by_id(&mut self, id: ReservationId) -> Result<Reservation> {
        let position = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::ReservationIdNotFound { hotel: self.name.clone(), id })?;

        Ok(self.cancel_at(position))
    }

    fn cancel_at(&mut self, position: usize) -> Reservation {
        let reservation = self.reservations.remove(position);
        self.rooms.release(&reservation.room_type);

        reservation.into_cancelled()
    }

    pub fn reservations_of<'a>(&'a self, customer_name: &'a str) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.reservations.iter().filter(move |r| r.customer_name == customer_name)
    }

    pub fn max_reservation_id(&self) -> Option<ReservationId> {
        self.reservations.iter().map(|r| r.id).max()
    }

    fn shortage_error(&self, shortage: RoomShortage, room_type: &str) -> Error {
        match shortage {
            RoomShortage::UnknownRoomType => Error::RoomTypeNotFound { hotel: self.name.clone(), room_type: room_type.to_string() },
            RoomShortage::SoldOut => Error::NoRoomsAvailable { hotel: self.name.clone(), room_type: room_type.to_string() },
        }
    }
}

/// First hotel whose name matches exactly.
pub fn find_hotel<'a>(hotels: &'a [Hotel], hotel_name: &str) -> Result<&'a Hotel> {
    hotels.iter().find(|h| h.name == hotel_name).ok_or_else(|| Error::HotelNotFound(hotel_name.to_string()))
}

pub fn find_hotel_mut<'a>(hotels: &'a mut [Hotel], hotel_name: &str) -> Result<&'a mut Hotel> {
    hotels.iter_mut().find(|h| h.name == hotel_name).ok_or_else(|| Error::HotelNotFound(hotel_name.to_string()))
}

pub(crate) fn validate_name(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", what)));
    }

    Ok(())
}
