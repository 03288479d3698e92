use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::hotel::{Hotel, find_hotel, find_hotel_mut};
use crate::domain::id::ReservationId;
use crate::domain::reservation::Reservation;
use crate::error::{Error, ReservationError, Result};
use crate::store::hotel_store::HotelStore;
use crate::store::record_store::RecordStore;

/**
 * Keeps room inventory, customers and reservation records consistent.
 *
 * Every operation runs as one critical section on the shared `HotelStore`:
 * load all hotels, validate and mutate in memory, write everything back. A
 * rejected request writes nothing, so a room count is never decremented
 * without its reservation record (or the other way round).
 */
#[derive(Debug)]
pub struct ReservationManager<S: RecordStore> {
    store: Arc<HotelStore<S>>,
    /// Next id this manager hands out. Only ever moves forward.
    next_reservation_id: AtomicU64,
}

impl<S: RecordStore> ReservationManager<S> {
    pub fn new(store: Arc<HotelStore<S>>) -> Self {
        Self { store, next_reservation_id: AtomicU64::new(1) }
    }

    /// Reserves one `room_type` room at `hotel_name` for `customer_name`.
    ///
    /// The customer is registered with the hotel first if the name is unknown.
    ///
    /// # Errors
    /// - `HotelNotFound` if no hotel has that name.
    /// - `RoomTypeNotFound` if the hotel has no such room type.
    /// - `NoRoomsAvailable` if the room type is sold out.
    ///
    /// In all three cases the store is left exactly as it was, including the
    /// customer list.
    pub fn create_reservation(
        &self,
        hotel_name: &str,
        customer_name: &str,
        date: &str,
        room_type: &str,
    ) -> std::result::Result<Reservation, ReservationError> {
        self.store.update(|hotels| {
            let id = self.next_id(hotels);
            let hotel = find_hotel_mut(hotels, hotel_name).inspect_err(|e| log::warn!("Reservation rejected: {}", e))?;
            hotel.check_room(room_type).inspect_err(|e| log::warn!("Reservation rejected: {}", e))?;
            let id = id.inspect_err(|e| log::error!("Reservation rejected: {}", e))?;

            let customer = match hotel.find_customer(customer_name) {
                Some(customer) => customer.clone(),
                None => {
                    let customer = hotel.add_customer(customer_name)?;
                    log::info!("Registered customer '{}' ({:?}) while reserving at '{}'.", customer.name, customer.id, hotel_name);
                    customer
                }
            };

            let reservation = hotel.reserve_room(id, &customer, room_type, date)?;
            self.next_reservation_id.fetch_max(id.value.saturating_add(1), Ordering::SeqCst);
            log::info!(
                "Reservation {} for '{}' created at '{}' ({} room on {}, {} left).",
                reservation.id,
                customer_name,
                hotel_name,
                room_type,
                date,
                hotel.rooms.available(room_type).unwrap_or(0)
            );

            Ok(reservation)
        })
    }

    /// Cancels the first reservation held by `customer_name`, in list order.
    ///
    /// A customer with several reservations needs one call per reservation; use
    /// `cancel_reservation_by_id` to pick a specific one.
    pub fn cancel_reservation(&self, hotel_name: &str, customer_name: &str) -> std::result::Result<(), ReservationError> {
        self.store.update(|hotels| {
            let hotel = find_hotel_mut(hotels, hotel_name)?;
            let cancelled = hotel.cancel_first_for(customer_name).inspect_err(|e| log::warn!("Cancellation rejected: {}", e))?;
            log::info!("Reservation {} for '{}' cancelled at '{}'.", cancelled.id, customer_name, hotel_name);

            Ok(())
        })
    }

    /// Cancels exactly the reservation with `id`.
    ///
    /// # Returns
    /// The removed record, in state `Cancelled`.
    pub fn cancel_reservation_by_id(&self, hotel_name: &str, id: ReservationId) -> Result<Reservation> {
        self.store.update(|hotels| {
            let cancelled = find_hotel_mut(hotels, hotel_name)?.cancel_by_id(id)?;
            log::info!("Reservation {} for '{}' cancelled at '{}'.", cancelled.id, cancelled.customer_name, hotel_name);

            Ok(cancelled)
        })
    }

    /// Active reservations held under `customer_name`, in list order.
    pub fn reservations_for(&self, hotel_name: &str, customer_name: &str) -> Result<Vec<Reservation>> {
        self.store.read(|hotels| Ok(find_hotel(hotels, hotel_name)?.reservations_of(customer_name).cloned().collect()))
    }

    /// Picks the next reservation id: past everything this manager handed out and
    /// past every id already stored in any hotel. The counter only moves once the
    /// reservation is made.
    ///
    /// Fails with `IdSpaceExhausted` when no id with a successor is left, so a
    /// stored `u64::MAX` is never followed by an overflow.
    fn next_id(&self, hotels: &[Hotel]) -> Result<ReservationId> {
        let stored = ReservationId::after_max(hotels.iter().filter_map(|h| h.reservations.iter().map(|r| &r.id).max()))
            .ok_or(Error::IdSpaceExhausted("reservation"))?;
        let counter = self.next_reservation_id.load(Ordering::SeqCst);
        let id = ReservationId::new(counter.max(stored.value));
        id.next().ok_or(Error::IdSpaceExhausted("reservation"))?;

        Ok(id)
    }
}
