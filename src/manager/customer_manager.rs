use std::sync::Arc;

use crate::domain::customer::Customer;
use crate::domain::hotel::{find_hotel, find_hotel_mut};
use crate::error::{Error, Result};
use crate::store::hotel_store::HotelStore;
use crate::store::record_store::RecordStore;

/// Explicit customer maintenance within a hotel.
#[derive(Debug)]
pub struct CustomerManager<S: RecordStore> {
    store: Arc<HotelStore<S>>,
}

impl<S: RecordStore> Clone for CustomerManager<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<S: RecordStore> CustomerManager<S> {
    pub fn new(store: Arc<HotelStore<S>>) -> Self {
        Self { store }
    }

    pub fn create_customer(&self, hotel_name: &str, customer_name: &str) -> Result<Customer> {
        self.store.update(|hotels| {
            let hotel = find_hotel_mut(hotels, hotel_name)?;
            let customer = hotel.add_customer(customer_name)?;
            log::info!("Created customer '{}' ({:?}) for '{}'.", customer.name, customer.id, hotel_name);

            Ok(customer)
        })
    }

    pub fn find_customer(&self, hotel_name: &str, customer_name: &str) -> Result<Customer> {
        self.store.read(|hotels| {
            let hotel = find_hotel(hotels, hotel_name)?;
            hotel
                .find_customer(customer_name)
                .cloned()
                .ok_or_else(|| Error::CustomerNotFound { hotel: hotel_name.to_string(), customer: customer_name.to_string() })
        })
    }

    pub fn rename_customer(&self, hotel_name: &str, customer_name: &str, new_name: &str) -> Result<Customer> {
        self.store.update(|hotels| {
            let customer = find_hotel_mut(hotels, hotel_name)?.rename_customer(customer_name, new_name)?;
            log::info!("Customer name updated from '{}' to '{}' in '{}'.", customer_name, new_name, hotel_name);

            Ok(customer)
        })
    }

    /// Deletes a customer. Customers with active reservations are kept.
    pub fn delete_customer(&self, hotel_name: &str, customer_name: &str) -> Result<Customer> {
        self.store.update(|hotels| {
            let customer = find_hotel_mut(hotels, hotel_name)?.remove_customer(customer_name).inspect_err(|e| {
                log::warn!("Customer '{}' not deleted: {}", customer_name, e);
            })?;
            log::info!("Deleted customer '{}' from '{}'.", customer_name, hotel_name);

            Ok(customer)
        })
    }
}
