pub mod customer;
pub mod hotel;
pub mod id;
pub mod reservation;
pub mod room_inventory;
