pub mod customer_manager;
pub mod hotel_manager;
pub mod reservation_manager;

pub use customer_manager::CustomerManager;
pub use hotel_manager::HotelManager;
pub use reservation_manager::ReservationManager;
