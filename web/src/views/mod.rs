pub mod booking;
pub mod booking_confirmation;
pub mod home;
pub mod not_found;

pub use booking::EventBooking;
pub use booking_confirmation::BookingConfirmation;
pub use home::HomePage;
pub use not_found::NotFoundPage;
