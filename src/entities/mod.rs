mod alert;
mod booking;
mod car;
mod quote;

pub use alert::Alert;
pub use booking::Booking;
pub use car::Car;
pub use quote::Quote;
