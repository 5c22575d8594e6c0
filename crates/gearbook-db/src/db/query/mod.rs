pub mod equipment;
pub mod location;
pub mod reservation;
pub mod user;
