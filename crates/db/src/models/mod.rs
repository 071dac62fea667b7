pub mod dvd;
pub mod user;
