pub mod auth;
pub mod dvds;
pub mod lookup;
