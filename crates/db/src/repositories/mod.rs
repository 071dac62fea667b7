//! Postgres repositories. Each is a unit struct of async functions taking the pool.

pub mod dvd_repo;
pub mod user_repo;

pub use dvd_repo::DvdRepo;
pub use user_repo::UserRepo;
