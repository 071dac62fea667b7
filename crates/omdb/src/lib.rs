//! Movie metadata lookup against the OMDB API.
//!
//! [`OmdbLookup`] turns a typed title or a scanned barcode into a
//! [`MovieData`] ready to pre-fill the add-DVD form. The HTTP call sits behind
//! the [`OmdbTransport`] trait so the search-then-detail sequencing can be
//! exercised without the network.

pub mod api;
pub mod config;
pub mod error;
pub mod lookup;
pub mod types;

pub use api::{OmdbHttp, OmdbTransport};
pub use config::OmdbConfig;
pub use error::LookupError;
pub use lookup::{LookupQuery, MovieData, MovieLookup, OmdbLookup};
