//! Bearer-token verification.
//!
//! Sign-in happens at an external identity provider; this crate only
//! verifies the HS256 tokens it issues. See [`jwt`].

pub mod jwt;
