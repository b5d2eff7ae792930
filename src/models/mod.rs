//! Diesel row structs, domain conversions and server configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
