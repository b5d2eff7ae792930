//! Core library exports for the catalog service.
//!
//! This crate exposes the product domain model and Diesel persistence layer
//! (`data` feature) and, behind the `server` feature, the forms, routes,
//! services and listing cache used by the catalog admin application.

#[cfg(feature = "server")]
pub mod cache;
pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
