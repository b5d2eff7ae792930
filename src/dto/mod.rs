//! Flattened representations handed to templates and the JSON API.

pub mod products;
