//! HTTP form structs, their validation rules and typed payloads.

pub mod products;
