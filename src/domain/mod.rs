//! Domain entities and the constrained value objects they are built from.

pub mod product;
pub mod types;
