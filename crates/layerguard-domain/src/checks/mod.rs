//! The two independent check families. Each returns at most one violation kind per edge.

mod direction;
mod public_api;

pub use direction::check_direction;
pub use public_api::{check_public_api_boundary, check_testing_api};

#[cfg(test)]
mod tests;
