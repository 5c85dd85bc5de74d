//! Pure import policy evaluation (no IO).
//!
//! Input: import edges discovered elsewhere plus a resolved policy.
//! Output: violations, and from those findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod classify;
pub mod layers;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;
pub mod checks;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_support;

pub use engine::{PolicyEngine, evaluate};
