//! Deterministic search runtime.
//!
//! Two concerns every driver shares:
//! - Seedable RNG (PCG) so stochastic runs replay exactly from the seed
//! - Wall-clock deadline polled cooperatively inside the search loops

pub mod deadline;
pub mod rng;

pub use deadline::Deadline;
pub use rng::SearchRng;
