//! # viajar
//!
//! Time-bounded 2-opt local search for the symmetric Traveling Salesman
//! Problem.
//!
//! Given a read-only pairwise distance matrix and a wall-clock budget, the
//! drivers perturb a closed tour with 2-opt segment reversals until the
//! deadline:
//! - [`search::StochasticSearch`] samples random moves and accepts
//!   non-improving ones with a small constant probability
//! - [`search::ExhaustiveDescent`] scans the full neighborhood for a
//!   first-improving move and stops early at a local optimum
//!
//! Every stochastic decision flows through an explicitly passed, seedable
//! RNG, so runs replay exactly from the seed.
//!
//! ## Example
//!
//! ```rust
//! use viajar::prelude::*;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! let matrix = DistanceMatrix::from_coords(&points)?;
//! let mut rng = SearchRng::new(42);
//!
//! let (best, trace) = stochastic_search(&matrix, 0.1, 1e-5, &mut rng)?;
//! assert_eq!(best.len(), 4);
//! assert!(trace.is_non_increasing());
//! # Ok::<(), viajar::SearchError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Index loops over cut positions are clearer
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod instance;
pub mod matrix;
pub mod report;
pub mod search;
pub mod tour;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{DriverKind, SearchConfig, SearchConfigBuilder};
    pub use crate::engine::deadline::Deadline;
    pub use crate::engine::rng::SearchRng;
    pub use crate::error::{SearchError, SearchResult};
    pub use crate::matrix::{DistanceMatrix, Point};
    pub use crate::report::SearchReport;
    pub use crate::search::{
        apply_two_opt, exhaustive_descent, stochastic_search, CostTrace, ExhaustiveDescent,
        StochasticSearch, TracePoint,
    };
    pub use crate::tour::Tour;
}

/// Re-export for public API
pub use error::{SearchError, SearchResult};
