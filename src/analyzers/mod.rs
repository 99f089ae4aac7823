//! Reduction of benchmark result matrices into plotting tables.
//!
//! [`loop_free`] turns per-size failure flags into success percentages and
//! an overall per-method total. [`random`] computes mean, median and
//! failure percentage per method and per size.

pub mod loop_free;
pub mod random;
pub mod types;
pub mod utility;

pub use loop_free::aggregate_loop_free;
pub use random::aggregate_random;
