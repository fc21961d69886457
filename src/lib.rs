//! Sanity check for the hash-based beacon weight function.
//!
//! Samples random (beacon, epoch, id) triples from OS entropy, runs
//! each through the Keccak-based weight function, and compares the
//! empirical weight distribution against a uniform reference, both
//! numerically and as an overlaid histogram chart.
//!
//! # Modules
//!
//! - `sampler` - Draw triples from the OS entropy source
//! - `weight` - ABI encoding, Keccak-256, XOR-fold weight function
//! - `stats` - Moments of the weight sample vs the uniform law
//! - `visualization` - Overlaid density histograms via plotters

pub mod sampler;
pub mod stats;
pub mod visualization;
pub mod weight;

// Re-export commonly used types and functions
pub use sampler::{sample_triple, sample_triples};
pub use stats::{mean, unit_scale, variance, DistSummary};
pub use visualization::render_comparison;
pub use weight::{abi_encode, calculate_weight, Triple};
