//! Wall-removal search
//!
//! Two interchangeable implementations of the same contract: find the
//! single removable wall whose removal merges the two largest adjacent
//! rooms. The memoized strategy is the production path; the brute-force
//! strategy is the correctness oracle it is tested against.

/// Brute-force strategy: toggle, re-analyze, restore per candidate
pub mod brute_force;
/// Memoized strategy: one analysis pass, constant-time candidates
pub mod memoized;
/// Shared strategy contract and result type
pub mod strategy;

pub use brute_force::BruteForce;
pub use memoized::Memoized;
pub use strategy::{BestRemoval, RemovalStrategy};
