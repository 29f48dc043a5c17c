//! Input/output operations and supporting infrastructure
//!
//! This module contains everything outside the computational core:
//! - Command-line interface and the timed demo harness
//! - Configuration constants and the sample floor plan
//! - Error types shared across the crate
//! - ASCII layout rendering

/// Command-line interface and demo harness
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// ASCII floor-plan rendering
pub mod layout;
