//! Timeutil Core
//!
//! Pure time value types for the timeutil library.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::{ScanValue, Timestamp, TimestampError};
