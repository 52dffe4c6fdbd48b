//! Timeutil Ports
//!
//! Port definitions (traits) for the timeutil library.
//! These define the boundaries between domain logic and infrastructure.

mod clock;

pub use clock::Clock;
