//! Timeutil Clock Implementations
//!
//! Two clocks behind the same trait:
//!
//! - [`SystemClock`] reads the system wall clock; use it in production.
//! - [`MockClock`] returns a fixed, settable [`timeutil_core::Timestamp`];
//!   use it in tests that need deterministic time.
//!
//! ```ignore
//! use timeutil_clock::{MockClock, SystemClock};
//! use timeutil_core::Timestamp;
//! use timeutil_ports::Clock;
//!
//! let real = SystemClock::new();
//! let _now = real.now();
//!
//! let mut mock = MockClock::new(Timestamp::from_unix(1231006505)?);
//! assert_eq!(mock.now().unix(), 1231006505);
//! mock.set(Timestamp::from_unix(0)?);
//! assert_eq!(mock.now().unix(), 0);
//! ```

mod mock;
mod system;

pub use mock::MockClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use timeutil_ports::Clock;
