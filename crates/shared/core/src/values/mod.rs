mod timestamp;

pub use timestamp::{ScanValue, Timestamp, TimestampError};
