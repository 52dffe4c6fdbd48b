use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Errors produced by the Timestamp decode surfaces
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The input was structurally absent where a value was required
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),

    /// The input was present but did not parse as a signed decimal integer
    #[error("invalid integer: {0}")]
    Parse(String),

    /// The input was numeric but outside the representable seconds range
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The input arrived as a source kind this type does not accept
    #[error("unsupported source type: {0}")]
    UnsupportedType(&'static str),
}

/// Value kinds a database driver layer hands back when scanning a column
///
/// Different drivers normalize stored integers differently, so a scanned
/// timestamp may arrive as a signed integer, an unsigned integer, or the raw
/// bytes of its decimal form. The remaining kinds exist so that a rejected
/// scan can name what it actually saw.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanValue {
    Null,
    Int(i64),
    UInt(u64),
    Bytes(Vec<u8>),
    Float(f64),
    Text(String),
}

impl ScanValue {
    /// Static name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ScanValue::Null => "null",
            ScanValue::Int(_) => "int",
            ScanValue::UInt(_) => "uint",
            ScanValue::Bytes(_) => "bytes",
            ScanValue::Float(_) => "float",
            ScanValue::Text(_) => "text",
        }
    }
}

/// A point in time, always normalized to UTC
///
/// Every external encoding (decimal string, JSON, database driver value) is
/// the Unix timestamp in whole seconds. The wrapped `DateTime<Utc>` may carry
/// sub-second precision from construction, but it is never preserved across
/// an encode/decode round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a Timestamp from a datetime in any timezone, converting to UTC
    pub fn new<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }

    /// Create a Timestamp from a Unix timestamp in seconds
    ///
    /// Negative values (instants before 1970) are supported. Fails with
    /// `OutOfRange` for seconds outside the representable datetime range.
    pub fn from_unix(secs: i64) -> Result<Self, TimestampError> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or_else(|| TimestampError::OutOfRange(secs.to_string()))
    }

    /// Create a Timestamp holding the current system time
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The underlying UTC datetime
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// The Unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// The outgoing database parameter value: Unix seconds as an i64
    pub fn driver_value(&self) -> i64 {
        self.unix()
    }
}

impl fmt::Display for Timestamp {
    /// Renders the Unix timestamp in seconds as a decimal string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unix())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    /// Parses a decimal Unix timestamp in seconds
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TimestampError::InvalidValue("empty string"));
        }

        let secs = s
            .parse::<i64>()
            .map_err(|e| TimestampError::Parse(e.to_string()))?;

        Self::from_unix(secs)
    }
}

impl TryFrom<ScanValue> for Timestamp {
    type Error = TimestampError;

    /// Converts a scanned database value into a UTC Timestamp
    ///
    /// Accepts a Unix timestamp in seconds as a signed integer, an unsigned
    /// integer within i64 range, or the bytes of its decimal form. An empty
    /// byte sequence is reported as absent input, not as a parse failure.
    fn try_from(src: ScanValue) -> Result<Self, Self::Error> {
        match src {
            ScanValue::Null => Err(TimestampError::InvalidValue("null source")),

            ScanValue::Int(v) => Self::from_unix(v),

            ScanValue::UInt(v) => {
                let secs =
                    i64::try_from(v).map_err(|_| TimestampError::OutOfRange(v.to_string()))?;
                Self::from_unix(secs)
            }

            ScanValue::Bytes(b) => {
                if b.is_empty() {
                    return Err(TimestampError::InvalidValue("empty bytes"));
                }

                let s =
                    std::str::from_utf8(&b).map_err(|e| TimestampError::Parse(e.to_string()))?;
                let secs = s
                    .parse::<i64>()
                    .map_err(|e| TimestampError::Parse(e.to_string()))?;

                Self::from_unix(secs)
            }

            other => Err(TimestampError::UnsupportedType(other.kind())),
        }
    }
}

impl Serialize for Timestamp {
    /// Serializes as a bare JSON integer (Unix seconds), not a string
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    /// Deserializes from an integer JSON number
    ///
    /// Quoted strings, fractional numbers, and exponential notation are
    /// rejected rather than coerced.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(UnixSecondsVisitor)
    }
}

struct UnixSecondsVisitor;

impl<'de> de::Visitor<'de> for UnixSecondsVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a unix timestamp in seconds as a JSON integer")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Timestamp::from_unix(v).map_err(E::custom)
    }

    // Positive integers above i64::MAX arrive here
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let secs =
            i64::try_from(v).map_err(|_| E::custom(TimestampError::OutOfRange(v.to_string())))?;
        Timestamp::from_unix(secs).map_err(E::custom)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(E::custom(TimestampError::InvalidValue("null")))
    }
}
