//! Generic protobuf ↔ domain conversions
//!
//! - UUIDs (domain `Uuid` ↔ protobuf canonical string)
//! - Timestamps (domain `DateTime<Utc>` ↔ protobuf i64 Unix seconds)
//!
//! ```ignore
//! use grpc_client::conversions::*;
//!
//! let id = string_to_uuid(&request.id)?;
//! let created = datetime_to_timestamp(user.created);
//! ```

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ============================================================================
// UUID Conversions (protobuf string ↔ Uuid)
// ============================================================================

/// Parse a UUID carried as a protobuf string field.
///
/// The error is the parser's message, without any prefix.
pub fn string_to_uuid(value: &str) -> Result<Uuid, String> {
  Uuid::parse_str(value).map_err(|e| e.to_string())
}

/// Render a UUID in its hyphenated lowercase form.
pub fn uuid_to_string(uuid: Uuid) -> String {
  uuid.to_string()
}

// ============================================================================
// Timestamp Conversions (Unix timestamp ↔ DateTime<Utc>)
// ============================================================================

/// Convert DateTime<Utc> to Unix timestamp (seconds since epoch)
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp()
}

/// Convert Unix timestamp to DateTime<Utc>
///
/// Falls back to the epoch if the timestamp is out of range.
pub fn timestamp_to_datetime(timestamp: i64) -> DateTime<Utc> {
  DateTime::from_timestamp(timestamp, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
