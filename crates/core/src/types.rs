//! Scalar aliases used across the workspace.

/// Primary-key type; every table uses BIGSERIAL.
pub type DbId = i64;

/// Timestamps are stored and exchanged in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
