//! Pluggable event serialization for downstream consumers.
//!
//! The matching core owns no wire protocol, but its events and depth
//! snapshots are the natural export surface. The [`EventSerializer`] trait
//! lets a publisher choose the payload format at construction time;
//! [`JsonEventSerializer`] is the built-in human-readable implementation.

use super::depth::DepthSnapshot;
use crate::types::Event;
use std::fmt;

/// Errors that can occur during event serialization or deserialization.
#[derive(Debug)]
pub struct SerializationError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event serialization error: {}", self.message)
    }
}

impl std::error::Error for SerializationError {}

/// A pluggable serializer for book events and depth snapshots.
///
/// Implementations must be `Send + Sync` so a publisher can share one behind
/// an `Arc<dyn EventSerializer>` across executors.
pub trait EventSerializer: Send + Sync + fmt::Debug {
    /// Serialize an [`Event`] into a byte buffer.
    ///
    /// # Errors
    /// Returns [`SerializationError`] if the event cannot be serialized.
    fn serialize_event(&self, event: &Event) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize an [`Event`] from a byte buffer.
    ///
    /// # Errors
    /// Returns [`SerializationError`] if the bytes are malformed or
    /// incompatible with the expected format.
    fn deserialize_event(&self, data: &[u8]) -> Result<Event, SerializationError>;

    /// Serialize a [`DepthSnapshot`] into a byte buffer.
    ///
    /// # Errors
    /// Returns [`SerializationError`] if the snapshot cannot be serialized.
    fn serialize_depth(&self, snapshot: &DepthSnapshot) -> Result<Vec<u8>, SerializationError>;

    /// Returns the MIME-like content type identifier for this format, e.g.
    /// `"application/json"`. Consumers use it to select a deserializer.
    #[must_use]
    fn content_type(&self) -> &'static str;
}

/// JSON event serializer using `serde_json`.
///
/// The default serializer, producing human-readable payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSerializer;

impl EventSerializer for JsonEventSerializer {
    fn serialize_event(&self, event: &Event) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(event).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize_event(&self, data: &[u8]) -> Result<Event, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn serialize_depth(&self, snapshot: &DepthSnapshot) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(snapshot).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
