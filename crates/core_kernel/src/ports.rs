//! Ports and adapters infrastructure
//!
//! Domain crates define port traits for the data sources they need; adapters
//! implement them. The fund catalog is served by a hosted backend in
//! production, so every read goes through a port that can be swapped for an
//! in-memory adapter in tests and local tooling.

use thiserror::Error;

/// Error type for port operations
///
/// A unified error type that all port implementations use, so consumers see
/// consistent failures regardless of which adapter is behind the trait.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend returned data that could not be decoded
    #[error("Decode error: {message}")]
    Decode { message: String },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        PortError::Decode {
            message: message.into(),
        }
    }
}
