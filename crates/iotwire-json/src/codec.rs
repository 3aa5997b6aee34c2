//! Codec trait and JSON implementation

use crate::marshal::{Marshal, Wire};
use crate::unmarshal::Unmarshal;
use iotwire_core::CodecConfig;
use std::io::{Read, Write};
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during marshalling/unmarshalling
///
/// JSON and I/O failures keep the underlying `serde_json::Error` as their source.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("unknown model type: {0}")]
    UnknownModel(String),
}

impl CodecError {
    /// The underlying JSON error, if any
    pub fn json_error(&self) -> Option<&serde_json::Error> {
        match self {
            CodecError::Serialization(err) | CodecError::Deserialization(err) => Some(err),
            CodecError::UnknownModel(_) => None,
        }
    }
}

/// Trait for model encoding and decoding
pub trait Codec: Send + Sync {
    /// Marshal a value to bytes
    fn marshal<T: Marshal + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>>;

    /// Unmarshal bytes to a value; `None` when the document is not of the expected shape
    fn unmarshal<T: Unmarshal>(&self, data: &[u8]) -> CodecResult<Option<T>>;

    /// Get the content type for this codec
    fn content_type(&self) -> &'static str;
}

/// JSON codec implementation using serde_json
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false for compact wire documents)
    pretty: bool,
}

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON codec from configuration
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            pretty: config.pretty,
        }
    }

    /// Whether output is pretty-printed
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Marshal a value directly to a JSON string
    pub fn marshal_to_string<T: Marshal + ?Sized>(&self, value: &T) -> CodecResult<String> {
        let result = if self.pretty {
            serde_json::to_string_pretty(&Wire(value))
        } else {
            serde_json::to_string(&Wire(value))
        };
        result.map_err(CodecError::Serialization)
    }

    /// Marshal a value into a writer
    pub fn marshal_to_writer<W: Write, T: Marshal + ?Sized>(
        &self,
        writer: W,
        value: &T,
    ) -> CodecResult<()> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(writer, &Wire(value))
        } else {
            serde_json::to_writer(writer, &Wire(value))
        };
        result.map_err(CodecError::Serialization)
    }

    /// Marshal a value to an in-memory JSON tree
    pub fn to_value<T: Marshal + ?Sized>(&self, value: &T) -> CodecResult<serde_json::Value> {
        serde_json::to_value(Wire(value)).map_err(CodecError::Serialization)
    }

    /// Unmarshal a JSON string
    pub fn unmarshal_str<T: Unmarshal>(&self, data: &str) -> CodecResult<Option<T>> {
        self.unmarshal(data.as_bytes())
    }

    /// Unmarshal a JSON document from a reader
    pub fn unmarshal_reader<R: Read, T: Unmarshal>(&self, reader: R) -> CodecResult<Option<T>> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let value = T::unmarshal(&mut de).map_err(CodecError::Deserialization)?;
        de.end().map_err(CodecError::Deserialization)?;
        Ok(value)
    }

    /// Unmarshal an in-memory JSON tree
    pub fn from_value<T: Unmarshal>(&self, value: serde_json::Value) -> CodecResult<Option<T>> {
        T::unmarshal(value).map_err(CodecError::Deserialization)
    }
}

impl Codec for JsonCodec {
    fn marshal<T: Marshal + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(&Wire(value))
        } else {
            serde_json::to_vec(&Wire(value))
        };
        result.map_err(CodecError::Serialization)
    }

    fn unmarshal<T: Unmarshal>(&self, data: &[u8]) -> CodecResult<Option<T>> {
        let mut de = serde_json::Deserializer::from_slice(data);
        let value = T::unmarshal(&mut de).map_err(CodecError::Deserialization)?;
        de.end().map_err(CodecError::Deserialization)?;
        Ok(value)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
