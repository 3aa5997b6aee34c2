//! # iotwire
//!
//! JSON object codec and data model for the IoT control plane API.
//!
//! iotwire turns modeled request and result types into sparse JSON documents and back:
//! - Absent fields are never written
//! - Unknown fields are skipped when reading
//! - A non-object value where an object was expected reads as absent
//! - Null elements inside lists and maps are dropped
//!
//! ## Quick Start
//!
//! ```
//! use iotwire::prelude::*;
//! use iotwire::model::thing::CreateThingRequest;
//!
//! let request = CreateThingRequest {
//!     thing_name: Some("boiler-7".to_string()),
//!     attribute_payload: Some(AttributePayload::new([("room", "B12")])),
//! };
//!
//! let codec = JsonCodec::new();
//! let json = codec.marshal_to_string(&request).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"thingName":"boiler-7","attributePayload":{"attributes":{"room":"B12"}}}"#
//! );
//!
//! let back: Option<CreateThingRequest> = codec.unmarshal_str(&json).unwrap();
//! assert_eq!(back, Some(request));
//! ```
//!
//! ## Defining Models
//!
//! `#[derive(Model)]` expands to paths under `::iotwire_json`, so a crate defining its
//! own models also depends on `iotwire-json`.
//!
//! ```ignore
//! use iotwire::Model;
//!
//! #[derive(Debug, Default, Model)]
//! pub struct Reading {
//!     pub sensor_id: Option<String>,
//!     #[wire(name = "value")]
//!     pub celsius: Option<f64>,
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`iotwire_core`] - Log levels, configuration, and field schemas
//! - [`iotwire_json`] - Marshal/unmarshal traits and the JSON codec
//! - [`iotwire_macros`] - `#[derive(Model)]`
//! - [`iotwire_model`] - The IoT control plane types and their catalog
//! - [`iotwire_logging`] - Tracing subscriber setup

// Re-export core types
pub use iotwire_core::{
    CodecConfig, ConfigError, ConfigResult, FieldKind, FieldSchema, LogLevel, ModelSchema,
    WireKind,
};

// Re-export codec types
pub use iotwire_json::{
    Codec, CodecError, CodecResult, JsonCodec, Marshal, Model, ModelFields, Unmarshal, Wire,
};

// Re-export the derive
pub use iotwire_macros::Model;

// Re-export the data model
pub use iotwire_model as model;
pub use iotwire_model::{Catalog, CatalogEntry};

// Re-export logging setup
pub use iotwire_logging::{ReloadHandle, init_logging};

// Re-export common dependencies that model authors need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use iotwire::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Codec: `JsonCodec`, `Codec`, `CodecError`, `CodecResult`
/// - Traits: `Marshal`, `Unmarshal`, `Model` (and its derive)
/// - Shared data structures of the IoT model and its `Catalog`
pub mod prelude {
    // Codec traits and types
    pub use crate::{
        Codec, CodecConfig, CodecError, CodecResult, JsonCodec, Marshal, Model, ModelSchema,
        Unmarshal,
    };

    // Data model
    pub use iotwire_model::{
        Action, AttributePayload, Catalog, Certificate, CertificateDescription,
        CertificateStatus, KeyPair, LoggingOptionsPayload, Policy, PolicyVersion,
        ThingAttribute, TopicRule, TopicRuleListItem, TopicRulePayload,
    };
}
