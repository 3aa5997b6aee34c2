//! iotwire-json - Recursive JSON object codec
//!
//! This crate provides:
//! - [`Marshal`] / [`Unmarshal`] traits implemented for scalars, containers and models
//! - [`Model`] trait tying a modeled type to its static [`ModelSchema`]
//! - [`JsonCodec`] for turning models into wire documents and back
//!
//! Modeled types normally get their impls from `#[derive(Model)]` in `iotwire-macros`.
//! The generated code refers to this crate by its absolute path, so a crate defining
//! models depends on `iotwire-json` directly.
//!
//! # Wire rules
//!
//! - Absent (`None`) fields are never written, not even as `null`.
//! - Unknown fields are skipped when reading.
//! - A non-object value where an object was expected reads as absent.

mod codec;
mod marshal;
mod model;
mod timestamp;
mod unmarshal;

pub use codec::{Codec, CodecError, CodecResult, JsonCodec};
pub use iotwire_core::schema;
pub use iotwire_core::schema::{FieldKind, FieldSchema, ModelSchema, WireKind};
pub use marshal::{Marshal, Wire};
pub use model::{Model, ModelFields};
pub use timestamp::{epoch_seconds, from_epoch_seconds};
pub use unmarshal::{Unmarshal, UnmarshalSeed, unmarshal_object};

/// Re-exports used by `#[derive(Model)]` expansions. Not a stable API.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;
    pub use serde;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Codec, CodecError, CodecResult, FieldKind, FieldSchema, JsonCodec, Marshal, Model,
        ModelSchema, Unmarshal, Wire, WireKind,
    };
}
