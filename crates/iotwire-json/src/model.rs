//! Traits implemented by every modeled type

use crate::marshal::Marshal;
use crate::unmarshal::Unmarshal;
use iotwire_core::schema::{ModelSchema, WireKind};
use serde::de::MapAccess;

/// A modeled type: a record of optional fields with a fixed wire layout
///
/// Implemented by `#[derive(Model)]`. The schema is built on first use and shared for
/// the rest of the process.
pub trait Model: Marshal + Unmarshal + WireKind + Default {
    /// Static field layout of this type
    fn schema() -> &'static ModelSchema;

    /// Name of this type in the service model
    fn model_name() -> &'static str {
        Self::schema().name
    }
}

/// Per-field dispatch used by [`unmarshal_object`](crate::unmarshal_object)
pub trait ModelFields: Default {
    /// Model name used in diagnostics
    const MODEL_NAME: &'static str;

    /// Read the value for the field with wire name `name` from `map` and store it
    ///
    /// Returns `Ok(false)` without touching `map` when `name` is not a field of this
    /// type; the caller then skips the value.
    fn unmarshal_field<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<bool, A::Error>;
}
