//! Error types for string enumerations

use thiserror::Error;

/// A string that is not one of the known values of an enumeration
///
/// Unknown values still travel on the wire unchanged; this error only surfaces when
/// a caller asks for the typed form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownValueError {
    /// Enumeration name, e.g. `CertificateStatus`
    pub kind: &'static str,

    /// The rejected value
    pub value: String,
}
