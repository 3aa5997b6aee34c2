//! Declarative field schemas for modeled types
//!
//! Every modeled type carries a [`ModelSchema`]: its name and the ordered list of its
//! fields, each with the Rust field name, the fixed wire name, and the [`FieldKind`]
//! that decides how the value is transcribed. Schemas are built once per type and
//! live for the rest of the process.
//!
//! Nested object fields refer to the child schema through a function pointer rather
//! than a direct reference, so a schema never has to be built before the schemas of
//! the types it mentions.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// How a field value is represented on the wire
#[derive(Clone)]
pub enum FieldKind {
    /// JSON string
    String,
    /// JSON boolean
    Boolean,
    /// 32-bit JSON integer
    Integer,
    /// 64-bit JSON integer
    Long,
    /// JSON floating point number
    Double,
    /// Epoch seconds as a JSON number
    Timestamp,
    /// Another modeled type
    Object(fn() -> &'static ModelSchema),
    /// JSON array of the inner kind
    List(Box<FieldKind>),
    /// JSON object with string keys and values of the inner kind
    Map(Box<FieldKind>),
}

impl FieldKind {
    /// Human readable type name, e.g. `list<Certificate>` or `map<string>`
    pub fn type_name(&self) -> String {
        match self {
            FieldKind::String => "string".to_string(),
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Integer => "integer".to_string(),
            FieldKind::Long => "long".to_string(),
            FieldKind::Double => "double".to_string(),
            FieldKind::Timestamp => "timestamp".to_string(),
            FieldKind::Object(schema) => schema().name.to_string(),
            FieldKind::List(inner) => format!("list<{}>", inner.type_name()),
            FieldKind::Map(inner) => format!("map<{}>", inner.type_name()),
        }
    }

    /// Schema of the nested model, if this kind is an object
    pub fn model(&self) -> Option<&'static ModelSchema> {
        match self {
            FieldKind::Object(schema) => Some(schema()),
            _ => None,
        }
    }

    /// Whether values of this kind are written as a JSON array or object
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            FieldKind::Object(_) | FieldKind::List(_) | FieldKind::Map(_)
        )
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldKind::String, FieldKind::String)
            | (FieldKind::Boolean, FieldKind::Boolean)
            | (FieldKind::Integer, FieldKind::Integer)
            | (FieldKind::Long, FieldKind::Long)
            | (FieldKind::Double, FieldKind::Double)
            | (FieldKind::Timestamp, FieldKind::Timestamp) => true,
            // Model names are unique within a catalog
            (FieldKind::Object(a), FieldKind::Object(b)) => a().name == b().name,
            (FieldKind::List(a), FieldKind::List(b)) => a == b,
            (FieldKind::Map(a), FieldKind::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

/// A single field of a modeled type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Rust field identifier
    pub name: &'static str,

    /// Fixed JSON key
    pub wire_name: &'static str,

    /// Value representation
    pub kind: FieldKind,
}

impl FieldSchema {
    pub fn new(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name,
            kind,
        }
    }
}

/// Static layout of a modeled type
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    /// Model name (unique within the service model)
    pub name: &'static str,

    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
}

impl ModelSchema {
    pub fn new(name: &'static str, fields: Vec<FieldSchema>) -> Self {
        Self { name, fields }
    }

    /// Look up a field by its wire name
    pub fn field(&self, wire_name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    /// Look up a field by its Rust identifier
    pub fn field_by_name(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire names in declaration order
    pub fn wire_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.wire_name)
    }

    /// Names of the models this one refers to directly, including through lists and maps
    pub fn dependencies(&self) -> Vec<&'static str> {
        fn collect(kind: &FieldKind, out: &mut Vec<&'static str>) {
            match kind {
                FieldKind::Object(schema) => {
                    let name = schema().name;
                    if !out.contains(&name) {
                        out.push(name);
                    }
                }
                FieldKind::List(inner) | FieldKind::Map(inner) => collect(inner, out),
                _ => {}
            }
        }

        let mut out = Vec::new();
        for field in &self.fields {
            collect(&field.kind, &mut out);
        }
        out
    }
}

/// Maps a Rust type to its wire representation
pub trait WireKind {
    fn kind() -> FieldKind;
}

macro_rules! impl_wire_kind {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl WireKind for $ty {
                fn kind() -> FieldKind {
                    $kind
                }
            }
        )*
    };
}

impl_wire_kind! {
    String => FieldKind::String,
    bool => FieldKind::Boolean,
    i32 => FieldKind::Integer,
    i64 => FieldKind::Long,
    f64 => FieldKind::Double,
    DateTime<Utc> => FieldKind::Timestamp,
}

impl<T: WireKind> WireKind for Option<T> {
    fn kind() -> FieldKind {
        T::kind()
    }
}

impl<T: WireKind> WireKind for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::List(Box::new(T::kind()))
    }
}

impl<T: WireKind> WireKind for HashMap<String, T> {
    fn kind() -> FieldKind {
        FieldKind::Map(Box::new(T::kind()))
    }
}

impl<T: WireKind> WireKind for BTreeMap<String, T> {
    fn kind() -> FieldKind {
        FieldKind::Map(Box::new(T::kind()))
    }
}
