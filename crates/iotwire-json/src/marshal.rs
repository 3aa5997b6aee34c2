//! Object to wire transcription

use crate::timestamp::epoch_seconds;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Writes a value to a streaming serializer in wire form
///
/// Containers skip absent elements and entries; models skip absent fields.
pub trait Marshal {
    /// Write this value to the serializer
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    /// Whether this value is absent and must be left out of the enclosing container
    fn is_absent(&self) -> bool {
        false
    }
}

/// Adapter exposing a [`Marshal`] value as [`serde::Serialize`]
///
/// Lets marshalled values be handed to any serde serializer, including
/// `serde_json::to_vec` and `serde_json::to_value`.
pub struct Wire<'a, T: ?Sized>(pub &'a T);

impl<T: Marshal + ?Sized> Serialize for Wire<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.marshal(serializer)
    }
}

impl Marshal for str {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }
}

impl Marshal for String {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }
}

impl Marshal for bool {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*self)
    }
}

impl Marshal for i32 {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*self)
    }
}

impl Marshal for i64 {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*self)
    }
}

impl Marshal for f64 {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*self)
    }
}

impl Marshal for DateTime<Utc> {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(epoch_seconds(self))
    }
}

impl<T: Marshal> Marshal for Option<T> {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Some(value) => value.marshal(serializer),
            None => serializer.serialize_none(),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Marshal + ?Sized> Marshal for Box<T> {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (**self).marshal(serializer)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Marshal> Marshal for [T] {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.iter().filter(|v| !v.is_absent()).count();
        let mut seq = serializer.serialize_seq(Some(len))?;
        for element in self.iter().filter(|v| !v.is_absent()) {
            seq.serialize_element(&Wire(element))?;
        }
        seq.end()
    }
}

impl<T: Marshal> Marshal for Vec<T> {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().marshal(serializer)
    }
}

fn marshal_entries<'a, S, T, I>(serializer: S, entries: I) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Marshal + 'a,
    I: Iterator<Item = (&'a String, &'a T)> + Clone,
{
    let present = entries.filter(|(_, v)| !v.is_absent());
    let mut map = serializer.serialize_map(Some(present.clone().count()))?;
    for (key, value) in present {
        map.serialize_entry(key, &Wire(value))?;
    }
    map.end()
}

impl<T: Marshal> Marshal for HashMap<String, T> {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        marshal_entries(serializer, self.iter())
    }
}

impl<T: Marshal> Marshal for BTreeMap<String, T> {
    fn marshal<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        marshal_entries(serializer, self.iter())
    }
}
