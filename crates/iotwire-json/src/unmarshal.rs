//! Wire to object transcription

use crate::model::ModelFields;
use crate::timestamp::{from_epoch_seconds, parse_timestamp_str};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;

/// Reads a value from a streaming deserializer in wire form
///
/// `Ok(None)` means the value is absent: either JSON `null`, or, for objects, arrays
/// and maps, a value of the wrong JSON type, which is skipped rather than rejected.
/// Malformed JSON and wrong-typed scalars are errors.
pub trait Unmarshal: Sized {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error>;
}

/// [`DeserializeSeed`] that reads one value through [`Unmarshal`]
///
/// Used for nested fields, sequence elements and map values.
pub struct UnmarshalSeed<T>(PhantomData<T>);

impl<T> UnmarshalSeed<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for UnmarshalSeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, T: Unmarshal> DeserializeSeed<'de> for UnmarshalSeed<T> {
    type Value = Option<T>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Option<T>, D::Error> {
        T::unmarshal(deserializer)
    }
}

macro_rules! impl_scalar_unmarshal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Unmarshal for $ty {
                fn unmarshal<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Option<Self>, D::Error> {
                    Option::<$ty>::deserialize(deserializer)
                }
            }
        )*
    };
}

impl_scalar_unmarshal!(String, bool, i32, i64, f64);

impl<T: Unmarshal> Unmarshal for Option<T> {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error> {
        T::unmarshal(deserializer).map(Some)
    }
}

impl<T: Unmarshal> Unmarshal for Box<T> {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error> {
        T::unmarshal(deserializer).map(|v| v.map(Box::new))
    }
}

/// Logs and reports a container that met a value of the wrong JSON type
fn mismatch<T>(expected: &str, found: &str) -> Option<T> {
    tracing::debug!(expected, found, "treating mismatched value as absent");
    None
}

/// Visitor methods shared by every container visitor: `null` is absent, any scalar is
/// skipped and reported as absent.
macro_rules! lenient_scalars {
    ($expected:expr) => {
        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
            Ok(mismatch($expected, "boolean"))
        }

        fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
            Ok(mismatch($expected, "number"))
        }

        fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
            Ok(mismatch($expected, "number"))
        }

        fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
            Ok(mismatch($expected, "number"))
        }

        fn visit_str<E: de::Error>(self, _v: &str) -> Result<Self::Value, E> {
            Ok(mismatch($expected, "string"))
        }
    };
}

/// Consumes the remaining elements of an array nobody asked for
fn drain_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<(), A::Error> {
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

/// Consumes the remaining entries of an object nobody asked for
fn drain_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<(), A::Error> {
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

// Sequences

struct SeqVisitor<T>(PhantomData<T>);

impl<'de, T: Unmarshal> Visitor<'de> for SeqVisitor<T> {
    type Value = Option<Vec<T>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        while let Some(element) = seq.next_element_seed(UnmarshalSeed::<T>::new())? {
            if let Some(value) = element {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        drain_map(map)?;
        Ok(mismatch("array", "object"))
    }

    lenient_scalars!("array");
}

impl<T: Unmarshal> Unmarshal for Vec<T> {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error> {
        deserializer.deserialize_any(SeqVisitor(PhantomData))
    }
}

// Maps

trait MapTarget<T>: Default {
    fn put(&mut self, key: String, value: T);
}

impl<T> MapTarget<T> for HashMap<String, T> {
    fn put(&mut self, key: String, value: T) {
        self.insert(key, value);
    }
}

impl<T> MapTarget<T> for BTreeMap<String, T> {
    fn put(&mut self, key: String, value: T) {
        self.insert(key, value);
    }
}

struct MapVisitor<M, T>(PhantomData<(M, T)>);

impl<'de, M: MapTarget<T>, T: Unmarshal> Visitor<'de> for MapVisitor<M, T> {
    type Value = Option<M>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut out = M::default();
        while let Some(key) = map.next_key::<String>()? {
            if let Some(value) = map.next_value_seed(UnmarshalSeed::<T>::new())? {
                out.put(key, value);
            }
        }
        Ok(Some(out))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        drain_seq(seq)?;
        Ok(mismatch("object", "array"))
    }

    lenient_scalars!("object");
}

impl<T: Unmarshal> Unmarshal for HashMap<String, T> {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error> {
        deserializer.deserialize_any(MapVisitor::<Self, T>(PhantomData))
    }
}

impl<T: Unmarshal> Unmarshal for BTreeMap<String, T> {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error> {
        deserializer.deserialize_any(MapVisitor::<Self, T>(PhantomData))
    }
}

// Models

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: ModelFields> Visitor<'de> for ObjectVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a JSON object for {}", T::MODEL_NAME)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut value = T::default();
        while let Some(name) = map.next_key::<String>()? {
            if !value.unmarshal_field(&name, &mut map)? {
                tracing::trace!(model = T::MODEL_NAME, field = %name, "skipping unknown field");
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(Some(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        drain_seq(seq)?;
        Ok(mismatch(T::MODEL_NAME, "array"))
    }

    lenient_scalars!(T::MODEL_NAME);
}

/// Read a modeled type field by field
///
/// Starts a fresh `T::default()`, hands every known field to
/// [`ModelFields::unmarshal_field`] and skips the rest. A repeated field keeps the
/// last value. Anything other than a JSON object reads as absent.
pub fn unmarshal_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ModelFields,
{
    deserializer.deserialize_any(ObjectVisitor(PhantomData))
}

// Timestamps

struct TimestampVisitor;

impl TimestampVisitor {
    fn out_of_range<E: de::Error>(value: impl fmt::Display) -> E {
        E::custom(format!("timestamp out of range: {value}"))
    }
}

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Option<DateTime<Utc>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 timestamp")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        v.checked_mul(1000)
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(Some)
            .ok_or_else(|| Self::out_of_range(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map_err(|_| Self::out_of_range(v))
            .and_then(|secs| self.visit_i64(secs))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        from_epoch_seconds(v)
            .map(Some)
            .ok_or_else(|| Self::out_of_range(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_timestamp_str(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("invalid timestamp: {v}")))
    }
}

impl Unmarshal for DateTime<Utc> {
    fn unmarshal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Self>, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
