use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};

use crate::{Error, SnowflakeId};

/// Serializes as a quoted decimal string so consumers that store numbers as
/// doubles (JavaScript, most JSON tooling) keep every bit.
impl Serialize for SnowflakeId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

/// Accepts a native integer, a float (truncated toward zero) or a decimal
/// string, so one field type serves clients that quote IDs and clients that
/// do not.
impl<'de> Deserialize<'de> for SnowflakeId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = SnowflakeId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer, a float, or a decimal string")
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(SnowflakeId::from_raw(v))
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(SnowflakeId::from_raw)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // 2^63 is exactly representable; anything at or above it is not an i64.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        let truncated = v.trunc();
        if truncated.is_finite() && truncated >= -LIMIT && truncated < LIMIT {
            Ok(SnowflakeId::from_raw(truncated as i64))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<i64>()
            .map(SnowflakeId::from_raw)
            .map_err(|reason| {
                E::custom(Error::InvalidDigit {
                    input: v.to_owned(),
                    reason,
                })
            })
    }
}

/// (De)serializes a [`SnowflakeId`] as a bare integer, for consumers with
/// native 64-bit numbers.
///
/// ```
/// use semflake::{SnowflakeId, as_native_snow};
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Row {
///     #[serde(with = "as_native_snow")]
///     id: SnowflakeId,
/// }
///
/// let json = serde_json::to_string(&Row { id: SnowflakeId::from_raw(42) }).unwrap();
/// assert_eq!(json, r#"{"id":42}"#);
/// ```
pub mod as_native_snow {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::SnowflakeId;

    /// Serialize an ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize an ID from any of the forms [`SnowflakeId`] accepts.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an integer, a float in `i64`
    /// range, or a decimal string.
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        SnowflakeId::deserialize(d)
    }
}
