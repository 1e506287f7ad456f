//! Decimal string forms for crossing boundaries where 64-bit integers lose
//! precision (anything that stores numbers as IEEE doubles).

use core::fmt;

use crate::SnowflakeId;

impl SnowflakeId {
    /// Renders the ID as a decimal string.
    pub fn to_wire_form(&self) -> NetSnowflake {
        NetSnowflake::from(*self)
    }

    /// Parses a decimal string, returning [`SnowflakeId::INVALID`] when the
    /// input is not a base-10 `i64`.
    ///
    /// Negative input parses to its negative value; check
    /// [`SnowflakeId::is_valid`] before trusting the result.
    ///
    /// ```
    /// use semflake::SnowflakeId;
    ///
    /// assert_eq!(SnowflakeId::from_wire_form("42").to_raw(), 42);
    /// assert_eq!(SnowflakeId::from_wire_form("not-a-number"), SnowflakeId::INVALID);
    /// ```
    pub fn from_wire_form(s: &str) -> Self {
        s.parse::<i64>().map_or(Self::INVALID, Self::from_raw)
    }
}

/// Returns `true` iff `s` parses as a non-negative `i64`.
///
/// ```
/// use semflake::is_valid_wire_form;
///
/// assert!(is_valid_wire_form("12345"));
/// assert!(!is_valid_wire_form("-5"));
/// ```
pub fn is_valid_wire_form(s: &str) -> bool {
    s.parse::<i64>().is_ok_and(|value| value >= 0)
}

/// An identifier carried as a decimal string.
///
/// The content is not validated on construction from a string; use
/// [`NetSnowflake::is_valid`] or [`NetSnowflake::to_id`] at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NetSnowflake(String);

impl NetSnowflake {
    /// Wraps a string without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns `true` if the string is a non-negative decimal `i64`.
    pub fn is_valid(&self) -> bool {
        is_valid_wire_form(&self.0)
    }

    /// Parses the string, returning [`SnowflakeId::INVALID`] on failure.
    pub fn to_id(&self) -> SnowflakeId {
        SnowflakeId::from_wire_form(&self.0)
    }

    /// Returns the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<i64> for NetSnowflake {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<SnowflakeId> for NetSnowflake {
    fn from(id: SnowflakeId) -> Self {
        Self::from(id.to_raw())
    }
}

impl From<&NetSnowflake> for SnowflakeId {
    fn from(net: &NetSnowflake) -> Self {
        net.to_id()
    }
}

impl AsRef<str> for NetSnowflake {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetSnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        for value in [0, 1, 42, 1 << 53, (1 << 53) + 1, i64::MAX] {
            let id = SnowflakeId::from_raw(value);
            let wire = id.to_wire_form();
            assert_eq!(wire.as_str(), value.to_string());
            assert_eq!(SnowflakeId::from_wire_form(wire.as_str()), id);
            assert_eq!(wire.to_id(), id);
            assert!(wire.is_valid());
        }
    }

    #[test]
    fn invalid_wire_forms() {
        assert_eq!(SnowflakeId::from_wire_form("not-a-number"), SnowflakeId::INVALID);
        assert_eq!(SnowflakeId::from_wire_form(""), SnowflakeId::INVALID);
        assert_eq!(SnowflakeId::from_wire_form("1.5"), SnowflakeId::INVALID);
        assert_eq!(
            SnowflakeId::from_wire_form("9223372036854775808"),
            SnowflakeId::INVALID
        );
        assert!(!SnowflakeId::from_wire_form("not-a-number").is_valid());
    }

    #[test]
    fn negative_wire_form_parses_but_is_invalid() {
        assert_eq!(SnowflakeId::from_wire_form("-5").to_raw(), -5);
        assert!(!is_valid_wire_form("-5"));
        assert!(!NetSnowflake::new("-5").is_valid());
        assert!(is_valid_wire_form("12345"));
        assert!(is_valid_wire_form("0"));
        assert!(!is_valid_wire_form(" 1"));
    }

    #[test]
    fn net_snowflake_from_generated_id() {
        let id = SnowflakeId::from_components(123, 4, 5);
        let net = NetSnowflake::from(id);
        assert_eq!(net.to_string(), id.to_string());
        assert_eq!(SnowflakeId::from(&net), id);
        assert_eq!(net.into_string(), id.to_raw().to_string());
    }
}
