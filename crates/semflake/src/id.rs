use core::{fmt, str::FromStr};

use crate::{ClassicLayout, Error, Result, SemanticSnowflake};

/// A 64-bit identifier, the common currency of the generator and the semantic
/// codec.
///
/// The value is signed so it maps one-to-one onto `BIGINT` columns and
/// languages without unsigned integers. Neither encoder sets the sign bit in
/// valid use, and negative values are reserved to signal invalid input (see
/// [`SnowflakeId::INVALID`]).
///
/// Read through the classic layout, an ID is:
///
/// ```text
///  Bit Index:  63           63 62            22 21          12 11             0
///              +--------------+----------------+--------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | node ID (10) | sequence (12) |
///              +--------------+----------------+--------------+---------------+
/// ```
///
/// # Example
///
/// ```
/// use semflake::SnowflakeId;
///
/// let id = SnowflakeId::from_components(1000, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.node_id(), 2);
/// assert_eq!(id.sequence(), 1);
/// assert_eq!(id.to_string(), "4194312193");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SnowflakeId {
    id: i64,
}

impl SnowflakeId {
    /// Sentinel returned by the lenient parsers when the input is not a valid
    /// identifier.
    pub const INVALID: Self = Self { id: -1 };

    /// Wraps a raw integer without any validation.
    pub const fn from_raw(raw: i64) -> Self {
        Self { id: raw }
    }

    /// Returns the raw integer.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Returns `true` unless the sign bit is set.
    pub const fn is_valid(&self) -> bool {
        self.id >= 0
    }

    /// Packs classic fields into an ID. Each field is masked to its width.
    pub const fn from_components(timestamp: u64, node_id: u64, sequence: u64) -> Self {
        let timestamp =
            (timestamp & ClassicLayout::TIMESTAMP_MASK) << ClassicLayout::TIMESTAMP_SHIFT;
        let node_id = (node_id & ClassicLayout::NODE_ID_MASK) << ClassicLayout::NODE_ID_SHIFT;
        let sequence = (sequence & ClassicLayout::SEQUENCE_MASK) << ClassicLayout::SEQUENCE_SHIFT;
        Self {
            id: (timestamp | node_id | sequence) as i64,
        }
    }

    /// Extracts the millisecond delta since the epoch.
    pub const fn timestamp(&self) -> u64 {
        ((self.id as u64) >> ClassicLayout::TIMESTAMP_SHIFT) & ClassicLayout::TIMESTAMP_MASK
    }

    /// Extracts the classic 10-bit node ID.
    pub const fn node_id(&self) -> u64 {
        ((self.id as u64) >> ClassicLayout::NODE_ID_SHIFT) & ClassicLayout::NODE_ID_MASK
    }

    /// Extracts the per-millisecond sequence.
    pub const fn sequence(&self) -> u64 {
        ((self.id as u64) >> ClassicLayout::SEQUENCE_SHIFT) & ClassicLayout::SEQUENCE_MASK
    }

    /// Returns `true` if another ID fits in the same millisecond.
    pub const fn has_sequence_room(&self) -> bool {
        self.sequence() < ClassicLayout::SEQUENCE_MASK
    }

    /// Returns the ID with the sequence bumped by one, wrapping to zero once
    /// the 12-bit space is exhausted.
    pub const fn increment_sequence(&self) -> Self {
        Self::from_components(self.timestamp(), self.node_id(), self.sequence() + 1)
    }

    /// Returns an ID for a newer timestamp with the sequence reset to zero.
    pub const fn rollover_to_timestamp(&self, timestamp: u64) -> Self {
        Self::from_components(timestamp, self.node_id(), 0)
    }

    /// Reads this ID through the semantic layout.
    pub fn to_semantic(&self) -> SemanticSnowflake {
        SemanticSnowflake::decode(*self)
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("node_id", &self.node_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}

impl From<i64> for SnowflakeId {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl FromStr for SnowflakeId {
    type Err = Error;

    /// Strict counterpart of [`SnowflakeId::from_wire_form`]: rejects
    /// non-numeric and negative input with an [`Error`].
    fn from_str(s: &str) -> Result<Self> {
        let value = s.parse::<i64>().map_err(|reason| Error::InvalidDigit {
            input: s.to_owned(),
            reason,
        })?;
        if value < 0 {
            return Err(Error::Negative { value });
        }
        Ok(Self::from_raw(value))
    }
}
