//! Field widths and offsets shared by every 64-bit identifier.
//!
//! Fields are ordered from most to least significant. The classic layout never
//! touches bit 63 (the sign bit). The semantic layout lets the object ID reach
//! it, so a semantic ID stays a valid (non-negative) identifier only while its
//! object ID is below 2^40.
//!
//! ```text
//!  Classic:
//!  Bit Index:  63           63 62            22 21          12 11             0
//!              +--------------+----------------+--------------+---------------+
//!  Field:      | reserved (1) | timestamp (41) | node ID (10) | sequence (12) |
//!              +--------------+----------------+--------------+---------------+
//!
//!  Semantic:
//!  Bit Index:                 63            23 22          10 9              0
//!                             +----------------+--------------+---------------+
//!  Field:                     | object ID (41) | node ID (13) |  type ID (10) |
//!                             +----------------+--------------+---------------+
//!                             |<------ MSB ------- 64 bits ------- LSB ------>|
//! ```
//!
//! A semantic ID keeps node + type in its low 23 bits, the span a classic ID
//! spends on node + sequence plus the lowest timestamp bit. Callers that know
//! which node IDs use which scheme can mix both kinds in one ID space.

/// Layout of clock-based identifiers produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicLayout;

impl ClassicLayout {
    /// Width of the millisecond delta since the epoch.
    pub const TIMESTAMP_BITS: u32 = 41;
    /// Width of the node ID.
    pub const NODE_ID_BITS: u32 = 10;
    /// Width of the per-millisecond sequence.
    pub const SEQUENCE_BITS: u32 = 12;

    /// Bitmask for the 41-bit timestamp field. Occupies bits 22 through 62.
    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    /// Bitmask for the 10-bit node ID field. Occupies bits 12 through 21.
    pub const NODE_ID_MASK: u64 = (1 << Self::NODE_ID_BITS) - 1;
    /// Bitmask for the 12-bit sequence field. Occupies bits 0 through 11.
    pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Number of bits to shift the timestamp to its position (bit 22).
    pub const TIMESTAMP_SHIFT: u32 = Self::NODE_ID_BITS + Self::SEQUENCE_BITS;
    /// Number of bits to shift the node ID to its position (bit 12).
    pub const NODE_ID_SHIFT: u32 = Self::SEQUENCE_BITS;
    /// Number of bits to shift the sequence field (bit 0).
    pub const SEQUENCE_SHIFT: u32 = 0;
}

/// Layout of identifiers packed from a pre-existing (object, node, type)
/// triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticLayout;

impl SemanticLayout {
    /// Width of the object ID.
    pub const OBJECT_ID_BITS: u32 = 41;
    /// Width of the node (system) ID.
    pub const NODE_ID_BITS: u32 = 13;
    /// Width of the type (class) ID.
    pub const TYPE_ID_BITS: u32 = 10;
    /// Width of the combined node + type value.
    pub const GLOBAL_TYPE_ID_BITS: u32 = Self::NODE_ID_BITS + Self::TYPE_ID_BITS;

    /// Number of distinct node IDs; encode reduces modulo this value.
    pub const NODE_ID_MODULUS: i64 = 1 << Self::NODE_ID_BITS;
    /// Number of distinct type IDs; encode reduces modulo this value.
    pub const TYPE_ID_MODULUS: i64 = 1 << Self::TYPE_ID_BITS;

    /// Bitmask for the 10-bit type ID field. Occupies bits 0 through 9.
    pub const TYPE_ID_MASK: u64 = (1 << Self::TYPE_ID_BITS) - 1;
    /// Bitmask for the 23-bit global type ID. Occupies bits 0 through 22.
    pub const GLOBAL_TYPE_ID_MASK: u64 = (1 << Self::GLOBAL_TYPE_ID_BITS) - 1;

    /// Number of bits to shift the object ID to its position (bit 23).
    pub const OBJECT_ID_SHIFT: u32 = Self::GLOBAL_TYPE_ID_BITS;
    /// Number of bits to shift the node ID to its position (bit 10).
    pub const NODE_ID_SHIFT: u32 = Self::TYPE_ID_BITS;

    /// Smallest global type ID with a non-zero node ID. Node ID 0 is reserved,
    /// which leaves `1025..=8_388_607` for class IDs.
    pub const MIN_GLOBAL_TYPE_ID: i64 = Self::TYPE_ID_MODULUS + 1;
    /// Largest global type ID.
    pub const MAX_GLOBAL_TYPE_ID: i64 = Self::GLOBAL_TYPE_ID_MASK as i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_widths() {
        assert_eq!(
            ClassicLayout::TIMESTAMP_BITS
                + ClassicLayout::NODE_ID_BITS
                + ClassicLayout::SEQUENCE_BITS,
            63
        );
        assert_eq!(
            SemanticLayout::OBJECT_ID_BITS + SemanticLayout::GLOBAL_TYPE_ID_BITS,
            64
        );
        assert_eq!(ClassicLayout::TIMESTAMP_SHIFT, 22);
        assert_eq!(SemanticLayout::OBJECT_ID_SHIFT, 23);
    }

    #[test]
    fn global_type_id_range() {
        assert_eq!(SemanticLayout::GLOBAL_TYPE_ID_MASK, 0x7F_FFFF);
        assert_eq!(SemanticLayout::MIN_GLOBAL_TYPE_ID, 1025);
        assert_eq!(SemanticLayout::MAX_GLOBAL_TYPE_ID, 8_388_607);
    }
}
