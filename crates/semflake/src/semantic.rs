use crate::{NetSnowflake, SemanticLayout, SnowflakeId};

/// An identifier viewed as an (object, node, type) triple.
///
/// Semantic IDs are packed from values the caller already owns rather than
/// from a clock: the object's own key goes in `id`, the owning system in
/// `node_id` and the object's class in `type_id`. Together, the reduced node
/// and type form the [global type ID](Self::global_type_id) (a class ID in
/// `1025..=8_388_607` whenever the node ID is non-zero).
///
/// Fields are plain public values, so a triple can be built with a struct
/// literal or edited in place; everything derived from them is computed on
/// demand.
///
/// ```text
///  Bit Index:  63            23 22          10 9              0
///              +----------------+--------------+---------------+
///  Field:      | object ID (41) | node ID (13) |  type ID (10) |
///              +----------------+--------------+---------------+
///                               |<--- global type ID (23) ---->|
/// ```
///
/// Decoding is total and exact. Encoding reduces the node ID modulo 8192 and
/// the type ID modulo 1024, so out-of-range values alias silently instead of
/// failing.
///
/// # Example
///
/// ```
/// use semflake::SemanticSnowflake;
///
/// let triple = SemanticSnowflake::new(340_524_230_265, 50, 100);
/// let id = triple.encode();
/// assert_eq!(SemanticSnowflake::decode(id), triple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SemanticSnowflake {
    /// Object ID, the high 41 bits.
    pub id: i64,
    /// Node (system) ID, the middle 13 bits.
    pub node_id: i64,
    /// Type (class) ID, the low 10 bits.
    pub type_id: i64,
}

impl SemanticSnowflake {
    /// Builds a triple. Node and type IDs are stored as given and reduced
    /// when read or encoded.
    pub const fn new(id: i64, node_id: i64, type_id: i64) -> Self {
        Self {
            id,
            node_id,
            type_id,
        }
    }

    /// Splits `flake` into its semantic fields.
    ///
    /// Shifts are performed on the unsigned bit pattern, so the object ID keeps
    /// all 41 high bits, including the sign bit.
    pub const fn decode(flake: SnowflakeId) -> Self {
        let raw = flake.to_raw() as u64;

        let id = raw >> SemanticLayout::OBJECT_ID_SHIFT;
        let node_id = (raw << SemanticLayout::OBJECT_ID_BITS)
            >> (SemanticLayout::OBJECT_ID_BITS + SemanticLayout::TYPE_ID_BITS);
        let type_id = raw & SemanticLayout::TYPE_ID_MASK;

        Self {
            id: id as i64,
            node_id: node_id as i64,
            type_id: type_id as i64,
        }
    }

    /// Packs the triple into an identifier.
    ///
    /// Object ID bits above the 41-bit field are shifted out. Node and type IDs
    /// are reduced by [`Self::node_id`] and [`Self::type_id`].
    pub const fn encode(&self) -> SnowflakeId {
        let raw = (self.id << SemanticLayout::OBJECT_ID_SHIFT)
            | (self.node_id() << SemanticLayout::NODE_ID_SHIFT)
            | self.type_id();
        SnowflakeId::from_raw(raw)
    }

    /// Returns the object ID.
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the node ID reduced modulo 8192.
    pub const fn node_id(&self) -> i64 {
        self.node_id.rem_euclid(SemanticLayout::NODE_ID_MODULUS)
    }

    /// Returns the type ID reduced modulo 1024.
    pub const fn type_id(&self) -> i64 {
        self.type_id.rem_euclid(SemanticLayout::TYPE_ID_MODULUS)
    }

    /// Returns the reduced node and type IDs combined, the low 23 bits of
    /// [`Self::encode`].
    pub const fn global_type_id(&self) -> i64 {
        (self.node_id() << SemanticLayout::NODE_ID_SHIFT) | self.type_id()
    }

    /// Encodes the triple and renders it in decimal wire form.
    pub fn to_net_snowflake(&self) -> NetSnowflake {
        NetSnowflake::from(self.encode())
    }
}

impl From<SnowflakeId> for SemanticSnowflake {
    fn from(flake: SnowflakeId) -> Self {
        Self::decode(flake)
    }
}

impl From<SemanticSnowflake> for SnowflakeId {
    fn from(semantic: SemanticSnowflake) -> Self {
        semantic.encode()
    }
}
