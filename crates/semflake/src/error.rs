use thiserror::Error;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from the strict parsing paths.
///
/// The sentinel-based helpers ([`SnowflakeId::from_wire_form`],
/// [`NetSnowflake::to_id`]) never return this type; they map every failure to
/// [`SnowflakeId::INVALID`] instead.
///
/// [`SnowflakeId::from_wire_form`]: crate::SnowflakeId::from_wire_form
/// [`SnowflakeId::INVALID`]: crate::SnowflakeId::INVALID
/// [`NetSnowflake::to_id`]: crate::NetSnowflake::to_id
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a base-10 integer that fits in 64 signed bits.
    #[error("invalid snowflake id {input:?}: {reason}")]
    InvalidDigit {
        /// The rejected input.
        input: String,
        /// The underlying integer parse failure.
        #[source]
        reason: core::num::ParseIntError,
    },

    /// The input parsed, but negative values are never valid identifiers.
    #[error("snowflake id must be non-negative, got {value}")]
    Negative {
        /// The parsed value.
        value: i64,
    },
}
