//! 64-bit Snowflake identifiers from two sources that share one bit layout:
//!
//! - [`SnowflakeGenerator`] allocates clock-based IDs (41-bit millisecond
//!   delta since [`BASE_EPOCH`], 10-bit node ID, 12-bit sequence).
//! - [`SemanticSnowflake`] packs an existing (object, node, type) triple into
//!   the same 64 bits and unpacks it again.
//!
//! IDs travel as decimal strings ([`NetSnowflake`], and the `serde` adapter on
//! [`SnowflakeId`]) wherever numbers are stored as doubles.
//!
//! ```
//! use semflake::{SemanticSnowflake, SnowflakeGenerator, SnowflakeId};
//!
//! let generator = SnowflakeGenerator::new(1);
//! let id = generator.next_id();
//! assert_eq!(SnowflakeId::from_wire_form(id.to_wire_form().as_str()), id);
//!
//! let semantic = SemanticSnowflake::new(340_524_230_265, 50, 100);
//! assert_eq!(semantic.encode().to_semantic(), semantic);
//! ```

mod error;
mod generator;
mod id;
mod layout;
mod semantic;
#[cfg(feature = "serde")]
mod serde;
mod time;
mod wire;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::layout::*;
pub use crate::semantic::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
pub use crate::wire::*;
