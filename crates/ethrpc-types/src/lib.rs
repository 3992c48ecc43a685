//! Validated primitive types for Ethereum JSON-RPC wire data.
//!
//! Every type here is a small immutable value that can only be obtained
//! through a validating constructor (`parse`, `FromStr`, `TryFrom`, or serde
//! deserialization). Once a value exists it is known to match its wire
//! grammar, and serializing it emits exactly the string that was accepted.
//!
//! # Key Types
//!
//! - [`Hash`]: 32-byte hash, `^0x[0-9a-f]{64}$`
//! - [`Address`]: 20-byte address, `^0x[0-9a-fA-F]{40}$`
//! - [`Quantity`]: canonical hex unsigned integer, `^0x(0|[1-9a-f][0-9a-f]*)$`
//! - [`BlockTag`]: `earliest`, `finalized`, `safe`, `latest`, or `pending`
//! - [`BlockSpecifier`]: a block by number, tag, or hash
//! - [`ValidationError`]: the single error every constructor returns
//! - [`JsonRpcError`]: the `{code, message}` error object sent on the wire
//!
//! ```
//! use ethrpc_types::{BlockSpecifier, BlockTag};
//!
//! let spec: BlockSpecifier = "latest".parse().unwrap();
//! assert_eq!(spec.as_tag(), Some(BlockTag::Latest));
//! assert!("0x01".parse::<BlockSpecifier>().is_err());
//! ```

pub mod address;
pub mod block_spec;
pub mod block_tag;
pub mod codes;
pub mod error;
pub mod hash;
pub mod quantity;
mod scan;

pub use address::{is_address, Address};
pub use block_spec::BlockSpecifier;
pub use block_tag::{is_block_tag, BlockTag};
pub use codes::{JsonRpcError, JsonRpcErrorCode};
pub use error::{PrimitiveKind, Result, ValidationError};
pub use hash::{is_hash, Hash};
pub use quantity::{is_quantity, Quantity};
