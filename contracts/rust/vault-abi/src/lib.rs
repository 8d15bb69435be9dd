//! ABI tables of the tokenized vault contract, one per released contract version.
//!
//! Each table is a flat, immutable snapshot of the deployed interface: the constructor, every
//! function (including overloads), every event and every custom error, in artifact order. The
//! canonical ABI-JSON artifacts live under `abi/` and are embedded at compile time. They are
//! parsed and structurally validated the first time a table is accessed.
//!
//! ```ignore
//! use vault_abi::{VaultVersion, VAULT_ABI_V0_5_0};
//!
//! assert!(VAULT_ABI_V0_5_0.has_function("version"));
//! assert!(!VaultVersion::V0_1_0.abi().has_function("version"));
//! ```

mod artifacts;
pub mod error;
pub mod table;
pub mod validate;
pub mod version;

pub use artifacts::*;
pub use error::VaultAbiError;
pub use table::{entry_name, find_across_versions, EntryKind, VaultAbi};
pub use version::VaultVersion;
