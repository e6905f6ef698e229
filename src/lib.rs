//! Index-aware region split point selection for column-family storage.
//!
//! A region stores local secondary index rows co-located with the data rows
//! they index, in separate index-prefixed column families. When the region
//! grows past its split threshold, the key it divides at must be a key some
//! data-family store would itself choose; a key unique to an index store
//! would cut through index-private key space and break the index-to-data
//! row ownership the query layer relies on.
//!
//! The region-management layer decides *when* to split; this crate decides
//! *where*. It consumes a read-only [`RegionSnapshot`] of the region's
//! stores and returns a [`SplitDecision`], with `NoSplit` as the safe
//! answer to every degenerate input.

pub mod config;
pub mod error;
pub mod family;
pub mod policy;
pub mod region;

pub use config::{SplitPolicyConfig, DEFAULT_INDEX_FAMILY_PREFIX};
pub use error::{Result, SplitError};
pub use family::{FamilyMatcher, FamilyRole};
pub use policy::{baseline_split_point, SplitDecision, SplitPointSelector};
pub use region::{RegionSnapshot, StoreSnapshot};
