//! Read-only store snapshots for split decisions.
//!
//! A region is backed by one physical store per column family. At decision
//! time the region-management layer materializes a snapshot of every open
//! store (family name, on-disk size, and the store's own preferred split
//! key) and hands it to the selector. The snapshot is never mutated here;
//! if the underlying stores change before the split executes, that is the
//! caller's consistency problem.
//!
//! Stores are held sorted by family name. The fallback scan in the selector
//! breaks size ties by taking the first store it encounters, so iteration
//! order must be reproducible across calls; sorting at construction makes
//! the decision independent of the order the caller assembled the input.

use crate::error::{Result, SplitError};

/// Read-only view of one store at decision time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Column family this store backs. Unique within a region.
    pub family_name: String,
    /// Total on-disk size of the store's files.
    pub size_bytes: u64,
    /// The split key this store would independently prefer, from its
    /// internal midpoint heuristic. None if the store has no eligible key
    /// (e.g. a single block, or empty).
    pub split_point: Option<Vec<u8>>,
}

impl StoreSnapshot {
    pub fn new(
        family_name: impl Into<String>,
        size_bytes: u64,
        split_point: Option<Vec<u8>>,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            size_bytes,
            split_point,
        }
    }
}

/// Snapshot of all stores open in a region, sorted by family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSnapshot {
    stores: Vec<StoreSnapshot>,
}

impl RegionSnapshot {
    /// Build a snapshot from the region's stores.
    ///
    /// Sorts by family name and rejects duplicate family names; a region
    /// has exactly one store per family.
    pub fn new(mut stores: Vec<StoreSnapshot>) -> Result<Self> {
        stores.sort_by(|a, b| a.family_name.cmp(&b.family_name));
        for pair in stores.windows(2) {
            if pair[0].family_name == pair[1].family_name {
                return Err(SplitError::DuplicateFamily(pair[0].family_name.clone()));
            }
        }
        Ok(Self { stores })
    }

    /// Stores in family-name order.
    pub fn stores(&self) -> &[StoreSnapshot] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

// ── Tests ──────────────────────────────────────────────────────────
