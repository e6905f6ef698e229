//! Index-aware split point selection.
//!
//! Local index rows live in the same region as the data rows they index,
//! under index-prefixed families. A split key chosen from index-private key
//! space would divide an index entry from the data row that owns it, so the
//! region must only ever split at a key some data-family store would itself
//! pick. Selection runs in two composed passes:
//!
//! 1. [`baseline_split_point`], the generic size policy: the natural split
//!    point of the single largest store, any family.
//! 2. [`SplitPointSelector::refine`], which vetoes the baseline if an
//!    index-family store owns it and re-derives from data-family stores only.
//!
//! Both passes are pure computations over the snapshot; declining to split
//! is always a legal outcome and is the answer to every degenerate input.

use crate::family::FamilyMatcher;
use crate::region::RegionSnapshot;

// ── Decision ────────────────────────────────────────────────────────

/// Outcome of a split point selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitDecision {
    /// No safe split key exists right now; try again at the next
    /// eligibility check.
    NoSplit,
    /// Divide the region at this key.
    SplitAt(Vec<u8>),
}

impl SplitDecision {
    /// The chosen key, if any.
    pub fn key(&self) -> Option<&[u8]> {
        match self {
            SplitDecision::NoSplit => None,
            SplitDecision::SplitAt(key) => Some(key),
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, SplitDecision::SplitAt(_))
    }
}

// ── Baseline Size Policy ────────────────────────────────────────────

/// Generic size-based split point: the natural split point of the single
/// largest store, irrespective of family role.
///
/// Returns None when the region is empty, all stores are zero bytes, or
/// the largest store has no split point of its own. Equal sizes keep the
/// first store in snapshot order (sorted by family name).
pub fn baseline_split_point(region: &RegionSnapshot) -> Option<Vec<u8>> {
    let mut largest_size = 0u64;
    let mut largest = None;
    for store in region.stores() {
        if store.size_bytes > largest_size {
            largest_size = store.size_bytes;
            largest = Some(store);
        }
    }
    largest.and_then(|store| store.split_point.clone())
}

// ── Selector ────────────────────────────────────────────────────────

/// Stateless split point selector for regions carrying local index
/// families.
///
/// Holds only the family matcher; every call is an independent pure
/// computation over the supplied snapshot, safe to run concurrently for
/// different regions.
#[derive(Debug, Clone)]
pub struct SplitPointSelector {
    matcher: FamilyMatcher,
}

impl SplitPointSelector {
    pub fn new(matcher: FamilyMatcher) -> Self {
        Self { matcher }
    }

    /// Full selection: baseline size policy, then the index-ownership
    /// refine pass. This is the entry point for the region-management
    /// layer's split-evaluation path.
    pub fn select_split_point(&self, region: &RegionSnapshot) -> SplitDecision {
        self.refine(region, baseline_split_point(region).as_deref())
    }

    /// Refine a baseline split key against index-family ownership.
    ///
    /// 1. No baseline -> `NoSplit`; there is nothing to refine.
    /// 2. If any index-family store's own split point equals the baseline
    ///    byte-for-byte, the baseline is index-owned and must be discarded.
    /// 3. Otherwise the baseline is safe; return it unchanged.
    /// 4. Index-owned: re-derive from data-family stores only, taking the
    ///    split point of the strictly largest store that has one. A larger
    ///    store with no split point is skipped, and a zero-byte store
    ///    never wins. No usable data-family split point -> `NoSplit`,
    ///    never an index-owned key.
    pub fn refine(&self, region: &RegionSnapshot, baseline: Option<&[u8]>) -> SplitDecision {
        let Some(baseline) = baseline else {
            return SplitDecision::NoSplit;
        };

        let index_owned = region.stores().iter().any(|store| {
            self.matcher.is_index(&store.family_name)
                && store.split_point.as_deref() == Some(baseline)
        });
        if !index_owned {
            return SplitDecision::SplitAt(baseline.to_vec());
        }

        tracing::debug!(
            key_len = baseline.len(),
            "baseline split key is owned by a local index family, re-deriving from data families"
        );

        let mut largest_size = 0u64;
        let mut candidate: Option<&[u8]> = None;
        for store in region.stores() {
            if self.matcher.is_index(&store.family_name) {
                continue;
            }
            if let Some(split_point) = store.split_point.as_deref() {
                if store.size_bytes > largest_size {
                    largest_size = store.size_bytes;
                    candidate = Some(split_point);
                }
            }
        }

        match candidate {
            Some(key) => SplitDecision::SplitAt(key.to_vec()),
            None => {
                tracing::debug!("no data-family store has a usable split point, declining to split");
                SplitDecision::NoSplit
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────
