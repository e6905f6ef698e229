//! Column family role classification.
//!
//! A region stores local secondary index rows in families whose names carry
//! a reserved prefix; every other family holds base table data. The role is
//! a pure function of the name string; there is no separate identity.
//!
//! The reserved prefix belongs to the surrounding schema/catalog layer and
//! is supplied at construction (see [`SplitPolicyConfig`]), so it can be
//! reconfigured without touching the split algorithm.

use crate::config::SplitPolicyConfig;
use crate::error::{Result, SplitError};

/// Role of a column family within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyRole {
    /// Base table data.
    Data,
    /// Local secondary index, co-located with the data rows it indexes.
    Index,
}

/// Compiled prefix test: family name -> [`FamilyRole`].
#[derive(Debug, Clone)]
pub struct FamilyMatcher {
    index_prefix: String,
}

impl FamilyMatcher {
    /// Create a matcher for the given reserved index-family prefix.
    ///
    /// An empty prefix is rejected: it would classify every family as an
    /// index family and the region could never split.
    pub fn new(index_prefix: impl Into<String>) -> Result<Self> {
        let index_prefix = index_prefix.into();
        if index_prefix.is_empty() {
            return Err(SplitError::EmptyIndexPrefix);
        }
        Ok(Self { index_prefix })
    }

    /// Build a matcher from a persisted config.
    pub fn from_config(config: &SplitPolicyConfig) -> Result<Self> {
        Self::new(config.index_family_prefix.clone())
    }

    /// The reserved prefix this matcher tests against.
    pub fn index_prefix(&self) -> &str {
        &self.index_prefix
    }

    /// Classify a family name.
    pub fn role(&self, family_name: &str) -> FamilyRole {
        if family_name.starts_with(&self.index_prefix) {
            FamilyRole::Index
        } else {
            FamilyRole::Data
        }
    }

    /// True if the family holds local index rows.
    #[inline]
    pub fn is_index(&self, family_name: &str) -> bool {
        self.role(family_name) == FamilyRole::Index
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INDEX_FAMILY_PREFIX;

    #[test]
    fn test_default_prefix_classifies_index_families() {
        let matcher = FamilyMatcher::new(DEFAULT_INDEX_FAMILY_PREFIX).unwrap();
        assert_eq!(matcher.role("L#0"), FamilyRole::Index);
        assert_eq!(matcher.role("L#idx_name"), FamilyRole::Index);
        assert_eq!(matcher.role("0"), FamilyRole::Data);
        assert_eq!(matcher.role("cf1"), FamilyRole::Data);
    }

    #[test]
    fn test_prefix_must_match_at_start() {
        let matcher = FamilyMatcher::new("L#").unwrap();
        // Prefix appearing mid-name does not make an index family.
        assert_eq!(matcher.role("dataL#0"), FamilyRole::Data);
    }

    #[test]
    fn test_custom_prefix() {
        let matcher = FamilyMatcher::new("idx_").unwrap();
        assert!(matcher.is_index("idx_users_by_email"));
        assert!(!matcher.is_index("users"));
        assert_eq!(matcher.index_prefix(), "idx_");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = FamilyMatcher::new("").unwrap_err();
        assert!(matches!(err, SplitError::EmptyIndexPrefix));
    }
}
