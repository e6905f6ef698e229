//! Split policy configuration.
//!
//! The reserved local-index family prefix is a catalog-level constant owned
//! by the surrounding system. It is persisted as `split_policy.json` at a
//! caller-supplied root, read on open, and handed to the selector at
//! construction; the algorithm itself never hard-codes the prefix.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reserved prefix marking local-index column families, as registered by
/// the catalog layer. Overridable via [`SplitPolicyConfig`].
pub const DEFAULT_INDEX_FAMILY_PREFIX: &str = "L#";

/// Persistent split policy configuration.
///
/// Written once when the surrounding system registers its naming
/// convention, read on every open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitPolicyConfig {
    /// Family names starting with this prefix hold local index rows.
    pub index_family_prefix: String,
}

impl Default for SplitPolicyConfig {
    fn default() -> Self {
        Self {
            index_family_prefix: DEFAULT_INDEX_FAMILY_PREFIX.to_string(),
        }
    }
}

impl SplitPolicyConfig {
    /// Read config from a root directory. Returns None if the file doesn't exist.
    pub fn read_from(root: &Path) -> Result<Option<Self>> {
        let path = root.join("split_policy.json");
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(Some(config))
    }

    /// Write config to a root directory.
    pub fn write_to(&self, root: &Path) -> Result<()> {
        let path = root.join("split_policy.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        let config = SplitPolicyConfig::default();
        assert_eq!(config.index_family_prefix, "L#");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SplitPolicyConfig {
            index_family_prefix: "IDX:".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SplitPolicyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_json_field_names() {
        let config = SplitPolicyConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"index_family_prefix\":\"L#\""));
    }

    #[test]
    fn test_read_missing_returns_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let read = SplitPolicyConfig::read_from(dir.path()).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = SplitPolicyConfig {
            index_family_prefix: "local#".to_string(),
        };
        config.write_to(dir.path()).unwrap();

        let read = SplitPolicyConfig::read_from(dir.path()).unwrap();
        assert_eq!(read, Some(config));
    }
}
