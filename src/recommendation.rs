//! Static pet recommendation table
//!
//! Records are keyed by `"<energy>-<size>-<temperament>"` using canonical
//! slot values. The table is loaded once and shared read-only.

use crate::error::{Result, SkillError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Dataset shipped with the crate
const BUILTIN_DATA: &str = include_str!("../data/pet_match.json");

/// A single recommendation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub breed: String,
}

/// The `apiResponse` body returned for a successful recommendation
///
/// Attribute values are the user's original arguments, not the canonical
/// values used for the lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntity {
    pub name: String,
    pub size: serde_json::Value,
    pub energy: serde_json::Value,
    pub temperament: serde_json::Value,
}

/// Immutable keyed recommendation table
#[derive(Debug, Clone, Default)]
pub struct RecommendationTable {
    records: HashMap<String, RecommendationRecord>,
}

/// Build the composite lookup key
pub fn composite_key(energy: &str, size: &str, temperament: &str) -> String {
    format!("{}-{}-{}", energy, size, temperament)
}

impl RecommendationTable {
    /// Load the dataset embedded in the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATA)
    }

    /// Parse a JSON object of `key → {breed}` entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: HashMap<String, RecommendationRecord> = serde_json::from_str(json)
            .map_err(|e| SkillError::RecommendationData(format!("Failed to parse dataset: {}", e)))?;
        Ok(Self { records })
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SkillError::RecommendationData(format!(
                "Failed to read dataset {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_json_str(&json)?;

        tracing::debug!(
            path = %path.display(),
            count = table.len(),
            "Recommendation data loaded"
        );
        Ok(table)
    }

    /// Look up a record by its composite key
    pub fn get(&self, key: &str) -> Option<&RecommendationRecord> {
        self.records.get(key)
    }

    /// Look up a record by its three attributes
    pub fn lookup(&self, energy: &str, size: &str, temperament: &str) -> Option<&RecommendationRecord> {
        self.get(&composite_key(energy, size, temperament))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_key() {
        assert_eq!(composite_key("high", "small", "friendly"), "high-small-friendly");
    }

    #[test]
    fn test_builtin_table() {
        let table = RecommendationTable::builtin().unwrap();
        assert_eq!(table.len(), 27);
        assert_eq!(
            table.lookup("high", "small", "friendly").unwrap().breed,
            "Chihuahua"
        );
        assert!(table.lookup("high", "tiny", "friendly").is_none());
    }

    #[test]
    fn test_from_json_str() {
        let table = RecommendationTable::from_json_str(
            r#"{"low-large-guard": {"breed": "Bullmastiff", "extra": 1}}"#,
        )
        .unwrap();
        assert_eq!(table.get("low-large-guard").unwrap().breed, "Bullmastiff");
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = RecommendationTable::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, SkillError::RecommendationData(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = RecommendationTable::from_path("/tmp/nonexistent-petmatch-data.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("petmatch-data-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"medium-medium-family": {"breed": "Beagle"}}"#).unwrap();

        let table = RecommendationTable::from_path(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("medium", "medium", "family").unwrap().breed, "Beagle");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_entity_serialization() {
        let entity = RecommendationEntity {
            name: "Chihuahua".to_string(),
            size: "tiny".into(),
            energy: "hyper".into(),
            temperament: "sweet".into(),
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Chihuahua", "size": "tiny", "energy": "hyper", "temperament": "sweet"})
        );
    }
}
