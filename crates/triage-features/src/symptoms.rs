//! Symptom code lookup table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Maps a symptom string to the integer code used at training time.
///
/// Lookups are case-insensitive. An unknown symptom encodes to 0, the same
/// code the model was trained to read as "no symptom". Unknown non-empty
/// symptoms are logged so the collapse shows up in data-quality reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomTable {
    codes: BTreeMap<String, u32>,
}

impl Default for SymptomTable {
    fn default() -> Self {
        let mut codes = BTreeMap::new();
        codes.insert("fièvre".to_string(), 1);
        codes.insert("douleur thoracique".to_string(), 2);
        codes.insert("essoufflement".to_string(), 3);
        codes.insert("nausée".to_string(), 4);
        codes.insert("malaise".to_string(), 5);
        codes.insert("traumatisme".to_string(), 6);
        Self { codes }
    }
}

impl SymptomTable {
    /// Create a table from an explicit mapping.
    pub fn new(codes: BTreeMap<String, u32>) -> Self {
        Self { codes }
    }

    /// Look up the code for a symptom string.
    pub fn code(&self, symptom: &str) -> u32 {
        let key = symptom.to_lowercase();
        if key.is_empty() {
            return 0;
        }
        match self.codes.get(&key) {
            Some(&code) => code,
            None => {
                warn!(symptom = %key, "unmapped symptom, encoding as 0");
                0
            }
        }
    }

    /// Number of mapped symptoms.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
