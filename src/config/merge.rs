//! Flat top-level merge
//!
//! Later sources overwrite earlier ones key by key. Nested values are replaced
//! wholesale, never merged.

use crate::domain::{ConfigMap, Origin};
use std::collections::BTreeMap;

/// In-progress merged mapping plus the origin of each key.
#[derive(Debug, Default)]
pub struct Accumulator {
    values: ConfigMap,
    origins: BTreeMap<String, Origin>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one source. Returns the number of keys that replaced an existing value.
    pub fn merge(&mut self, layer: ConfigMap, origin: &Origin) -> usize {
        let mut overridden = 0;
        for (key, value) in layer {
            if self.values.insert(key.clone(), value).is_some() {
                overridden += 1;
            }
            self.origins.insert(key, origin.clone());
        }
        overridden
    }

    pub fn into_parts(self) -> (ConfigMap, BTreeMap<String, Origin>) {
        (self.values, self.origins)
    }
}
