//! Ordered list of bodies currently on display.
//!
//! Each instance copies its catalog fields at add time and carries a
//! sequence id so repeated entries stay distinguishable. The list is only
//! ever appended to or reset as a whole.

use crate::catalog::{CatalogEntry, CatalogStore};
use crate::color::Rgb;
use crate::error::{ComparatorError, Result};

#[derive(Clone, PartialEq, Debug)]
pub struct DisplayedInstance {
    pub sequence_id: u64,
    pub catalog_key: String,
    pub display_name: String,
    pub diameter_km: f64,
    pub color: Rgb,
    pub category: String,
}

impl DisplayedInstance {
    fn from_entry(sequence_id: u64, entry: &CatalogEntry) -> Self {
        Self {
            sequence_id,
            catalog_key: entry.key.clone(),
            display_name: entry.display_name.clone(),
            diameter_km: entry.diameter_km,
            color: entry.color,
            category: entry.category.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    instances: Vec<DisplayedInstance>,
    next_id: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with a single `default_key` instance at id 0.
    /// The list is left untouched if the key is unknown.
    pub fn reset_to(&mut self, catalog: &CatalogStore, default_key: &str) -> Result<&DisplayedInstance> {
        let entry = catalog
            .lookup(default_key)
            .ok_or_else(|| ComparatorError::UnknownCatalogKey(default_key.to_string()))?;
        self.instances.clear();
        self.next_id = 0;
        Ok(self.push(entry))
    }

    pub fn append(&mut self, catalog: &CatalogStore, key: &str) -> Result<&DisplayedInstance> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ComparatorError::NoSelection);
        }
        let entry = catalog
            .lookup(key)
            .ok_or_else(|| ComparatorError::UnknownCatalogKey(key.to_string()))?;
        Ok(self.push(entry))
    }

    fn push(&mut self, entry: &CatalogEntry) -> &DisplayedInstance {
        let id = self.next_id;
        self.next_id += 1;
        self.instances.push(DisplayedInstance::from_entry(id, entry));
        &self.instances[self.instances.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn all(&self) -> &[DisplayedInstance] {
        &self.instances
    }

    pub fn get(&self, sequence_id: u64) -> Option<&DisplayedInstance> {
        self.instances.iter().find(|i| i.sequence_id == sequence_id)
    }

    pub fn max_diameter(&self) -> Result<f64> {
        max_diameter(&self.instances)
    }
}

pub(crate) fn max_diameter(instances: &[DisplayedInstance]) -> Result<f64> {
    instances
        .iter()
        .map(|i| i.diameter_km)
        .reduce(f64::max)
        .ok_or(ComparatorError::EmptyList)
}
