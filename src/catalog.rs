//! Static catalog of celestial bodies.
//!
//! The catalog is read-only once constructed. The core only ever looks
//! entries up by key; enumeration exists for the selection widget.

use crate::color::Rgb;
use crate::error::{ComparatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub key: String,
    pub display_name: String,
    pub diameter_km: f64,
    pub color: Rgb,
    pub category: String,
}

impl CatalogEntry {
    fn builtin(key: &str, display_name: &str, diameter_km: f64, color: u32, category: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            diameter_km,
            color: Rgb::from_u32(color),
            category: category.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(ComparatorError::Catalog(format!("entry {i} has an empty key")));
            }
            if !entry.diameter_km.is_finite() || entry.diameter_km <= 0.0 {
                return Err(ComparatorError::Catalog(format!(
                    "{} has invalid diameter {}",
                    entry.key, entry.diameter_km
                )));
            }
            if index.insert(entry.key.clone(), i).is_some() {
                return Err(ComparatorError::Catalog(format!("duplicate key {}", entry.key)));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::builtin("moon", "Moon", 3474.0, 0xc0c0c0, "Moon"),
            CatalogEntry::builtin("mercury", "Mercury", 4879.0, 0x8c7853, "Planet"),
            CatalogEntry::builtin("mars", "Mars", 6779.0, 0xcd5c5c, "Planet"),
            CatalogEntry::builtin("venus", "Venus", 12104.0, 0xffd700, "Planet"),
            CatalogEntry::builtin("earth", "Earth", 12742.0, 0x4169e1, "Planet"),
            CatalogEntry::builtin("neptune", "Neptune", 49528.0, 0x4169ff, "Planet"),
            CatalogEntry::builtin("uranus", "Uranus", 51118.0, 0x4fd0e0, "Planet"),
            CatalogEntry::builtin("saturn", "Saturn", 120536.0, 0xfad5a5, "Planet"),
            CatalogEntry::builtin("jupiter", "Jupiter", 142984.0, 0xdaa520, "Planet"),
            CatalogEntry::builtin("sun", "Sun", 1392700.0, 0xffcc00, "Star"),
            CatalogEntry::builtin("betelgeuse", "Betelgeuse", 887000000.0, 0xff4500, "Red supergiant"),
            CatalogEntry::builtin("antares", "Antares", 883000000.0, 0xff6347, "Red supergiant"),
            CatalogEntry::builtin("rigel", "Rigel", 109000000.0, 0x87ceeb, "Blue supergiant"),
            CatalogEntry::builtin("aldebaran", "Aldebaran", 61400000.0, 0xff8c00, "Red giant"),
        ];
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Self { entries, index }
    }

    pub fn lookup(&self, key: &str) -> Option<&CatalogEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in catalog order, for populating the selection widget.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::builtin()
    }
}
