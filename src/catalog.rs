//! Crop Catalog
//!
//! Static lookup from crop identifiers to reference base yields (tons/ha)
//! and display metadata (name, category, icon). Base yields are hand-tuned
//! reference values from agronomic norms, not computed.
//!
//! `base_yield` is a total function: unrecognized identifiers resolve to
//! [`DEFAULT_BASE_YIELD`] and never fail.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base yield used for crop identifiers not present in the catalog.
pub const DEFAULT_BASE_YIELD: f64 = 5.0;

/// Crop category for catalog grouping and picker filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropCategory {
    Cereals,
    #[serde(rename = "Root Crops")]
    RootCrops,
    Legumes,
    Vegetables,
    Industrial,
    Fruits,
}

impl CropCategory {
    pub fn display_text(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "Cereals",
            CropCategory::RootCrops => "Root Crops",
            CropCategory::Legumes => "Legumes",
            CropCategory::Vegetables => "Vegetables",
            CropCategory::Industrial => "Industrial",
            CropCategory::Fruits => "Fruits",
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [CropCategory] {
        &[
            CropCategory::Cereals,
            CropCategory::RootCrops,
            CropCategory::Legumes,
            CropCategory::Vegetables,
            CropCategory::Industrial,
            CropCategory::Fruits,
        ]
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: String,
    pub name: String,
    pub category: CropCategory,
    pub icon: String,
    /// Reference yield (tons/ha) under assumed-optimal conditions.
    pub base_yield: f64,
}

/// Errors from loading a catalog override file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog JSON {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog file {path} contains no crops")]
    Empty { path: PathBuf },
}

/// Reference crops with base yields (tons/ha) from agronomic lookup data.
const CROP_TABLE: &[(&str, &str, CropCategory, &str, f64)] = &[
    ("wheat", "Wheat", CropCategory::Cereals, "🌾", 4.5),
    ("rice", "Rice", CropCategory::Cereals, "🌾", 5.2),
    ("corn", "Corn (Maize)", CropCategory::Cereals, "🌽", 7.8),
    ("barley", "Barley", CropCategory::Cereals, "🌾", 4.0),
    ("sorghum", "Sorghum", CropCategory::Cereals, "🌾", 3.5),
    ("oats", "Oats", CropCategory::Cereals, "🌾", 3.8),
    ("millet", "Millet", CropCategory::Cereals, "🌾", 2.5),
    ("potato", "Potato", CropCategory::RootCrops, "🥔", 25.0),
    ("sweet_potato", "Sweet Potato", CropCategory::RootCrops, "🍠", 18.0),
    ("cassava", "Cassava", CropCategory::RootCrops, "🥔", 20.0),
    ("carrot", "Carrot", CropCategory::RootCrops, "🥕", 35.0),
    ("soybean", "Soybean", CropCategory::Legumes, "🫘", 3.2),
    ("peanut", "Peanut", CropCategory::Legumes, "🥜", 2.8),
    ("chickpea", "Chickpea", CropCategory::Legumes, "🫘", 2.0),
    ("lentil", "Lentil", CropCategory::Legumes, "🫘", 1.8),
    ("pea", "Pea", CropCategory::Legumes, "🫛", 2.5),
    ("tomato", "Tomato", CropCategory::Vegetables, "🍅", 45.0),
    ("onion", "Onion", CropCategory::Vegetables, "🧅", 30.0),
    ("cabbage", "Cabbage", CropCategory::Vegetables, "🥬", 40.0),
    ("lettuce", "Lettuce", CropCategory::Vegetables, "🥬", 25.0),
    ("spinach", "Spinach", CropCategory::Vegetables, "🥬", 15.0),
    ("broccoli", "Broccoli", CropCategory::Vegetables, "🥦", 12.0),
    ("cauliflower", "Cauliflower", CropCategory::Vegetables, "🥦", 15.0),
    ("pepper", "Pepper", CropCategory::Vegetables, "🌶️", 20.0),
    ("cotton", "Cotton", CropCategory::Industrial, "🌱", 2.5),
    ("sugarcane", "Sugarcane", CropCategory::Industrial, "🎋", 70.0),
    ("coffee", "Coffee", CropCategory::Industrial, "☕", 1.5),
    ("tea", "Tea", CropCategory::Industrial, "🍵", 2.0),
    ("tobacco", "Tobacco", CropCategory::Industrial, "🌿", 2.0),
    ("apple", "Apple", CropCategory::Fruits, "🍎", 25.0),
    ("banana", "Banana", CropCategory::Fruits, "🍌", 30.0),
    ("grape", "Grape", CropCategory::Fruits, "🍇", 15.0),
    ("orange", "Orange", CropCategory::Fruits, "🍊", 20.0),
];

/// Crop catalog with id-keyed lookup.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<Crop>,
    index: FxHashMap<String, usize>,
}

impl Default for CropCatalog {
    fn default() -> Self {
        let crops = CROP_TABLE
            .iter()
            .map(|&(id, name, category, icon, base_yield)| Crop {
                id: id.to_string(),
                name: name.to_string(),
                category,
                icon: icon.to_string(),
                base_yield,
            })
            .collect();
        Self::from_crops(crops)
    }
}

impl CropCatalog {
    fn from_crops(crops: Vec<Crop>) -> Self {
        let index = crops
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { crops, index }
    }

    /// Load a replacement catalog from a JSON array of crop entries.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let crops: Vec<Crop> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if crops.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), crops = crops.len(), "loaded catalog override");
        Ok(Self::from_crops(crops))
    }

    /// Reference base yield (tons/ha) for a crop identifier.
    ///
    /// Total function: unknown identifiers fall back to
    /// [`DEFAULT_BASE_YIELD`] rather than failing.
    pub fn base_yield(&self, crop_id: &str) -> f64 {
        self.get(crop_id)
            .map(|c| c.base_yield)
            .unwrap_or(DEFAULT_BASE_YIELD)
    }

    /// Look up a catalog entry by identifier.
    pub fn get(&self, crop_id: &str) -> Option<&Crop> {
        self.index.get(crop_id).map(|&i| &self.crops[i])
    }

    /// All entries in catalog order.
    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Filter entries by free-text name match and category.
    ///
    /// The name match is a case-insensitive substring test; an empty query
    /// matches everything. `category: None` means "All".
    pub fn search(&self, query: &str, category: Option<CropCategory>) -> Vec<&Crop> {
        let query = query.to_lowercase();
        self.crops
            .iter()
            .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_crops_return_documented_yields() {
        let catalog = CropCatalog::default();
        assert_relative_eq!(catalog.base_yield("wheat"), 4.5);
        assert_relative_eq!(catalog.base_yield("rice"), 5.2);
        assert_relative_eq!(catalog.base_yield("potato"), 25.0);
        assert_relative_eq!(catalog.base_yield("sugarcane"), 70.0);
    }

    #[test]
    fn unknown_crop_falls_back_to_default() {
        let catalog = CropCatalog::default();
        assert_relative_eq!(catalog.base_yield("unknown_xyz"), DEFAULT_BASE_YIELD);
        assert_relative_eq!(catalog.base_yield(""), DEFAULT_BASE_YIELD);
        assert!(catalog.get("unknown_xyz").is_none());
    }

    #[test]
    fn catalog_has_all_reference_crops() {
        let catalog = CropCatalog::default();
        assert_eq!(catalog.len(), 33);
        assert_eq!(CropCategory::all().len(), 6);
    }

    #[test]
    fn search_matches_name_substring_case_insensitive() {
        let catalog = CropCatalog::default();
        let hits = catalog.search("POTATO", None);
        let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["potato", "sweet_potato"]);
    }

    #[test]
    fn search_filters_by_category() {
        let catalog = CropCatalog::default();
        let cereals = catalog.search("", Some(CropCategory::Cereals));
        assert_eq!(cereals.len(), 7);
        assert!(cereals.iter().all(|c| c.category == CropCategory::Cereals));

        // Category "All" applies no filter
        assert_eq!(catalog.search("", None).len(), catalog.len());
    }

    #[test]
    fn search_combines_query_and_category() {
        let catalog = CropCatalog::default();
        let hits = catalog.search("sweet", Some(CropCategory::RootCrops));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "sweet_potato");

        // Matching name, wrong category
        assert!(catalog.search("sweet", Some(CropCategory::Fruits)).is_empty());
    }

    #[test]
    fn from_json_file_loads_override_table() {
        let path = std::env::temp_dir().join("crop_yield_engine_catalog_override.json");
        let json = r#"[
            {"id": "wheat", "name": "Wheat", "category": "Cereals", "icon": "🌾", "base_yield": 6.0},
            {"id": "quinoa", "name": "Quinoa", "category": "Cereals", "icon": "🌾", "base_yield": 1.2}
        ]"#;
        fs::write(&path, json).unwrap();

        let catalog = CropCatalog::from_json_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_relative_eq!(catalog.base_yield("wheat"), 6.0);
        assert_relative_eq!(catalog.base_yield("quinoa"), 1.2);
        // Entries absent from the override still fall back
        assert_relative_eq!(catalog.base_yield("rice"), DEFAULT_BASE_YIELD);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn from_json_file_rejects_empty_table() {
        let path = std::env::temp_dir().join("crop_yield_engine_catalog_empty.json");
        fs::write(&path, "[]").unwrap();

        let err = CropCatalog::from_json_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Empty { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn from_json_file_reports_missing_file() {
        let path = std::env::temp_dir().join("crop_yield_engine_no_such_catalog.json");
        let err = CropCatalog::from_json_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn category_round_trips_through_serde_rename() {
        let json = serde_json::to_string(&CropCategory::RootCrops).unwrap();
        assert_eq!(json, "\"Root Crops\"");
        let back: CropCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CropCategory::RootCrops);
    }
}
