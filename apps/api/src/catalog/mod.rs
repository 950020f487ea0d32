// Faculty Catalog: the immutable set of faculty records the advisor recommends from.
// Loaded once at startup and shared read-only across every request.

pub mod loader;
pub mod render;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use loader::load_catalog;
pub use render::render_catalog;

/// A single faculty member as listed in the bundled dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(alias = "profileUrl")]
    pub profile_url: String,
}

/// Ordered, read-only list of faculty records.
///
/// Cloning is cheap (shared `Arc`), so the catalog is passed by value into
/// `AppState` and by reference into the recommender.
#[derive(Debug, Clone)]
pub struct FacultyCatalog {
    records: Arc<[FacultyRecord]>,
}

impl FacultyCatalog {
    pub fn new(records: Vec<FacultyRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[FacultyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacultyRecord> {
        self.records.iter()
    }
}

impl Default for FacultyCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
