/// Project catalog
///
/// This module owns all portfolio content:
/// - Record types shared with the UI (data.rs)
/// - Filtering and search over the records (filter.rs)
/// - The catalog container with lookup and facet queries (below)

pub mod data;
pub mod filter;

use data::ProjectRecord;
use thiserror::Error;

/// The catalog document bundled into the binary at build time.
const CATALOG_JSON: &str = include_str!("../../assets/projects.json");

/// Failure to construct the catalog at startup.
///
/// The catalog is load-bearing: the application refuses to start without it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse the bundled catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project id {id} in catalog")]
    DuplicateId { id: i64 },
    #[error("project {id} has no images")]
    EmptyGallery { id: i64 },
}

/// The fixed, in-memory collection of project records.
///
/// Constructed once at startup from the bundled document; never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Parse and validate the bundled catalog document.
    pub fn load() -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(CATALOG_JSON)?;
        Self::from_projects(projects)
    }

    /// Build a catalog from records, enforcing the catalog invariants:
    /// ids are unique and every project has at least one image.
    pub fn from_projects(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = Vec::with_capacity(projects.len());
        for project in &projects {
            if seen.contains(&project.id) {
                return Err(CatalogError::DuplicateId { id: project.id });
            }
            if project.images.is_empty() {
                return Err(CatalogError::EmptyGallery { id: project.id });
            }
            seen.push(project.id);
        }
        Ok(Catalog { projects })
    }

    /// All records, in catalog order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Number of projects in the catalog.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by id. `None` means the caller should show the
    /// not-found screen; lookup itself never fails.
    pub fn get(&self, id: i64) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Highlighted projects, in catalog order.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Distinct categories in first-seen catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    /// Distinct years, newest first.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = Vec::new();
        for project in &self.projects {
            if !years.contains(&project.year) {
                years.push(project.year.clone());
            }
        }
        years.sort_by(|a, b| b.cmp(a));
        years
    }

    /// File names of every artwork referenced by the catalog, deduplicated.
    pub fn image_files(&self) -> Vec<String> {
        let mut files: Vec<String> = Vec::new();
        for project in &self.projects {
            for file in &project.images {
                if !files.contains(file) {
                    files.push(file.clone());
                }
            }
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, images: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {id}"),
            category: "Print Design".to_string(),
            year: "2024".to_string(),
            client: "Client".to_string(),
            duration: "2 weeks".to_string(),
            description: "A project.".to_string(),
            challenge: String::new(),
            solution: String::new(),
            process: vec![],
            results: String::new(),
            tools: vec![],
            tags: vec![],
            images: images.iter().map(|s| s.to_string()).collect(),
            featured: false,
        }
    }

    #[test]
    fn bundled_catalog_loads_and_validates() {
        let catalog = Catalog::load().expect("bundled catalog must be valid");
        assert!(!catalog.is_empty());
        assert!(!catalog.featured().is_empty());
        assert!(!catalog.categories().is_empty());
        assert!(!catalog.years().is_empty());
    }

    #[test]
    fn lookup_finds_every_bundled_id() {
        let catalog = Catalog::load().unwrap();
        for project in catalog.projects() {
            let found = catalog.get(project.id).expect("id must resolve");
            assert_eq!(found, project);
        }
    }

    #[test]
    fn lookup_misses_yield_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(-1).is_none());
        assert!(catalog.get(9_999).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::from_projects(vec![
            record(1, &["a.jpg"]),
            record(1, &["b.jpg"]),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { id: 1 })));
    }

    #[test]
    fn empty_galleries_are_rejected() {
        let result = Catalog::from_projects(vec![record(3, &[])]);
        assert!(matches!(result, Err(CatalogError::EmptyGallery { id: 3 })));
    }

    #[test]
    fn facet_lists_are_deduplicated() {
        let catalog = Catalog::load().unwrap();
        let categories = catalog.categories();
        let mut unique = categories.clone();
        unique.dedup();
        assert_eq!(categories, unique);

        let years = catalog.years();
        for pair in years.windows(2) {
            assert!(pair[0] > pair[1], "years must be newest first");
        }
    }
}
