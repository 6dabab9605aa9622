/// Filtering and search over the project catalog
///
/// A pure function of (records, criteria): no state is kept between calls,
/// so it is safe to run on every keystroke.

use super::data::ProjectRecord;

/// Selector value that matches every record for its facet.
pub const ALL: &str = "All";

/// Transient filter state for the portfolio listing.
///
/// An empty query or an "All" selector is neutral for its dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Free-text search, matched against title, description and tags
    pub query: String,
    /// "All" or exactly one catalog category
    pub category: String,
    /// "All" or exactly one literal year
    pub year: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            query: String::new(),
            category: ALL.to_string(),
            year: ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    /// True when no dimension constrains the result.
    pub fn is_neutral(&self) -> bool {
        self.query.is_empty() && self.category == ALL && self.year == ALL
    }

    /// Reset every dimension, the "clear all filters" action.
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Whether a single record passes all three dimensions.
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        self.matches_query(project)
            && (self.category == ALL || project.category == self.category)
            && (self.year == ALL || project.year == self.year)
    }

    fn matches_query(&self, project: &ProjectRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
            || project
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Compute the ordered sub-sequence of `projects` matching `criteria`.
///
/// Catalog order is preserved. An empty result is valid; the listing shows
/// an empty state with a clear-filters action in that case.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProjectRecord> {
    projects.iter().filter(|p| criteria.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eight projects, three featured, mirroring the shape of the shipped
    /// catalog without depending on its content.
    fn fixture() -> Vec<ProjectRecord> {
        let rows: [(&str, &str, &str, &[&str], bool); 8] = [
            ("Poster Bold", "Print Design", "2024", &["Typography", "Print"], true),
            ("Business Cards", "Brand Identity", "2024", &["Branding", "Print"], true),
            ("Album Abstract", "Music Design", "2023", &["Music", "Abstract"], false),
            ("Hero CTA", "Web Design", "2024", &["Web", "Landing Page"], true),
            ("Poster System", "Print Design", "2023", &["Series", "Print"], false),
            ("Identity Guide", "Brand Identity", "2023", &["Guidelines"], false),
            ("Shop Refresh", "Web Design", "2023", &["Web", "E-commerce"], false),
            ("Campaign Social", "Digital Marketing", "2024", &["Campaign"], false),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, (title, category, year, tags, featured))| ProjectRecord {
                id: i as i64 + 1,
                title: title.to_string(),
                category: category.to_string(),
                year: year.to_string(),
                client: "Client".to_string(),
                duration: "2 weeks".to_string(),
                description: format!("{title} project description"),
                challenge: String::new(),
                solution: String::new(),
                process: vec![],
                results: String::new(),
                tools: vec![],
                tags: tags.iter().map(|t| t.to_string()).collect(),
                images: vec!["art.jpg".to_string()],
                featured: *featured,
            })
            .collect()
    }

    fn criteria(query: &str, category: &str, year: &str) -> FilterCriteria {
        FilterCriteria {
            query: query.to_string(),
            category: category.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn neutral_criteria_return_the_whole_catalog() {
        let projects = fixture();
        let all = filter_projects(&projects, &FilterCriteria::default());
        assert_eq!(all.len(), projects.len());
        for (result, original) in all.iter().zip(projects.iter()) {
            assert_eq!(*result, original);
        }
    }

    #[test]
    fn query_matches_title_description_and_tags() {
        let projects = fixture();

        let by_title = filter_projects(&projects, &criteria("poster", ALL, ALL));
        assert_eq!(by_title.len(), 2);

        // Matches only through a tag, not title or description
        let by_tag = filter_projects(&projects, &criteria("landing", ALL, ALL));
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].title, "Hero CTA");

        let by_description = filter_projects(&projects, &criteria("description", ALL, ALL));
        assert_eq!(by_description.len(), projects.len());
    }

    #[test]
    fn query_is_case_insensitive_and_sound() {
        let projects = fixture();
        let results = filter_projects(&projects, &criteria("PRINT", ALL, ALL));
        assert!(!results.is_empty());
        for project in &results {
            let hit = project.title.to_lowercase().contains("print")
                || project.description.to_lowercase().contains("print")
                || project.tags.iter().any(|t| t.to_lowercase().contains("print"));
            assert!(hit, "{} should not have matched", project.title);
        }
        // Completeness: nothing left out that does match
        for project in &projects {
            let hit = project.title.to_lowercase().contains("print")
                || project.description.to_lowercase().contains("print")
                || project.tags.iter().any(|t| t.to_lowercase().contains("print"));
            assert_eq!(hit, results.iter().any(|r| r.id == project.id));
        }
    }

    #[test]
    fn category_facet_is_exact_and_order_preserving() {
        let projects = fixture();
        let web = filter_projects(&projects, &criteria("", "Web Design", ALL));
        assert_eq!(web.len(), 2);
        assert!(web.iter().all(|p| p.category == "Web Design"));
        // Catalog order: id 4 before id 7
        assert_eq!(web[0].id, 4);
        assert_eq!(web[1].id, 7);
    }

    #[test]
    fn year_facet_uses_string_equality() {
        let projects = fixture();
        let y2023 = filter_projects(&projects, &criteria("", ALL, "2023"));
        assert_eq!(y2023.len(), 4);
        assert!(y2023.iter().all(|p| p.year == "2023"));

        let none = filter_projects(&projects, &criteria("", ALL, "2022"));
        assert!(none.is_empty());
    }

    #[test]
    fn dimensions_are_conjoined() {
        let projects = fixture();
        let results = filter_projects(&projects, &criteria("poster", "Print Design", "2023"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Poster System");
    }

    #[test]
    fn filtering_is_idempotent() {
        let projects = fixture();
        let c = criteria("print", "Print Design", ALL);
        let once = filter_projects(&projects, &c);
        let owned: Vec<ProjectRecord> = once.iter().map(|p| (*p).clone()).collect();
        let twice = filter_projects(&owned, &c);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(*a, *b);
        }
    }

    #[test]
    fn empty_results_are_valid() {
        let projects = fixture();
        let results = filter_projects(&projects, &criteria("no such thing", ALL, ALL));
        assert!(results.is_empty());
    }

    #[test]
    fn clear_restores_the_neutral_criteria() {
        let mut c = criteria("poster", "Print Design", "2024");
        assert!(!c.is_neutral());
        c.clear();
        assert!(c.is_neutral());
        assert_eq!(c, FilterCriteria::default());
    }

    #[test]
    fn featured_split_covers_the_fixture() {
        let projects = fixture();
        let featured: Vec<_> = projects.iter().filter(|p| p.featured).collect();
        assert_eq!(featured.len(), 3);
    }
}
