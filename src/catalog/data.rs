/// Shared data structures for the project catalog
///
/// These structs represent the data model that flows between
/// the bundled catalog document and the UI layer.

use serde::{Deserialize, Serialize};

/// A single project in the studio's portfolio
///
/// Records are parsed once from the bundled catalog document and never
/// mutated afterwards. The `images` order is the display sequence for the
/// detail gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    /// Unique catalog ID
    pub id: i64,
    /// Display title (e.g. "Poster — Bold Geometry")
    pub title: String,
    /// Discipline, one of a closed small set (e.g. "Print Design")
    pub category: String,
    /// Year of delivery, kept as a string for exact facet matching
    pub year: String,
    /// Commissioning client
    pub client: String,
    /// Project duration (e.g. "3 weeks")
    pub duration: String,
    /// One-paragraph summary shown on cards and the detail header
    pub description: String,
    /// What made the project hard
    pub challenge: String,
    /// How the design answered the challenge
    pub solution: String,
    /// Ordered process steps
    pub process: Vec<String>,
    /// Outcome write-up
    pub results: String,
    /// Tools used (e.g. "Adobe Illustrator")
    pub tools: Vec<String>,
    /// Search tags; order carries no meaning for matching
    pub tags: Vec<String>,
    /// Bundled artwork file names, in display order
    pub images: Vec<String>,
    /// Whether the project is highlighted on home and in the listing
    pub featured: bool,
}

impl ProjectRecord {
    /// The lead artwork used on cards and grids
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
