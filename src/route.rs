/// Screen routes
///
/// The application navigates between three screens. Parsing accepts the
/// path forms the site used (`/`, `/portfolio`, `/portfolio/:id`) so a
/// launch argument can deep-link into a screen; it is total and always
/// produces a usable route.

use std::fmt;

/// Fallback project id for malformed detail links.
pub const DEFAULT_PROJECT_ID: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Portfolio,
    Detail(i64),
}

impl Route {
    /// Parse a path string into a route.
    ///
    /// A non-numeric detail id falls back to [`DEFAULT_PROJECT_ID`];
    /// unrecognized paths fall back to home. Never fails.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["portfolio"] => Route::Portfolio,
            ["portfolio", id, ..] => Route::Detail(id.parse().unwrap_or(DEFAULT_PROJECT_ID)),
            _ => Route::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Portfolio => write!(f, "/portfolio"),
            Route::Detail(id) => write!(f, "/portfolio/{id}"),
        }
    }
}
