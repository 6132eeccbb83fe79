//! Routing Table
//!
//! Static mapping from URL paths to pages. There are no guards: pages
//! degrade for anonymous visitors instead of redirecting.

/// Pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Welcome,
    Books,
    Dashboard,
    Profile,
    NotFound,
}

impl Route {
    /// Header links, in display order
    pub const NAV: [Route; 4] = [Route::Welcome, Route::Books, Route::Dashboard, Route::Profile];

    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Route::Welcome,
            "/books" => Route::Books,
            "/dashboard" => Route::Dashboard,
            "/profile" => Route::Profile,
            _ => Route::NotFound,
        }
    }

    /// Canonical path; `NotFound` has none of its own
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Books => "/books",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
            Route::NotFound => "/*any",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Welcome => "Home",
            Route::Books => "Books",
            Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
            Route::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Welcome);
        assert_eq!(Route::from_path("/books"), Route::Books);
        assert_eq!(Route::from_path("/books/"), Route::Books);
        assert_eq!(Route::from_path("/dashboard?tab=pdfs"), Route::Dashboard);
        assert_eq!(Route::from_path("/profile#access_token=x"), Route::Profile);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/books/12"), Route::NotFound);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn test_nav_round_trips() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::NAV.map(|r| r.label()), ["Home", "Books", "Dashboard", "Profile"]);
    }
}
