//! Resource paths of the REST API.

/// URL builder rooted at the configured API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Normalizes the base so it ends with exactly one `/`
    pub fn new(base_url: &str) -> Self {
        Self {
            base: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn books(&self) -> String {
        format!("{}books/", self.base)
    }

    pub fn book(&self, id: u64) -> String {
        format!("{}books/{}/", self.base, id)
    }

    pub fn documents(&self) -> String {
        format!("{}s3-pdfs/", self.base)
    }

    pub fn recommendations(&self, subject: &str) -> String {
        format!("{}recommend/{}/", self.base, urlencoding::encode(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalization() {
        let with_slash = Endpoints::new("http://127.0.0.1:8000/api/");
        let without = Endpoints::new("http://127.0.0.1:8000/api");
        let doubled = Endpoints::new("http://127.0.0.1:8000/api//");

        assert_eq!(with_slash, without);
        assert_eq!(with_slash, doubled);
        assert_eq!(with_slash.base(), "http://127.0.0.1:8000/api/");
    }

    #[test]
    fn test_resource_paths() {
        let endpoints = Endpoints::new("http://127.0.0.1:8000/api/");
        assert_eq!(endpoints.books(), "http://127.0.0.1:8000/api/books/");
        assert_eq!(endpoints.book(42), "http://127.0.0.1:8000/api/books/42/");
        assert_eq!(endpoints.documents(), "http://127.0.0.1:8000/api/s3-pdfs/");
        assert_eq!(
            endpoints.recommendations("1"),
            "http://127.0.0.1:8000/api/recommend/1/"
        );
    }

    #[test]
    fn test_subject_is_encoded() {
        let endpoints = Endpoints::new("http://host/api");
        assert_eq!(
            endpoints.recommendations("sci fi/2"),
            "http://host/api/recommend/sci%20fi%2F2/"
        );
    }
}
