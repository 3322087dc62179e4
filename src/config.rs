//! Frontend Configuration
//!
//! Backend and frontend base URLs, resolved at build time.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:9000";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Served by the frontend itself, shown for items without an image
const PLACEHOLDER_IMAGE: &str = "logo192.png";

/// Characters left as-is inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    backend_url: String,
    frontend_url: String,
}

impl Config {
    pub fn new(backend_url: impl Into<String>, frontend_url: impl Into<String>) -> Self {
        Self {
            backend_url: normalize(backend_url.into(), DEFAULT_BACKEND_URL),
            frontend_url: normalize(frontend_url.into(), DEFAULT_FRONTEND_URL),
        }
    }

    /// Read `BACKEND_URL` / `FRONTEND_URL` from the build environment
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("BACKEND_URL").unwrap_or_default(),
            option_env!("FRONTEND_URL").unwrap_or_default(),
        )
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.backend_url)
    }

    pub fn placeholder_image_url(&self) -> String {
        format!("{}/{}", self.frontend_url, PLACEHOLDER_IMAGE)
    }

    /// Image URL for an item; empty or missing names fall back to the placeholder
    pub fn image_url(&self, image_name: Option<&str>) -> String {
        match image_name.filter(|name| !name.is_empty()) {
            Some(name) => format!(
                "{}/images/{}",
                self.backend_url,
                utf8_percent_encode(name, PATH_SEGMENT)
            ),
            None => self.placeholder_image_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_FRONTEND_URL)
    }
}

fn normalize(url: String, fallback: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_uses_backend_images_path() {
        let config = Config::new("http://backend:9000", "http://front:3000");
        assert_eq!(
            config.image_url(Some("foo.png")),
            "http://backend:9000/images/foo.png"
        );
    }

    #[test]
    fn test_missing_or_empty_image_uses_placeholder() {
        let config = Config::new("http://backend:9000", "http://front:3000");
        assert_eq!(config.image_url(None), "http://front:3000/logo192.png");
        assert_eq!(config.image_url(Some("")), "http://front:3000/logo192.png");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = Config::new("http://backend:9000/", "http://front:3000//");
        assert_eq!(config.items_url(), "http://backend:9000/items");
        assert_eq!(config.placeholder_image_url(), "http://front:3000/logo192.png");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = Config::new("", "  ");
        assert_eq!(config.items_url(), format!("{DEFAULT_BACKEND_URL}/items"));
        assert_eq!(
            config.placeholder_image_url(),
            format!("{DEFAULT_FRONTEND_URL}/logo192.png")
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_image_name_is_encoded_as_one_segment() {
        let config = Config::default();
        assert_eq!(
            config.image_url(Some("../a b.jpg")),
            "http://127.0.0.1:9000/images/..%2Fa%20b.jpg"
        );
    }
}
