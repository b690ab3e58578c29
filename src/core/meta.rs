//! Site-wide metadata for SEO tags

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::view::ViewName;

pub const DEFAULT_SITE_URL: &str = "https://sikt.no";

pub const SITE_NAME: &str = "Sikt";

/// Locale advertised in Open Graph tags
pub const SITE_LOCALE: &str = "nb_NO";

pub const CONTACT_EMAIL: &str = "siktseo@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub site_url: String,
}

impl SiteMeta {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }

    /// Inverse of [`canonical_url`](Self::canonical_url), for the client
    /// which only sees the rendered `<link rel="canonical">`
    pub fn from_canonical(url: &str) -> Self {
        Self::new(url.trim_end_matches('/'))
    }

    /// Views share one URL, so the canonical link is always the site root
    pub fn canonical_url(&self) -> String {
        format!("{}/", self.site_url)
    }

    pub fn og_image_url(&self) -> String {
        format!("{}/og-image.png", self.site_url)
    }

    /// schema.org JSON-LD describing the agency
    pub fn structured_data(&self) -> String {
        json!({
            "@context": "https://schema.org",
            "@type": "ProfessionalService",
            "name": SITE_NAME,
            "url": self.canonical_url(),
            "image": self.og_image_url(),
            "email": CONTACT_EMAIL,
            "description": ViewName::Home.description(),
            "areaServed": "NO",
            "inLanguage": "nb",
        })
        .to_string()
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url() {
        assert_eq!(SiteMeta::default().canonical_url(), "https://sikt.no/");
    }

    #[test]
    fn test_og_image_url() {
        assert_eq!(
            SiteMeta::new("https://example.no").og_image_url(),
            "https://example.no/og-image.png"
        );
    }

    #[test]
    fn test_titles_carry_site_name() {
        for view in ViewName::ALL {
            assert!(view.page_title().starts_with(SITE_NAME));
        }
    }

    #[test]
    fn test_from_canonical_recovers_site_url() {
        let meta = SiteMeta::new("https://example.no");
        assert_eq!(SiteMeta::from_canonical(&meta.canonical_url()), meta);
        assert_eq!(
            SiteMeta::from_canonical("https://example.no").og_image_url(),
            "https://example.no/og-image.png"
        );
    }

    #[test]
    fn test_structured_data_uses_site_url() {
        let data: serde_json::Value =
            serde_json::from_str(&SiteMeta::new("https://example.no").structured_data()).unwrap();
        assert_eq!(data["@type"], "ProfessionalService");
        assert_eq!(data["url"], "https://example.no/");
        assert_eq!(data["email"], CONTACT_EMAIL);
    }
}
