//! Catalog product entity.

use serde::{Deserialize, Serialize};

use crate::domain::services::normalize_link;

/// Price as delivered by the catalog, either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Numeric price, displayed exactly as the server sent it.
    Number(serde_json::Number),
    /// Textual price such as `"12.50"` or `"on request"`.
    Text(String),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    image_link: String,
    size: String,
    price: Price,
}

impl ProductRecord {
    /// Creates a record, rejecting a blank image link.
    #[must_use]
    pub fn new(
        image_link: impl Into<String>,
        size: impl Into<String>,
        price: impl Into<Price>,
    ) -> Option<Self> {
        let image_link = image_link.into();

        if image_link.trim().is_empty() {
            return None;
        }

        Some(Self {
            image_link,
            size: size.into(),
            price: price.into(),
        })
    }

    /// Returns the raw sharing link.
    #[must_use]
    pub fn image_link(&self) -> &str {
        &self.image_link
    }

    /// Returns the directly fetchable image URL.
    #[must_use]
    pub fn resolved_url(&self) -> String {
        normalize_link(&self.image_link)
    }

    /// Returns the size label.
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> &Price {
        &self.price
    }

    /// Label shown under the image.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("Size: {}", self.size)
    }

    /// Label shown under the size.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("Price: {}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = ProductRecord::new("http://x/a.png", "M", 10_u64).unwrap();

        assert_eq!(record.image_link(), "http://x/a.png");
        assert_eq!(record.size(), "M");
        assert_eq!(record.size_label(), "Size: M");
        assert_eq!(record.price_label(), "Price: 10");
    }

    #[test]
    fn test_blank_link_rejected() {
        assert!(ProductRecord::new("", "M", 10_u64).is_none());
        assert!(ProductRecord::new("   ", "M", 10_u64).is_none());
    }

    #[test]
    fn test_link_kept_as_sent() {
        let record = ProductRecord::new(" http://x/a.png ", "M", 10_u64).unwrap();

        assert_eq!(record.image_link(), " http://x/a.png ");
        assert_eq!(record.resolved_url(), " http://x/a.png ");
    }

    #[test]
    fn test_resolved_url_rewrites_drive_links() {
        let record = ProductRecord::new("https://drive.google.com/open?id=abc", "S", "5").unwrap();

        assert_eq!(
            record.resolved_url(),
            "https://drive.google.com/uc?export=view&id=abc"
        );
        assert_eq!(record.image_link(), "https://drive.google.com/open?id=abc");
    }

    #[test]
    fn test_price_deserialization() {
        let number: Price = serde_json::from_str("10").unwrap();
        let float: Price = serde_json::from_str("12.5").unwrap();
        let text: Price = serde_json::from_str("\"12.50\"").unwrap();

        assert_eq!(number.to_string(), "10");
        assert_eq!(float.to_string(), "12.5");
        assert_eq!(text.to_string(), "12.50");
    }
}
