//! Wire rows of the catalog response.

use serde::Deserialize;

use crate::domain::entities::Price;
use crate::domain::serde_utils::string_or_number;

/// One element of the catalog response array.
#[derive(Debug, Deserialize)]
pub struct ProductRow {
    /// Sharing link to the product photo.
    #[serde(rename = "Sweater Photo")]
    pub photo: String,
    /// Size label.
    #[serde(rename = "Sweater Size", deserialize_with = "string_or_number::deserialize")]
    pub size: String,
    /// Price as sent.
    #[serde(rename = "Price")]
    pub price: Price,
}
