//! Ordered catalog table.

use super::product::ProductRecord;
use super::size_filter::SizeFilter;

/// Catalog rows in server response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTable {
    records: Vec<ProductRecord>,
}

impl ProductTable {
    /// Creates a table from records, keeping their order.
    #[must_use]
    pub const fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// Creates an empty table.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    /// Returns the resolved image URL of every row, duplicates included.
    #[must_use]
    pub fn resolved_urls(&self) -> Vec<String> {
        self.records.iter().map(ProductRecord::resolved_url).collect()
    }

    /// Returns distinct sizes in first-seen order.
    #[must_use]
    pub fn distinct_sizes(&self) -> Vec<String> {
        let mut sizes: Vec<String> = Vec::new();
        for record in &self.records {
            if !sizes.iter().any(|s| s == record.size()) {
                sizes.push(record.size().to_string());
            }
        }
        sizes
    }

    /// Returns the filter options: the sentinel followed by every distinct size.
    #[must_use]
    pub fn filter_options(&self) -> Vec<SizeFilter> {
        std::iter::once(SizeFilter::All)
            .chain(self.distinct_sizes().into_iter().map(SizeFilter::Size))
            .collect()
    }

    /// Returns rows passing the filter, in table order.
    #[must_use]
    pub fn filtered(&self, filter: &SizeFilter) -> Vec<&ProductRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(record.size()))
            .collect()
    }
}

impl FromIterator<ProductRecord> for ProductTable {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
