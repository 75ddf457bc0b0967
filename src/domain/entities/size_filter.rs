//! Gallery size filter.

/// Label of the sentinel option that shows every row.
pub const SHOW_ALL_LABEL: &str = "All";

/// Single-select filter over product sizes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SizeFilter {
    /// Show every row.
    #[default]
    All,
    /// Show rows whose size equals the value.
    Size(String),
}

impl SizeFilter {
    /// Returns true if the record size passes the filter.
    #[must_use]
    pub fn matches(&self, size: &str) -> bool {
        match self {
            Self::All => true,
            Self::Size(selected) => selected == size,
        }
    }

    /// Label shown in the dropdown.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => SHOW_ALL_LABEL,
            Self::Size(size) => size,
        }
    }
}

impl std::fmt::Display for SizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for SizeFilter {
    fn from(value: &str) -> Self {
        Self::Size(value.to_string())
    }
}
