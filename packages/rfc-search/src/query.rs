//! Search query parameters for the RFC Editor search page.

use chrono::Datelike;

use crate::config::EARLIEST_YEAR;
use crate::error::ArgError;
use crate::types::{SortDirection, SortField};

/// Validated search request.
///
/// Exactly one of the RFC number and the title keyword is set. The year
/// range is clamped to `EARLIEST_YEAR..=current year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    id: Option<u32>,
    title: Option<String>,
    from_year: i32,
    to_year: i32,
    sort_field: SortField,
    sort_direction: SortDirection,
}

impl QueryParams {
    /// Create query parameters from a raw RFC number (`0` for none) and a raw
    /// keyword (empty for none).
    ///
    /// The year range spans the whole registry, sorted by number ascending.
    ///
    /// # Examples
    /// ```
    /// use rfc_search::query::QueryParams;
    ///
    /// assert!(QueryParams::new(9293, "").is_ok());
    /// assert!(QueryParams::new(0, "TCP").is_ok());
    /// assert!(QueryParams::new(9293, "TCP").is_err());
    /// assert!(QueryParams::new(0, "").is_err());
    /// ```
    pub fn new(id: u32, title: &str) -> Result<Self, ArgError> {
        let (id, title) = match (id, title.is_empty()) {
            (0, true) => return Err(ArgError::MissingRequired),
            (0, false) => (None, Some(title.to_string())),
            (id, true) => (Some(id), None),
            (_, false) => return Err(ArgError::InvalidCombo),
        };

        Ok(Self {
            id,
            title,
            from_year: EARLIEST_YEAR,
            to_year: current_year(),
            sort_field: SortField::Number,
            sort_direction: SortDirection::Ascending,
        })
    }

    /// Restrict the publication year range, clamped to the registry bounds.
    #[must_use]
    pub fn with_years(mut self, from_year: i32, to_year: i32) -> Self {
        self.from_year = from_year.max(EARLIEST_YEAR);
        self.to_year = to_year.min(current_year());
        self
    }

    /// Set the sort order of the results.
    #[must_use]
    pub fn with_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn from_year(&self) -> i32 {
        self.from_year
    }

    pub fn to_year(&self) -> i32 {
        self.to_year
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Build the request parameters for the search page.
    ///
    /// Results are never paginated (`page=All`) and the date range always
    /// covers whole years.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("rfc", self.id.map(|id| id.to_string()).unwrap_or_default()),
            ("title", self.title.clone().unwrap_or_default()),
            ("from_year", self.from_year.to_string()),
            ("to_year", self.to_year.to_string()),
            ("page", "All".to_string()),
            ("sortkey", self.sort_field.as_str().to_string()),
            ("sorting", self.sort_direction.as_str().to_string()),
            ("pubstatus[]", "Any".to_string()),
            ("pub_date_type", "range".to_string()),
            ("from_month", "January".to_string()),
            ("to_month", "December".to_string()),
        ]
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
