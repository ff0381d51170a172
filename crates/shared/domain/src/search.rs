//! Search query and result types.
//!
//! [`SearchProps`] is the loosely typed input (what a caller or a JSON body
//! provides). [`SearchParams`] is the normalised, immutable query the
//! repository pipeline consumes. [`SearchResult`] is the page handed back.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Sort direction. Anything other than `asc` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a user-supplied direction, falling back to `Desc`.
    pub fn parse_lenient(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw search input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchProps {
    #[serde(default, deserialize_with = "lenient_number")]
    pub page: Option<u64>,
    #[serde(default, alias = "perPage", deserialize_with = "lenient_number")]
    pub per_page: Option<u64>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default, alias = "sortDir")]
    pub sort_dir: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
}

/// Accepts integers or numeric strings; any other value counts as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }))
}

/// Normalised search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl SearchParams {
    pub fn new(props: SearchProps) -> Self {
        let page = props.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let per_page = props
            .per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE);
        let sort = props.sort.filter(|s| !s.is_empty());
        let sort_dir = sort.as_ref().map(|_| {
            props
                .sort_dir
                .as_deref()
                .map(SortDirection::parse_lenient)
                .unwrap_or(SortDirection::Desc)
        });
        let filter = props.filter.filter(|f| !f.is_empty());

        Self {
            page,
            per_page,
            sort,
            sort_dir,
            filter,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(SearchProps::default())
    }
}

impl From<SearchProps> for SearchParams {
    fn from(props: SearchProps) -> Self {
        Self::new(props)
    }
}

/// One page of search output.
///
/// `total` counts the filtered set before pagination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<String>,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: u64, params: &SearchParams) -> Self {
        let per_page = params.per_page();
        Self {
            items,
            total,
            current_page: params.page(),
            per_page,
            last_page: total.div_ceil(per_page.max(1)),
            sort: params.sort().map(str::to_owned),
            sort_dir: params.sort_dir(),
            filter: params.filter().map(str::to_owned),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}
