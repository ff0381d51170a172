//! Filter, sort and paginate pipeline shared by searchable repositories.
//!
//! The stages always run in that order over a snapshot of the store. What a
//! filter matches and which fields sort is decided by a [`SearchPolicy`]
//! supplied by the concrete repository; the stages themselves hold no state.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::search::{SearchParams, SearchResult, SortDirection};

/// Comparable projection of one entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Text(&'a str),
    Time(DateTime<Utc>),
    Number(i64),
}

/// Per-entity search rules injected into the pipeline.
pub trait SearchPolicy<E>: Send + Sync {
    /// Fields accepted as a sort key.
    fn sortable_fields(&self) -> &[&'static str];

    /// Whether `item` matches a non-empty free-text filter.
    fn matches(&self, item: &E, filter: &str) -> bool;

    /// Value of `field` on `item`, `None` when the field is unknown.
    fn sort_value<'a>(&self, item: &'a E, field: &str) -> Option<SortValue<'a>>;

    /// Ordering applied when the query names no allowed sort field.
    fn default_sort(&self) -> Option<(&'static str, SortDirection)> {
        None
    }
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep the items matching `filter`. An absent or empty filter returns the
/// input untouched and never consults the policy.
pub fn apply_filter<E, P>(items: Vec<E>, filter: Option<&str>, policy: &P) -> Vec<E>
where
    P: SearchPolicy<E> + ?Sized,
{
    let Some(filter) = filter.filter(|f| !f.is_empty()) else {
        return items;
    };

    items
        .into_iter()
        .filter(|item| policy.matches(item, filter))
        .collect()
}

/// Stable sort by `sort` when it is an allowed field. A field outside the
/// allowed list leaves the order untouched; no field at all falls back to the
/// policy default, if any. Anything but `Asc` sorts descending.
pub fn apply_sort<E, P>(
    mut items: Vec<E>,
    sort: Option<&str>,
    sort_dir: Option<SortDirection>,
    policy: &P,
) -> Vec<E>
where
    P: SearchPolicy<E> + ?Sized,
{
    let (field, direction) = match sort {
        Some(field) => {
            let allowed = policy
                .sortable_fields()
                .iter()
                .any(|allowed| *allowed == field);
            if !allowed {
                return items;
            }
            (field, sort_dir.unwrap_or(SortDirection::Desc))
        }
        None => match policy.default_sort() {
            Some(default) => default,
            None => return items,
        },
    };

    items.sort_by(|a, b| {
        let ordering: Ordering = policy
            .sort_value(a, field)
            .cmp(&policy.sort_value(b, field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    items
}

/// Slice `[(page - 1) * per_page, page * per_page)`; past the end is empty.
pub fn apply_paginate<E>(items: Vec<E>, page: u64, per_page: u64) -> Vec<E> {
    let offset = page.saturating_sub(1).saturating_mul(per_page);
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(per_page).unwrap_or(usize::MAX);

    items.into_iter().skip(skip).take(take).collect()
}

/// Run the three stages over `items` and wrap the page in a [`SearchResult`].
pub fn run_search<E, P>(items: Vec<E>, params: &SearchParams, policy: &P) -> SearchResult<E>
where
    P: SearchPolicy<E> + ?Sized,
{
    let scanned = items.len();
    let filtered = apply_filter(items, params.filter(), policy);
    let total = filtered.len() as u64;
    let sorted = apply_sort(filtered, params.sort(), params.sort_dir(), policy);
    let page = apply_paginate(sorted, params.page(), params.per_page());

    debug!(
        scanned,
        total,
        returned = page.len(),
        page = params.page(),
        per_page = params.per_page(),
        "Search pipeline completed"
    );

    SearchResult::new(page, total, params)
}
