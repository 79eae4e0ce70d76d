//! Filter/sort projection over the order collection.
//!
//! The two tab views (active / completed) never mix: records are
//! partitioned by completion first, then searched, status-filtered and
//! stably sorted. Everything here is pure; the full result is returned
//! with no pagination.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::order::{OrderRecord, OrderStatus};

/// Trait for list rows matching a text search.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for list rows comparable by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Which tab the view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListScope {
    Active,
    Completed,
}

/// Status filter for the active tab. The completed tab is
/// definitionally one status and has no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    Pending,
    Reports,
}

impl StatusFilter {
    pub fn all() -> [StatusFilter; 3] {
        [StatusFilter::All, StatusFilter::Pending, StatusFilter::Reports]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Reports => "Reports Done",
        }
    }

    fn accepts(&self, record: &OrderRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => !record.reports_ready,
            StatusFilter::Reports => record.reports_ready,
        }
    }
}

pub const SORT_CREATED_AT: &str = "createdAt";

/// View parameters for one tab, persisted as list state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListQuery {
    pub q: String,
    pub status: StatusFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            status: StatusFilter::All,
            // newest first
            sort_field: SORT_CREATED_AT.to_string(),
            sort_ascending: false,
        }
    }
}

impl OrderListQuery {
    /// Clicking the sorted column reverses direction; clicking another
    /// column resets to ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

impl Searchable for OrderRecord {
    /// Case-insensitive substring match over SO number, client name and
    /// company. An empty company participates as the empty string.
    fn matches_filter(&self, filter: &str) -> bool {
        let q = filter.to_lowercase();
        if q.is_empty() {
            return true;
        }
        [&self.so, &self.name, &self.company]
            .iter()
            .any(|s| s.to_lowercase().contains(&q))
    }
}

impl Sortable for OrderRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "peptide" => self.peptide.cmp(&other.peptide),
            "endotoxin" => self.endotoxin.cmp(&other.endotoxin),
            "sterility" => self.sterility.cmp(&other.sterility),
            "so" => cmp_text(&self.so, &other.so),
            "name" => cmp_text(&self.name, &other.name),
            "company" => cmp_text(&self.company, &other.company),
            // createdAt is ISO-8601, lexicographic order is chronological
            _ => cmp_text(&self.created_at, &other.created_at),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn in_scope(record: &OrderRecord, scope: ListScope) -> bool {
    match scope {
        ListScope::Active => record.status() != OrderStatus::Complete,
        ListScope::Completed => record.status() == OrderStatus::Complete,
    }
}

/// Produce the ordered view for one tab.
pub fn view(records: &[OrderRecord], scope: ListScope, query: &OrderListQuery) -> Vec<OrderRecord> {
    let mut items: Vec<OrderRecord> = records
        .iter()
        .filter(|o| in_scope(o, scope))
        .filter(|o| o.matches_filter(&query.q))
        .filter(|o| scope == ListScope::Completed || query.status.accepts(o))
        .cloned()
        .collect();
    sort_list(&mut items, &query.sort_field, query.sort_ascending);
    items
}

/// Stable sort by a named column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Counts behind the active tab's filter pills. Computed on the active
/// subset before the status filter is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub reports: usize,
}

pub fn status_counts(records: &[OrderRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records.iter().filter(|o| in_scope(o, ListScope::Active)) {
        counts.all += 1;
        if record.reports_ready {
            counts.reports += 1;
        } else {
            counts.pending += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderId;

    fn record(so: &str, name: &str, company: &str, created_at: &str) -> OrderRecord {
        OrderRecord {
            id: OrderId::new_v4(),
            so: so.into(),
            name: name.into(),
            company: company.into(),
            peptide: 0,
            endotoxin: 0,
            sterility: 0,
            reports_ready: false,
            paid: false,
            emailed: false,
            created_at: created_at.into(),
        }
    }

    fn sample_records() -> Vec<OrderRecord> {
        let mut a = record("SO-1", "Alice", "Acme Labs", "2025-01-05T10:00:00.000Z");
        a.peptide = 3;
        let mut b = record("SO-2", "Bob", "", "2025-02-01T10:00:00.000Z");
        b.reports_ready = true;
        b.endotoxin = 7;
        let mut c = record("SO-3", "Carol", "Finnrick Labs", "2025-02-20T10:00:00.000Z");
        c.reports_ready = true;
        c.paid = true;
        c.emailed = true;
        c.sterility = 1;
        vec![a, b, c]
    }

    #[test]
    fn partition_never_mixes_tabs() {
        let records = sample_records();
        let active = view(&records, ListScope::Active, &OrderListQuery::default());
        let completed = view(&records, ListScope::Completed, &OrderListQuery::default());
        assert_eq!(active.len(), 2);
        assert_eq!(completed.len(), 1);
        assert!(active.iter().all(|o| !o.is_complete()));
        assert!(completed.iter().all(|o| o.is_complete()));
    }

    #[test]
    fn default_view_is_newest_first() {
        let records = sample_records();
        let active = view(&records, ListScope::Active, &OrderListQuery::default());
        assert_eq!(active[0].so, "SO-2");
        assert_eq!(active[1].so, "SO-1");
    }

    #[test]
    fn search_is_case_insensitive_over_all_text_fields() {
        let records = sample_records();
        let query = OrderListQuery {
            q: "labs".into(),
            ..Default::default()
        };
        let active = view(&records, ListScope::Active, &query);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Alice");

        let query = OrderListQuery {
            q: "so-2".into(),
            ..Default::default()
        };
        assert_eq!(view(&records, ListScope::Active, &query).len(), 1);

        // empty query matches everything, including empty company
        let query = OrderListQuery::default();
        assert_eq!(view(&records, ListScope::Active, &query).len(), 2);
    }

    #[test]
    fn status_filter_applies_to_active_scope_only() {
        let records = sample_records();
        let pending = OrderListQuery {
            status: StatusFilter::Pending,
            ..Default::default()
        };
        let reports = OrderListQuery {
            status: StatusFilter::Reports,
            ..Default::default()
        };
        assert_eq!(view(&records, ListScope::Active, &pending)[0].name, "Alice");
        assert_eq!(view(&records, ListScope::Active, &reports)[0].name, "Bob");
        // completed scope ignores the filter
        assert_eq!(view(&records, ListScope::Completed, &pending).len(), 1);
    }

    #[test]
    fn numeric_columns_sort_as_integers() {
        let records = sample_records();
        let query = OrderListQuery {
            sort_field: "endotoxin".into(),
            sort_ascending: true,
            ..Default::default()
        };
        let active = view(&records, ListScope::Active, &query);
        assert_eq!(active[0].endotoxin, 0);
        assert_eq!(active[1].endotoxin, 7);
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut items = vec![
            record("SO-1", "alice", "", "2025-01-01T00:00:00Z"),
            record("SO-2", "Bob", "", "2025-01-02T00:00:00Z"),
            record("SO-3", "ANNA", "", "2025-01-03T00:00:00Z"),
        ];
        sort_list(&mut items, "name", true);
        let names: Vec<&str> = items.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "ANNA", "Bob"]);
    }

    #[test]
    fn toggle_sort_flips_same_column_and_resets_new_column() {
        let mut query = OrderListQuery::default();
        assert!(!query.sort_ascending);
        query.toggle_sort(SORT_CREATED_AT);
        assert!(query.sort_ascending);
        query.toggle_sort("name");
        assert_eq!(query.sort_field, "name");
        assert!(query.sort_ascending);
        query.toggle_sort("name");
        assert!(!query.sort_ascending);
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys() {
        let records = sample_records();
        let asc = OrderListQuery {
            sort_field: "so".into(),
            sort_ascending: true,
            ..Default::default()
        };
        let desc = OrderListQuery {
            sort_ascending: false,
            ..asc.clone()
        };
        let mut up = view(&records, ListScope::Active, &asc);
        let down = view(&records, ListScope::Active, &desc);
        up.reverse();
        assert_eq!(up, down);
    }

    #[test]
    fn ties_keep_input_order() {
        let first = record("SO-A", "Same", "", "2025-01-01T00:00:00Z");
        let second = record("SO-B", "Same", "", "2025-01-02T00:00:00Z");
        let records = vec![first.clone(), second.clone()];
        let query = OrderListQuery {
            sort_field: "name".into(),
            sort_ascending: true,
            ..Default::default()
        };
        let sorted = view(&records, ListScope::Active, &query);
        assert_eq!(sorted[0].id, first.id);
        assert_eq!(sorted[1].id, second.id);
    }

    #[test]
    fn view_is_idempotent() {
        let records = sample_records();
        let query = OrderListQuery {
            q: "o".into(),
            sort_field: "name".into(),
            sort_ascending: true,
            ..Default::default()
        };
        let once = view(&records, ListScope::Active, &query);
        let twice = view(&once, ListScope::Active, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn pill_counts_cover_the_active_subset() {
        let records = sample_records();
        let counts = status_counts(&records);
        assert_eq!(counts.all, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.reports, 1);
        assert_eq!(counts.pending + counts.reports, counts.all);
    }
}
