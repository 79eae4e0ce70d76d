use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Grouping key for the monthly rollup. Ordered by year then month, so
/// two keys are never merged across a year boundary even when the
/// rendered label repeats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    /// Zero-based month index (0 = January).
    pub month0: u32,
}

impl MonthKey {
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0 }
    }

    /// Derive the key from a stored `createdAt` value. Accepts a full
    /// ISO-8601 instant or a bare date; anything else yields None.
    pub fn from_created_at(raw: &str) -> Option<MonthKey> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(MonthKey::new(dt.year(), dt.month0()));
        }
        let date_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .ok()
            .map(|d| MonthKey::new(d.year(), d.month0()))
    }

    /// Display label, e.g. "Mar 2025".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_LABELS[(self.month0 % 12) as usize], self.year)
    }
}

/// Rollup for one month. Every sample unit lands in exactly one of the
/// four totals: the combined flagged-client bucket or one of the three
/// per-type buckets for everyone else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// All samples (any type) from the flagged client.
    pub flagged: u32,
    pub peptide: u32,
    pub endotoxin: u32,
    pub sterility: u32,
    /// Number of orders in the month.
    pub count: u32,
    /// Orders classified Complete.
    pub complete: u32,
}

impl MonthSummary {
    pub fn sample_total(&self) -> u32 {
        self.flagged + self.peptide + self.endotoxin + self.sterility
    }
}

/// Aggregation result: months in ascending key order, plus a sentinel
/// bucket for records whose creation instant does not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyBreakdown {
    pub months: Vec<(MonthKey, MonthSummary)>,
    pub unknown: Option<MonthSummary>,
}

impl MonthlyBreakdown {
    pub fn get(&self, key: MonthKey) -> Option<&MonthSummary> {
        self.months
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, summary)| summary)
    }

    pub fn order_count(&self) -> u32 {
        self.months.iter().map(|(_, s)| s.count).sum::<u32>()
            + self.unknown.map(|s| s.count).unwrap_or(0)
    }

    pub fn sample_total(&self) -> u32 {
        self.months.iter().map(|(_, s)| s.sample_total()).sum::<u32>()
            + self.unknown.map(|s| s.sample_total()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_parses_iso_instants_and_bare_dates() {
        let key = MonthKey::from_created_at("2025-03-10T12:34:56.000Z").unwrap();
        assert_eq!(key, MonthKey::new(2025, 2));
        let key = MonthKey::from_created_at("2024-12-31").unwrap();
        assert_eq!(key, MonthKey::new(2024, 11));
    }

    #[test]
    fn month_key_rejects_garbage() {
        assert_eq!(MonthKey::from_created_at(""), None);
        assert_eq!(MonthKey::from_created_at("not a date"), None);
        assert_eq!(MonthKey::from_created_at("2025-13-40"), None);
    }

    #[test]
    fn month_keys_order_by_year_then_month() {
        let mut keys = vec![
            MonthKey::new(2025, 0),
            MonthKey::new(2024, 11),
            MonthKey::new(2025, 2),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2024, 11),
                MonthKey::new(2025, 0),
                MonthKey::new(2025, 2),
            ]
        );
    }

    #[test]
    fn label_renders_month_name_and_year() {
        assert_eq!(MonthKey::new(2025, 2).label(), "Mar 2025");
        assert_eq!(MonthKey::new(2024, 11).label(), "Dec 2024");
    }
}
