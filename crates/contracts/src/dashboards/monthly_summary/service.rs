//! Monthly aggregation and revenue computation.
//!
//! Recomputed in full from the flat record collection on every read;
//! the collections involved are tens to low hundreds of records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::order::{OrderRecord, SampleType};
use crate::domain::pricing::PricingConfig;

use super::dto::{MonthKey, MonthSummary, MonthlyBreakdown};

/// Injected aggregation settings. The flagged-client rule is a
/// case-insensitive substring test of the marker against the client
/// name and company; an empty marker flags nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationSettings {
    pub flagged_marker: String,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            flagged_marker: "finnrick".to_string(),
        }
    }
}

impl AggregationSettings {
    pub fn is_flagged(&self, record: &OrderRecord) -> bool {
        if self.flagged_marker.is_empty() {
            return false;
        }
        let marker = self.flagged_marker.to_lowercase();
        record.name.to_lowercase().contains(&marker)
            || record.company.to_lowercase().contains(&marker)
    }
}

/// Group records by creation month and split sample counts into the
/// flagged bucket vs. per-type buckets. Records whose `createdAt` does
/// not parse land in the sentinel `unknown` bucket so nothing is lost.
pub fn aggregate(records: &[OrderRecord], settings: &AggregationSettings) -> MonthlyBreakdown {
    let mut months: BTreeMap<MonthKey, MonthSummary> = BTreeMap::new();
    let mut unknown: Option<MonthSummary> = None;

    for record in records {
        let summary = match MonthKey::from_created_at(&record.created_at) {
            Some(key) => months.entry(key).or_default(),
            None => unknown.get_or_insert_with(MonthSummary::default),
        };

        if settings.is_flagged(record) {
            summary.flagged += record.peptide + record.endotoxin + record.sterility;
        } else {
            summary.peptide += record.peptide;
            summary.endotoxin += record.endotoxin;
            summary.sterility += record.sterility;
        }
        summary.count += 1;
        if record.is_complete() {
            summary.complete += 1;
        }
    }

    MonthlyBreakdown {
        months: months.into_iter().collect(),
        unknown,
    }
}

/// Revenue for one month: flagged samples at the flagged rate, the
/// rest at their per-type rates.
pub fn month_revenue(summary: &MonthSummary, pricing: &PricingConfig) -> f64 {
    let mut revenue = f64::from(summary.flagged) * pricing.flagged;
    for sample in SampleType::all() {
        let total = match sample {
            SampleType::Peptide => summary.peptide,
            SampleType::Endotoxin => summary.endotoxin,
            SampleType::Sterility => summary.sterility,
        };
        revenue += f64::from(total) * pricing.rate(sample);
    }
    revenue
}

/// All-time revenue over every bucket, the unknown one included.
pub fn total_revenue(breakdown: &MonthlyBreakdown, pricing: &PricingConfig) -> f64 {
    breakdown
        .months
        .iter()
        .map(|(_, summary)| month_revenue(summary, pricing))
        .sum::<f64>()
        + breakdown
            .unknown
            .map(|summary| month_revenue(&summary, pricing))
            .unwrap_or(0.0)
}
