use serde::{Deserialize, Serialize};

use crate::domain::order::SampleType;

/// Price-per-sample rates, persisted as its own storage entry.
/// `flagged` applies to every sample of the flagged client regardless
/// of type; the three type rates apply to everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub flagged: f64,
    #[serde(default)]
    pub peptide: f64,
    #[serde(default)]
    pub endotoxin: f64,
    #[serde(default)]
    pub sterility: f64,
}

impl PricingConfig {
    pub fn rate(&self, sample: SampleType) -> f64 {
        match sample {
            SampleType::Peptide => self.peptide,
            SampleType::Endotoxin => self.endotoxin,
            SampleType::Sterility => self.sterility,
        }
    }
}

/// Coerce raw price input: not a finite non-negative number → 0.
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}
