//! Codec for the two persisted key-value entries (orders, pricing).
//!
//! Loading never fails: a missing or unreadable entry degrades to the
//! type's default value, but the path taken stays observable through
//! [`LoadSource`] instead of being masked.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Which path a load took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The stored entry decoded cleanly.
    Loaded,
    /// No entry existed; the default value was substituted.
    EmptyDefault,
    /// An entry existed but did not decode; the default value was
    /// substituted.
    CorruptRecovered,
}

#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub value: T,
    pub source: LoadSource,
}

/// Decode one persisted entry, degrading to `T::default()`.
pub fn decode_entry<T: DeserializeOwned + Default>(raw: Option<&str>) -> LoadOutcome<T> {
    match raw {
        None => LoadOutcome {
            value: T::default(),
            source: LoadSource::EmptyDefault,
        },
        Some(raw) => match serde_json::from_str::<T>(raw) {
            Ok(value) => LoadOutcome {
                value,
                source: LoadSource::Loaded,
            },
            Err(_) => LoadOutcome {
                value: T::default(),
                source: LoadSource::CorruptRecovered,
            },
        },
    }
}

/// Encode a value for storage.
pub fn encode_entry<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).context("failed to encode persisted entry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderDraft, OrderRecord};
    use crate::domain::pricing::PricingConfig;

    #[test]
    fn orders_round_trip_unchanged() {
        let draft = OrderDraft {
            so: "SO-2025-001".into(),
            name: "Finnrick Labs".into(),
            company: "Finnrick".into(),
            peptide: "5".into(),
            endotoxin: "0".into(),
            sterility: "2".into(),
        };
        let orders = vec![draft.into_record()];
        let raw = encode_entry(&orders).unwrap();
        let outcome: LoadOutcome<Vec<OrderRecord>> = decode_entry(Some(&raw));
        assert_eq!(outcome.source, LoadSource::Loaded);
        assert_eq!(outcome.value, orders);
    }

    #[test]
    fn pricing_round_trips_unchanged() {
        let pricing = PricingConfig {
            flagged: 10.0,
            peptide: 2.5,
            endotoxin: 0.0,
            sterility: 7.75,
        };
        let raw = encode_entry(&pricing).unwrap();
        let outcome: LoadOutcome<PricingConfig> = decode_entry(Some(&raw));
        assert_eq!(outcome.source, LoadSource::Loaded);
        assert_eq!(outcome.value, pricing);
    }

    #[test]
    fn missing_entry_yields_empty_default() {
        let outcome: LoadOutcome<Vec<OrderRecord>> = decode_entry(None);
        assert_eq!(outcome.source, LoadSource::EmptyDefault);
        assert!(outcome.value.is_empty());
    }

    #[test]
    fn corrupt_entry_recovers_to_default() {
        let outcome: LoadOutcome<Vec<OrderRecord>> = decode_entry(Some("{not json"));
        assert_eq!(outcome.source, LoadSource::CorruptRecovered);
        assert!(outcome.value.is_empty());

        let outcome: LoadOutcome<PricingConfig> = decode_entry(Some("[]"));
        assert_eq!(outcome.source, LoadSource::CorruptRecovered);
        assert_eq!(outcome.value, PricingConfig::default());
    }
}
