//! localStorage access for the two persisted entries.
//!
//! Reads happen once at startup, writes after every mutation. Failures
//! are logged and swallowed; the worst case is an empty tracker.

use contracts::domain::order::OrderRecord;
use contracts::domain::pricing::PricingConfig;
use contracts::shared::persistence::{decode_entry, encode_entry, LoadOutcome, LoadSource};
use web_sys::Storage;

const ORDERS_KEY: &str = "sample-order-tracker.orders.v1";
const PRICING_KEY: &str = "sample-order-tracker.pricing.v1";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_raw(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn write_raw(key: &str, raw: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, {} not saved", key);
        return;
    };
    if storage.set_item(key, raw).is_err() {
        log::warn!("failed to write {} to localStorage", key);
    }
}

fn load_entry<T: serde::de::DeserializeOwned + Default>(key: &str) -> LoadOutcome<T> {
    let raw = read_raw(key);
    let outcome = decode_entry(raw.as_deref());
    if outcome.source == LoadSource::CorruptRecovered {
        log::warn!("stored entry {} was unreadable, using defaults", key);
    }
    outcome
}

fn save_entry<T: serde::Serialize>(key: &str, value: &T) {
    match encode_entry(value) {
        Ok(raw) => write_raw(key, &raw),
        Err(e) => log::warn!("failed to encode {}: {}", key, e),
    }
}

pub fn load_orders() -> LoadOutcome<Vec<OrderRecord>> {
    load_entry(ORDERS_KEY)
}

pub fn save_orders(orders: &[OrderRecord]) {
    save_entry(ORDERS_KEY, &orders);
}

pub fn load_pricing() -> LoadOutcome<PricingConfig> {
    load_entry(PRICING_KEY)
}

pub fn save_pricing(pricing: &PricingConfig) {
    save_entry(PRICING_KEY, pricing);
}

/// Per-tab list state shares the same best-effort policy.
pub fn load_state<T: serde::de::DeserializeOwned + Default>(key: &str) -> LoadOutcome<T> {
    load_entry(key)
}

pub fn save_state<T: serde::Serialize>(key: &str, value: &T) {
    save_entry(key, value);
}
