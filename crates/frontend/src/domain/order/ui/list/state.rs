use contracts::projections::order_list::{ListScope, OrderListQuery};
use leptos::prelude::*;

use crate::shared::storage;

const ACTIVE_STATE_KEY: &str = "sample-order-tracker.active-list-state.v1";
const COMPLETED_STATE_KEY: &str = "sample-order-tracker.completed-list-state.v1";

fn state_key(scope: ListScope) -> &'static str {
    match scope {
        ListScope::Active => ACTIVE_STATE_KEY,
        ListScope::Completed => COMPLETED_STATE_KEY,
    }
}

/// Load the persisted view parameters for one tab. Each tab keeps its
/// own search text, status filter and sort across sessions.
pub fn create_state(scope: ListScope) -> RwSignal<OrderListQuery> {
    RwSignal::new(storage::load_state::<OrderListQuery>(state_key(scope)).value)
}

pub fn persist_state(scope: ListScope, query: &OrderListQuery) {
    storage::save_state(state_key(scope), query);
}
