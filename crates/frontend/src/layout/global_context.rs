use contracts::dashboards::monthly_summary::AggregationSettings;
use contracts::domain::order::{OrderDraft, OrderEdit, OrderId, OrderRecord};
use contracts::domain::pricing::PricingConfig;
use contracts::shared::persistence::LoadSource;
use leptos::prelude::*;

use crate::shared::storage;

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Active,
    Completed,
    Monthly,
    Pricing,
}

impl AppTab {
    pub fn all() -> [AppTab; 4] {
        [AppTab::Active, AppTab::Completed, AppTab::Monthly, AppTab::Pricing]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Active => "Orders",
            AppTab::Completed => "Completed",
            AppTab::Monthly => "Monthly",
            AppTab::Pricing => "Pricing",
        }
    }
}

/// Application state owned by the shell and provided via context. All
/// derived views are pure functions of `orders` and `pricing`; every
/// mutation writes the full entry back to storage immediately.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub orders: RwSignal<Vec<OrderRecord>>,
    pub pricing: RwSignal<PricingConfig>,
    pub active_tab: RwSignal<AppTab>,
    pub new_order_open: RwSignal<bool>,
    pub aggregation: StoredValue<AggregationSettings>,
    pub orders_source: StoredValue<LoadSource>,
    pub pricing_source: StoredValue<LoadSource>,
}

impl AppContext {
    pub fn new() -> Self {
        let orders = storage::load_orders();
        let pricing = storage::load_pricing();

        Self {
            orders: RwSignal::new(orders.value),
            pricing: RwSignal::new(pricing.value),
            active_tab: RwSignal::new(AppTab::Active),
            new_order_open: RwSignal::new(false),
            aggregation: StoredValue::new(AggregationSettings::default()),
            orders_source: StoredValue::new(orders.source),
            pricing_source: StoredValue::new(pricing.source),
        }
    }

    /// Create a record from the form payload. Drafts missing a required
    /// field are refused without feedback; returns whether a record was
    /// added so the form knows to close.
    pub fn add_order(&self, draft: OrderDraft) -> bool {
        if draft.validate().is_err() {
            return false;
        }
        let record = draft.into_record();
        self.orders.update(|list| list.insert(0, record));
        self.persist_orders();
        true
    }

    pub fn edit_order(&self, id: OrderId, edit: OrderEdit) {
        self.orders.update(|list| {
            if let Some(record) = list.iter_mut().find(|o| o.id == id) {
                record.apply(edit);
            }
        });
        self.persist_orders();
    }

    /// Irrecoverable; the caller confirms with the user first.
    pub fn delete_order(&self, id: OrderId) {
        self.orders.update(|list| list.retain(|o| o.id != id));
        self.persist_orders();
    }

    pub fn update_pricing(&self, apply: impl FnOnce(&mut PricingConfig)) {
        self.pricing.update(apply);
        storage::save_pricing(&self.pricing.get_untracked());
    }

    fn persist_orders(&self) {
        self.orders
            .with_untracked(|list| storage::save_orders(list));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}
