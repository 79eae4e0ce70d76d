use chrono::{Datelike, Utc};
use contracts::dashboards::monthly_summary::{aggregate, MonthKey};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_app_context, AppTab};

/// Top bar: title, current-month digest, tab switcher and the
/// new-order button.
#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();

    // Per-type totals for the month in progress.
    let digest = Signal::derive(move || {
        let now = Utc::now();
        let key = MonthKey::new(now.year(), now.month0());
        ctx.orders.with(|orders| {
            let breakdown = aggregate(orders, &ctx.aggregation.get_value());
            let summary = breakdown.get(key).copied().unwrap_or_default();
            format!(
                "{}: {} orders · PEP {} · END {} · STE {} · flagged {}",
                key.label(),
                summary.count,
                summary.peptide,
                summary.endotoxin,
                summary.sterility,
                summary.flagged,
            )
        })
    });

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <h1 class="app-header__title">"Sample Order Tracker"</h1>
                <span class="app-header__digest">{move || digest.get()}</span>
            </div>
            <nav class="app-header__tabs">
                {AppTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.active_tab.get() == tab {
                                        "app-header__tab app-header__tab--active"
                                    } else {
                                        "app-header__tab"
                                    }
                                }
                                on:click=move |_| ctx.active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| ctx.new_order_open.set(true)
            >
                "+ New Order"
            </Button>
        </header>
    }
}
