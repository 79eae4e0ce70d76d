use chrono::{Datelike, Utc};
use contracts::dashboards::monthly_summary::{
    aggregate, month_revenue, total_revenue, MonthKey, MonthSummary, MonthlyBreakdown,
};
use contracts::domain::pricing::PricingConfig;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::number_format::{format_currency, format_revenue};

/// Monthly rollup dashboard. Everything is recomputed from the flat
/// record collection on every render; nothing aggregated is stored.
#[component]
pub fn MonthlySummaryDashboard() -> impl IntoView {
    let ctx = use_app_context();

    let breakdown = Signal::derive(move || {
        ctx.orders
            .with(|orders| aggregate(orders, &ctx.aggregation.get_value()))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Monthly Summary"</h2>
                </div>
                <div class="page__header-right">
                    <div class="revenue-card">
                        <span class="revenue-card__label">"All-time revenue"</span>
                        <span class="revenue-card__value">
                            {move || {
                                let b = breakdown.get();
                                let pricing = ctx.pricing.get();
                                format_revenue(total_revenue(&b, &pricing))
                            }}
                        </span>
                    </div>
                </div>
            </div>

            <div class="page-content">
                {move || {
                    let b = breakdown.get();
                    let pricing = ctx.pricing.get();
                    if b.months.is_empty() && b.unknown.is_none() {
                        return view! {
                            <div class="empty-state">
                                <span class="text-muted">"No data yet"</span>
                            </div>
                        }
                            .into_any();
                    }
                    month_cards(&b, &pricing).into_any()
                }}
            </div>
        </div>
    }
}

/// Month cards, newest first, with the unknown-date bucket last.
fn month_cards(breakdown: &MonthlyBreakdown, pricing: &PricingConfig) -> impl IntoView {
    let now = Utc::now();
    let current = MonthKey::new(now.year(), now.month0());

    let mut cards: Vec<AnyView> = breakdown
        .months
        .iter()
        .rev()
        .map(|(key, summary)| month_card(key.label(), *key == current, summary, pricing))
        .collect();

    if let Some(summary) = &breakdown.unknown {
        cards.push(month_card("Unknown date".to_string(), false, summary, pricing));
    }

    view! { <div class="month-grid">{cards}</div> }
}

fn month_card(
    label: String,
    is_current: bool,
    summary: &MonthSummary,
    pricing: &PricingConfig,
) -> AnyView {
    let revenue = month_revenue(summary, pricing);
    let completion = if summary.count == 0 {
        0
    } else {
        summary.complete * 100 / summary.count
    };

    view! {
        <div class="month-card">
            <div class="month-card__header">
                <span class="month-card__label">{label}</span>
                {is_current
                    .then(|| {
                        view! { <span class="month-card__now-badge">"NOW"</span> }
                    })}
            </div>

            <div class="month-card__totals">
                <div class="month-card__stat">
                    <span class="month-card__stat-label">"Orders"</span>
                    <span class="month-card__stat-value">{summary.count}</span>
                </div>
                <div class="month-card__stat">
                    <span class="month-card__stat-label">"Peptide"</span>
                    <span class="month-card__stat-value">{summary.peptide}</span>
                </div>
                <div class="month-card__stat">
                    <span class="month-card__stat-label">"Endotoxin"</span>
                    <span class="month-card__stat-value">{summary.endotoxin}</span>
                </div>
                <div class="month-card__stat">
                    <span class="month-card__stat-label">"Sterility"</span>
                    <span class="month-card__stat-value">{summary.sterility}</span>
                </div>
                <div class="month-card__stat month-card__stat--flagged">
                    <span class="month-card__stat-label">"Flagged"</span>
                    <span class="month-card__stat-value">{summary.flagged}</span>
                </div>
            </div>

            <div class="month-card__footer">
                <span class="month-card__completion">
                    {format!("{}/{} complete ({}%)", summary.complete, summary.count, completion)}
                </span>
                <span class="month-card__revenue" title=format_currency(revenue)>
                    {format_revenue(revenue)}
                </span>
            </div>
        </div>
    }
    .into_any()
}
