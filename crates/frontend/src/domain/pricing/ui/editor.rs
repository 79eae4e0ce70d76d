use contracts::domain::pricing::{parse_price, PricingConfig};
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, AppContext};
use crate::shared::number_format::format_currency;

/// Per-sample rate editor. Rates apply on the next dashboard read; no
/// revenue is stored anywhere.
#[component]
pub fn PricingEditor() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page page--narrow">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Pricing"</h2>
                </div>
            </div>

            <div class="page-content">
                <div class="pricing-grid">
                    {price_row(
                        ctx,
                        "Flagged client (per sample, any type)",
                        |p| p.flagged,
                        |p, v| p.flagged = v,
                    )}
                    {price_row(ctx, "Peptide", |p| p.peptide, |p, v| p.peptide = v)}
                    {price_row(ctx, "Endotoxin", |p| p.endotoxin, |p, v| p.endotoxin = v)}
                    {price_row(ctx, "Sterility", |p| p.sterility, |p, v| p.sterility = v)}
                </div>
            </div>
        </div>
    }
}

fn price_row(
    ctx: AppContext,
    label: &'static str,
    read: fn(&PricingConfig) -> f64,
    write: fn(&mut PricingConfig, f64),
) -> impl IntoView {
    view! {
        <div class="pricing-grid__row">
            <label class="pricing-grid__label">{label}</label>
            <input
                class="pricing-grid__input"
                type="number"
                min="0"
                step="0.01"
                prop:value=move || ctx.pricing.with(|p| read(p).to_string())
                on:change=move |ev| {
                    let rate = parse_price(&event_target_value(&ev));
                    ctx.update_pricing(|p| write(p, rate));
                }
            />
            <span class="pricing-grid__preview">
                {move || ctx.pricing.with(|p| format_currency(read(p)))}
            </span>
        </div>
    }
}
