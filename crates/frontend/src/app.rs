use crate::dashboards::monthly_summary::ui::dashboard::MonthlySummaryDashboard;
use crate::domain::order::ui::form::NewOrderForm;
use crate::domain::order::ui::list::OrderList;
use crate::domain::pricing::ui::editor::PricingEditor;
use crate::layout::global_context::{use_app_context, AppContext, AppTab};
use crate::layout::header::AppHeader;
use contracts::projections::order_list::ListScope;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the application state to the whole app via context.
    provide_context(AppContext::new());

    view! { <AppShell /> }
}

#[component]
fn AppShell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app">
            <AppHeader />
            <main class="app__content">
                {move || match ctx.active_tab.get() {
                    AppTab::Active => view! { <OrderList scope=ListScope::Active /> }.into_any(),
                    AppTab::Completed => {
                        view! { <OrderList scope=ListScope::Completed /> }.into_any()
                    }
                    AppTab::Monthly => view! { <MonthlySummaryDashboard /> }.into_any(),
                    AppTab::Pricing => view! { <PricingEditor /> }.into_any(),
                }}
            </main>
            <Show when=move || ctx.new_order_open.get()>
                <NewOrderForm />
            </Show>
        </div>
    }
}
