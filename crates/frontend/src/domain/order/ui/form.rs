use contracts::domain::order::OrderDraft;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;

/// New-order modal. SO number and client name are required; a submit
/// with either missing is refused and the form stays open. Count
/// fields take free text and are coerced on creation.
#[component]
pub fn NewOrderForm() -> impl IntoView {
    let ctx = use_app_context();

    let so = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let peptide = RwSignal::new(String::new());
    let endotoxin = RwSignal::new(String::new());
    let sterility = RwSignal::new(String::new());

    let close = move || ctx.new_order_open.set(false);

    let submit = move || {
        let draft = OrderDraft {
            so: so.get_untracked(),
            name: name.get_untracked(),
            company: company.get_untracked(),
            peptide: peptide.get_untracked(),
            endotoxin: endotoxin.get_untracked(),
            sterility: sterility.get_untracked(),
        };
        if ctx.add_order(draft) {
            close();
        }
    };

    let field = |label: &'static str, value: RwSignal<String>, placeholder: &'static str| {
        view! {
            <Flex vertical=true gap=FlexGap::Small>
                <Label>{label}</Label>
                <Input value=value placeholder=placeholder />
            </Flex>
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:click=move |_| close()
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    close();
                } else if ev.key() == "Enter" {
                    submit();
                }
            }
        >
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">"New Order"</h2>
                    <button class="modal__close" title="Close" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>

                <div class="modal__body">
                    <Flex vertical=true gap=FlexGap::Medium>
                        {field("SO #", so, "SO-2025-001")}
                        {field("Client name", name, "Required")}
                        {field("Company", company, "Optional")}
                        <Flex gap=FlexGap::Small>
                            {field("Peptide", peptide, "0")}
                            {field("Endotoxin", endotoxin, "0")}
                            {field("Sterility", sterility, "0")}
                        </Flex>
                    </Flex>
                </div>

                <div class="modal__footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| close()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                    >
                        "Add Order"
                    </Button>
                </div>
            </div>
        </div>
    }
}
