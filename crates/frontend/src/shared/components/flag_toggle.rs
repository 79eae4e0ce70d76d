use leptos::prelude::*;

/// One fulfillment flag rendered as a small toggle button.
#[component]
pub fn FlagToggle(
    /// Current flag value.
    checked: bool,
    /// Called with the flipped value on click.
    on_change: Callback<bool>,
    /// Tooltip text.
    #[prop(optional, into)]
    title: String,
) -> impl IntoView {
    view! {
        <button
            class=if checked { "flag-toggle flag-toggle--on" } else { "flag-toggle" }
            title=title
            on:click=move |_| on_change.run(!checked)
        >
            {if checked { "✓" } else { "✕" }}
        </button>
    }
}
