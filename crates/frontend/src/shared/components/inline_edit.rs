use contracts::domain::order::parse_count;
use leptos::prelude::*;

/// Click-to-edit table cell. Commits on blur or Enter, Escape reverts.
/// Numeric cells coerce their draft through `parse_count`, so invalid
/// input commits as 0.
#[component]
pub fn InlineEdit(
    /// Current field value.
    #[prop(into)]
    value: String,
    /// Called with the normalized value when it changed.
    on_commit: Callback<String>,
    /// Treat the value as a non-negative integer count.
    #[prop(optional)]
    numeric: bool,
) -> impl IntoView {
    let original = StoredValue::new(value);
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start_editing = move |_| {
        set_draft.set(original.get_value());
        set_editing.set(true);
    };

    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let raw = draft.get_untracked();
        let normalized = if numeric {
            parse_count(&raw).to_string()
        } else {
            raw
        };
        if normalized != original.get_value() {
            on_commit.run(normalized);
        }
    };

    view! {
        {move || {
            if editing.get() {
                view! {
                    <input
                        class="inline-edit__input"
                        type=if numeric { "number" } else { "text" }
                        autofocus=true
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=move |_| commit()
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                commit();
                            } else if ev.key() == "Escape" {
                                set_editing.set(false);
                            }
                        }
                    />
                }
                .into_any()
            } else {
                let display = original.get_value();
                let empty = display.is_empty() || (numeric && display == "0");
                view! {
                    <span
                        class=if empty { "inline-edit inline-edit--empty" } else { "inline-edit" }
                        title="Click to edit"
                        on:click=start_editing
                    >
                        {if empty { "—".to_string() } else { display }}
                    </span>
                }
                .into_any()
            }
        }}
    }
}
