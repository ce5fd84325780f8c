use leptos::prelude::*;

/// Toggle-style button for picking one member of a closed set.
///
/// Always carries `tab-button`; `active` adds the `active` class and
/// `aria-pressed`.
#[component]
pub fn SelectorButton(
    /// Whether this option is the current selection (reactive)
    #[prop(into)]
    active: Signal<bool>,
    /// Click event handler
    on_click: Callback<leptos::ev::MouseEvent>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("tab-button {}", class).trim_end().to_string()
            class:active=move || active.get()
            aria-pressed=move || if active.get() { "true" } else { "false" }
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
