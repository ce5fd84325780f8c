//! Dashboard tab strip.
//!
//! Controlled view: the selected tab is read from `selected` and every
//! activation is reported through `on_change`. The component never changes
//! the selection itself.

use crate::shared::icons::icon;
use contracts::enums::DashboardTab;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// `true` iff `selected` names `tab`. Identifiers outside the closed set
/// match nothing.
pub fn is_tab_active(selected: &str, tab: DashboardTab) -> bool {
    DashboardTab::from_code(selected) == Some(tab)
}

/// Tab to report when `clicked` is activated while `selected` is current.
/// Clicking the already active tab reports nothing.
pub fn tab_activation(selected: &str, clicked: DashboardTab) -> Option<DashboardTab> {
    if is_tab_active(selected, clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Forward an activation to the parent. Returns whether the callback ran.
pub fn relay_activation<E: 'static>(
    selected: &str,
    clicked: DashboardTab,
    event: E,
    on_change: Callback<(E, DashboardTab)>,
) -> bool {
    match tab_activation(selected, clicked) {
        Some(tab) => {
            on_change.run((event, tab));
            true
        }
        None => false,
    }
}

#[component]
pub fn DashboardTabs(
    /// Currently selected tab identifier, owned by the parent
    #[prop(into)]
    selected: Signal<String>,
    /// Called with the click event and the newly chosen tab
    on_change: Callback<(MouseEvent, DashboardTab)>,
) -> impl IntoView {
    view! {
        <div class="page__tabs dashboard-tabs" role="tablist" aria-label="dashboard tabs">
            {DashboardTab::all()
                .into_iter()
                .map(move |tab| {
                    let active = move || selected.with(|s| is_tab_active(s, tab));
                    view! {
                        <button
                            class="page__tab"
                            class:page__tab--active=active
                            role="tab"
                            aria-selected=move || if active() { "true" } else { "false" }
                            data-value=tab.code()
                            on:click=move |ev| {
                                relay_activation(&selected.get_untracked(), tab, ev, on_change);
                            }
                        >
                            {icon(tab.code())} {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Callback<((), DashboardTab)>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let callback = Callback::new(move |(_, tab): ((), DashboardTab)| {
            sink.lock().unwrap().push(tab.code().to_string());
        });
        (callback, calls)
    }

    #[test]
    fn test_payments_marked_active() {
        let active: Vec<_> = DashboardTab::all()
            .into_iter()
            .filter(|t| is_tab_active("payments", *t))
            .collect();
        assert_eq!(active, vec![DashboardTab::Payments]);
    }

    #[test]
    fn test_unknown_selection_marks_nothing() {
        for selected in ["", "Payments", "reports", "payments "] {
            assert!(DashboardTab::all()
                .into_iter()
                .all(|t| !is_tab_active(selected, t)));
        }
    }

    #[test]
    fn test_transactions_click_reports_once() {
        let owner = Owner::new();
        owner.set();

        for previous in ["overview", "payments", "settings", "unknown"] {
            let (on_change, calls) = recorder();
            assert!(relay_activation(previous, DashboardTab::Transactions, (), on_change));
            assert_eq!(*calls.lock().unwrap(), vec!["transactions".to_string()]);
        }
    }

    #[test]
    fn test_clicking_active_tab_reports_nothing() {
        let owner = Owner::new();
        owner.set();

        let (on_change, calls) = recorder();
        assert!(!relay_activation("settings", DashboardTab::Settings, (), on_change));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(tab_activation("settings", DashboardTab::Settings), None);
    }
}
