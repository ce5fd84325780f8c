use crate::domain::payments::ui::PaymentsTab;
use crate::layout::tabs::DashboardTabs;
use crate::shared::icons::icon;
use contracts::enums::DashboardTab;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Dashboard root. Owns the selected-tab identifier and mounts the page for it.
#[component]
pub fn App() -> impl IntoView {
    let selected = RwSignal::new(DashboardTab::default().code().to_string());

    let on_change = Callback::new(move |(_, tab): (MouseEvent, DashboardTab)| {
        log::debug!("dashboard tab -> {}", tab);
        selected.set(tab.code().to_string());
    });

    view! {
        <div class="dashboard">
            <DashboardTabs selected=selected on_change=on_change />
            <div class="dashboard__content">
                {move || selected.with(|key| render_tab_content(key))}
            </div>
        </div>
    }
}

/// Page for a dashboard tab identifier; unknown identifiers render nothing.
pub fn render_tab_content(key: &str) -> AnyView {
    match DashboardTab::from_code(key) {
        Some(DashboardTab::Payments) => view! { <PaymentsTab /> }.into_any(),
        Some(tab) => view! { <SectionPlaceholder tab=tab /> }.into_any(),
        None => {
            log::warn!("no page for dashboard tab '{}'", key);
            ().into_any()
        }
    }
}

#[component]
fn SectionPlaceholder(tab: DashboardTab) -> impl IntoView {
    view! {
        <div class="dashboard__placeholder" data-value=tab.code()>
            <h2>{icon(tab.code())} " " {tab.label()}</h2>
            <p>"Nothing to show here yet."</p>
        </div>
    }
}
