//! Payments & Provisioning tab

use super::view_model::PaymentsTabVm;
use crate::domain::payments::ui::provision::provision_view;
use crate::shared::components::ui::SelectorButton;
use crate::shared::icons::icon;
use contracts::enums::PaymentNetwork;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PaymentsTab() -> impl IntoView {
    let vm = PaymentsTabVm::new();

    view! {
        <div class="payments-tab">
            <h2 class="payments-tab__title">"💳 Payments & Provisioning"</h2>

            <Flex class="payments-tab__selectors" gap=FlexGap::Large>
                {PaymentNetwork::all()
                    .into_iter()
                    .map(move |network| {
                        view! {
                            <SelectorButton
                                active=Signal::derive(move || vm.is_active(network))
                                on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.select(network))
                            >
                                {icon(network.code())} " " {network.display_name()}
                            </SelectorButton>
                        }
                    })
                    .collect_view()}
            </Flex>

            <div class="payments-tab__panel">
                {move || provision_view(vm.selected.get())}
            </div>
        </div>
    }
}
