//! Provisioning panels, one per payment network.
//!
//! Panels only describe the action. No wallet, card or credential is
//! actually provisioned.

use contracts::enums::PaymentNetwork;
use leptos::prelude::*;
use thaw::Card;

/// Card block with the network's provisioning title and description.
#[component]
pub fn ProvisionPanel(network: PaymentNetwork) -> impl IntoView {
    let info = network.provisioning();

    view! {
        <Card attr:style="padding: var(--spacing-lg); animation: card-appear 0.28s ease-out both;">
            <div class="provision-panel" data-network=network.code()>
                <h3 class="provision-panel__title">{format!("{} {}", info.icon, info.title)}</h3>
                <p class="provision-panel__description">{info.description}</p>
            </div>
        </Card>
    }
}

#[component]
pub fn MastercardProvision() -> impl IntoView {
    view! { <ProvisionPanel network=PaymentNetwork::Mastercard /> }
}

#[component]
pub fn VisaProvision() -> impl IntoView {
    view! { <ProvisionPanel network=PaymentNetwork::Visa /> }
}

#[component]
pub fn BitcoinProvision() -> impl IntoView {
    view! { <ProvisionPanel network=PaymentNetwork::Bitcoin /> }
}

/// Panel mounted for the given selection.
pub fn provision_view(network: PaymentNetwork) -> AnyView {
    match network {
        PaymentNetwork::Mastercard => view! { <MastercardProvision /> }.into_any(),
        PaymentNetwork::Visa => view! { <VisaProvision /> }.into_any(),
        PaymentNetwork::Bitcoin => view! { <BitcoinProvision /> }.into_any(),
        // PaymentNetwork is non_exhaustive: networks without a panel render nothing
        _ => ().into_any(),
    }
}
