//! ViewModel for the Payments tab

use contracts::enums::PaymentNetwork;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PaymentsTabVm {
    pub selected: RwSignal<PaymentNetwork>,
}

impl PaymentsTabVm {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(PaymentNetwork::default()),
        }
    }

    /// Make `network` the active one. Re-selecting the active network does
    /// not write the signal, so nothing re-renders.
    pub fn select(&self, network: PaymentNetwork) {
        if self.selected.get_untracked() == network {
            return;
        }
        log::debug!("payments tab: {} -> {}", self.selected.get_untracked(), network);
        self.selected.set(network);
    }

    pub fn is_active(&self, network: PaymentNetwork) -> bool {
        self.selected.get() == network
    }

    pub fn active_panel_title(&self) -> &'static str {
        self.selected.get().provisioning().title
    }
}

impl Default for PaymentsTabVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(vm: &PaymentsTabVm) -> usize {
        PaymentNetwork::all()
            .into_iter()
            .filter(|n| vm.is_active(*n))
            .count()
    }

    #[test]
    fn test_defaults_to_mastercard() {
        let owner = Owner::new();
        owner.set();

        let vm = PaymentsTabVm::new();
        assert_eq!(vm.selected.get_untracked(), PaymentNetwork::Mastercard);
        assert_eq!(vm.active_panel_title(), "Mastercard Provisioning");
        assert!(vm.is_active(PaymentNetwork::Mastercard));
    }

    #[test]
    fn test_select_shows_matching_panel() {
        let owner = Owner::new();
        owner.set();

        let vm = PaymentsTabVm::new();
        let expected = [
            (PaymentNetwork::Bitcoin, "Bitcoin Provisioning"),
            (PaymentNetwork::Visa, "Visa Provisioning"),
            (PaymentNetwork::Mastercard, "Mastercard Provisioning"),
        ];
        for (network, title) in expected {
            vm.select(network);
            assert_eq!(vm.active_panel_title(), title);
            assert!(vm.is_active(network));
            assert_eq!(active_count(&vm), 1);
        }
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let owner = Owner::new();
        owner.set();

        let vm = PaymentsTabVm::new();
        vm.select(PaymentNetwork::Visa);
        vm.select(PaymentNetwork::Visa);
        assert_eq!(vm.selected.get_untracked(), PaymentNetwork::Visa);
        assert_eq!(vm.active_panel_title(), "Visa Provisioning");
        assert_eq!(active_count(&vm), 1);
    }

    #[test]
    fn test_exactly_one_active_from_start() {
        let owner = Owner::new();
        owner.set();

        let vm = PaymentsTabVm::new();
        assert_eq!(active_count(&vm), 1);
    }
}
