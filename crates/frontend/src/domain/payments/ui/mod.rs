pub mod provision;
pub mod tab;

pub use provision::{
    provision_view, BitcoinProvision, MastercardProvision, ProvisionPanel, VisaProvision,
};
pub use tab::PaymentsTab;
