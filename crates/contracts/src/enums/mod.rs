pub mod dashboard_tab;
pub mod error;
pub mod payment_network;

pub use dashboard_tab::DashboardTab;
pub use error::UnknownIdentifier;
pub use payment_network::{PaymentNetwork, ProvisionInfo};
