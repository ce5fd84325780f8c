pub mod page;
pub mod view_model;

pub use page::PaymentsTab;
pub use view_model::PaymentsTabVm;
