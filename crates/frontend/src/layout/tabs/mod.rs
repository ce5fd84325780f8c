pub mod dashboard_tabs;

pub use dashboard_tabs::DashboardTabs;
