use super::error::UnknownIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Transactions,
    Payments,
    Settings,
}

impl DashboardTab {
    pub fn code(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Transactions => "transactions",
            DashboardTab::Payments => "payments",
            DashboardTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Transactions => "Transactions",
            DashboardTab::Payments => "Payments",
            DashboardTab::Settings => "Settings",
        }
    }

    /// All tabs in display order
    pub fn all() -> Vec<DashboardTab> {
        vec![
            DashboardTab::Overview,
            DashboardTab::Transactions,
            DashboardTab::Payments,
            DashboardTab::Settings,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "overview" => Some(DashboardTab::Overview),
            "transactions" => Some(DashboardTab::Transactions),
            "payments" => Some(DashboardTab::Payments),
            "settings" => Some(DashboardTab::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DashboardTab {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownIdentifier::new("dashboard tab", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_display_order() {
        let labels: Vec<_> = DashboardTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Overview", "Transactions", "Payments", "Settings"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("payments".parse::<DashboardTab>(), Ok(DashboardTab::Payments));
        assert!("".parse::<DashboardTab>().is_err());
        assert!("reports".parse::<DashboardTab>().is_err());
        assert_eq!(DashboardTab::from_code("Settings"), None);
    }

    #[test]
    fn test_serde_matches_code() {
        for tab in DashboardTab::all() {
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.code()));
        }
    }
}
