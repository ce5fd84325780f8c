use super::error::UnknownIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment networks offered on the provisioning screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PaymentNetwork {
    #[default]
    Mastercard,
    Visa,
    Bitcoin,
}

/// Static copy shown on a provisioning panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl PaymentNetwork {
    /// Identifier used in markup and serialization
    pub fn code(&self) -> &'static str {
        match self {
            PaymentNetwork::Mastercard => "mastercard",
            PaymentNetwork::Visa => "visa",
            PaymentNetwork::Bitcoin => "bitcoin",
        }
    }

    /// Label for the selector button
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentNetwork::Mastercard => "Mastercard",
            PaymentNetwork::Visa => "Visa",
            PaymentNetwork::Bitcoin => "Bitcoin",
        }
    }

    /// All networks in selector order
    pub fn all() -> Vec<PaymentNetwork> {
        vec![
            PaymentNetwork::Mastercard,
            PaymentNetwork::Visa,
            PaymentNetwork::Bitcoin,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mastercard" => Some(PaymentNetwork::Mastercard),
            "visa" => Some(PaymentNetwork::Visa),
            "bitcoin" => Some(PaymentNetwork::Bitcoin),
            _ => None,
        }
    }

    /// Title and one-line description of the provisioning action.
    ///
    /// The actions are described only; nothing here talks to a card network
    /// or generates keys.
    pub fn provisioning(&self) -> ProvisionInfo {
        match self {
            PaymentNetwork::Mastercard => ProvisionInfo {
                icon: "💳",
                title: "Mastercard Provisioning",
                description:
                    "Provision a stablecoin-backed card or initiate tap-to-ATM handshake.",
            },
            PaymentNetwork::Visa => ProvisionInfo {
                icon: "🧾",
                title: "Visa Provisioning",
                description: "Provision a Visa credential for tap-to-lease or tap-to-pay flows.",
            },
            PaymentNetwork::Bitcoin => ProvisionInfo {
                icon: "🪙",
                title: "Bitcoin Provisioning",
                description:
                    "Generate a wallet or Lightning invoice for tap-to-pay functionality.",
            },
        }
    }
}

impl fmt::Display for PaymentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentNetwork {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownIdentifier::new("payment network", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mastercard() {
        assert_eq!(PaymentNetwork::default(), PaymentNetwork::Mastercard);
    }

    #[test]
    fn test_codes_parse_back() {
        for network in PaymentNetwork::all() {
            assert_eq!(network.code().parse::<PaymentNetwork>(), Ok(network));
            assert_eq!(network.to_string(), network.code());
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Bitcoin".parse::<PaymentNetwork>().unwrap_err();
        assert_eq!(err.value, "Bitcoin");
        assert_eq!(
            err.to_string(),
            "unknown payment network identifier: 'Bitcoin'"
        );
        assert_eq!(PaymentNetwork::from_code("amex"), None);
    }

    #[test]
    fn test_provisioning_titles() {
        assert_eq!(
            PaymentNetwork::Bitcoin.provisioning().title,
            "Bitcoin Provisioning"
        );
        assert_eq!(
            PaymentNetwork::Mastercard.provisioning().title,
            "Mastercard Provisioning"
        );
        assert_eq!(PaymentNetwork::Visa.provisioning().title, "Visa Provisioning");
        for network in PaymentNetwork::all() {
            let info = network.provisioning();
            assert!(info.title.starts_with(network.display_name()));
            assert!(!info.description.is_empty());
        }
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&PaymentNetwork::Visa).unwrap();
        assert_eq!(json, "\"visa\"");
        let parsed: PaymentNetwork = serde_json::from_str("\"bitcoin\"").unwrap();
        assert_eq!(parsed, PaymentNetwork::Bitcoin);
    }
}
