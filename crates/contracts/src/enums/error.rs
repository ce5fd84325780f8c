use thiserror::Error;

/// Identifier that is not a member of a closed selection set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} identifier: '{value}'")]
pub struct UnknownIdentifier {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownIdentifier {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
