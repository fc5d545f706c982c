use {
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

const DEFAULT_CURRENCY: &str = "USD";

/// ISO 4217 code as the API spells it on the wire (`"USD"`). Kept opaque:
/// whatever code the server echoes back is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn usd() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
