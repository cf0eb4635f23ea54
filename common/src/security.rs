//! Shared security record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub name: String,
    #[serde(rename = "type")]
    pub security_type: String,
    pub currency: String,
    pub is_private: bool,
}

impl Security {
    pub fn new(name: impl Into<String>, security_type: impl Into<String>, currency: impl Into<String>, is_private: bool) -> Self {
        Self { name: name.into(), security_type: security_type.into(), currency: currency.into(), is_private }
    }
}
