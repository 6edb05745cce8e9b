//! Contract interface descriptions (ABIs)
//!
//! An [`Abi`] is kept as the raw ordered list of JSON entries from the
//! compiled artifact. Entry order and key order are both preserved so the
//! compressed payload decodes back to exactly what the compiler emitted.

pub mod compress;

pub use compress::{compress_abi, decompress_abi, MAX_INFLATED_ABI_SIZE};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered interface description of a contract
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi(Vec<Value>);

impl Abi {
    /// Create an ABI from its entries
    pub fn new(entries: Vec<Value>) -> Self {
        Self(entries)
    }

    /// Parse an ABI from its JSON array form
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Interface entries in declaration order
    pub fn entries(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the `function` entries, in order
    pub fn function_names(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("function"))
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
            .collect()
    }
}

impl From<Vec<Value>> for Abi {
    fn from(entries: Vec<Value>) -> Self {
        Self(entries)
    }
}
