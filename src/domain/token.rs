//! Token-list entry.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A single token record inside a token list.
///
/// The shape is owned by the token-list standard and by whoever built the
/// list, not by this crate: the raw JSON is kept as-is and written back
/// untouched. Accessors read the well-known keys when they are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(Value);

impl Token {
    /// Build a standard token-list entry.
    pub fn new(
        chain_id: u64,
        address: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self(json!({
            "chainId": chain_id,
            "address": address.into(),
            "name": name.into(),
            "symbol": symbol.into(),
            "decimals": decimals,
        }))
    }

    #[must_use]
    pub fn with_logo_uri(mut self, logo_uri: impl Into<String>) -> Self {
        if let Value::Object(fields) = &mut self.0 {
            fields.insert("logoURI".to_string(), Value::String(logo_uri.into()));
        }
        self
    }

    pub fn symbol(&self) -> Option<&str> {
        self.0.get("symbol").and_then(Value::as_str)
    }

    pub fn address(&self) -> Option<&str> {
        self.0.get("address").and_then(Value::as_str)
    }

    /// Decimals, whether stored as a number or a numeric string.
    pub fn decimals(&self) -> Option<u64> {
        match self.0.get("decimals")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn logo_uri(&self) -> Option<&str> {
        self.0.get("logoURI").and_then(Value::as_str)
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_entry_survives() {
        let raw = r#"{
            "chainId": 56,
            "address": "0x55d398326f99059fF775485246999027B3197955",
            "name": "Tether USD",
            "symbol": "USDT",
            "decimals": 18,
            "logoURI": "https://example.org/usdt.png",
            "extensions": {"bridgeInfo": {"1": {"tokenAddress": "0xdac17f958d2ee523a2206206994597c13d831ec7"}}}
        }"#;

        let token: Token = serde_json::from_str(raw).unwrap();
        assert_eq!(token.symbol(), Some("USDT"));
        assert_eq!(token.decimals(), Some(18));
        assert_eq!(token.logo_uri(), Some("https://example.org/usdt.png"));

        let original: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_value(&token).unwrap(), original);
    }

    #[test]
    fn test_minimal_and_foreign_entries_accepted() {
        let minimal: Token =
            serde_json::from_str(r#"{"symbol":"FOO","address":"0xabc","decimals":18}"#).unwrap();
        assert_eq!(minimal.address(), Some("0xabc"));
        assert_eq!(minimal.decimals(), Some(18));

        let foreign: Token =
            serde_json::from_str(r#"{"symbol":"FOO","address":"0xabc","decimals":"18"}"#).unwrap();
        assert_eq!(foreign.decimals(), Some(18));
        assert_eq!(
            serde_json::to_string(&foreign).unwrap(),
            r#"{"symbol":"FOO","address":"0xabc","decimals":"18"}"#
        );
    }

    #[test]
    fn test_new_omits_optional_keys() {
        let token = Token::new(1, "0x0", "Foo", "FOO", 6);
        assert!(token.as_value().get("logoURI").is_none());
        assert_eq!(token.with_logo_uri("http://x").logo_uri(), Some("http://x"));
    }
}
