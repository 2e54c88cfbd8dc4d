//! Token List - Versioned JSON Catalog Stored On-chain
//!
//! The Storage contract keeps each token list as an opaque string keyed by
//! name. Whatever is written must be a complete token-list document:
//! `name`, generation `timestamp`, semantic `version`, `tokens` and, only
//! when set, `logoURI`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::token::Token;

/// Semantic version of a token list.
///
/// Bump `major` when tokens are removed, `minor` when tokens are added and
/// `patch` when details of listed tokens change. Callers own the bumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Default for Version {
    fn default() -> Self {
        Self {
            major: 1,
            minor: 0,
            patch: 0,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Token list document as stored in the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenList {
    pub name: String,
    /// ISO-8601 generation time.
    pub timestamp: String,
    pub version: Version,
    pub tokens: Vec<Token>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl TokenList {
    /// Build a list document from caller input, stamped with `timestamp`.
    ///
    /// An empty `logoURI` is treated as absent.
    pub fn from_input(input: &TokenListInput, timestamp: String) -> Self {
        Self {
            name: input.name.clone(),
            timestamp,
            version: input.version.unwrap_or_default(),
            tokens: input.tokens.clone(),
            logo_uri: input
                .logo_uri
                .as_ref()
                .filter(|uri| !uri.is_empty())
                .cloned(),
        }
    }

    /// Build a list document stamped with the current time.
    pub fn generate(input: &TokenListInput) -> Self {
        Self::from_input(input, timestamp_now())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Caller input for `addTokenList` / `updateTokenList`.
///
/// Every field has a default so a partially filled value still produces a
/// well-formed list document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListInput {
    /// Current on-chain name of the list being replaced (update only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

impl TokenListInput {
    pub fn new(name: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            name: name.into(),
            tokens,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_logo_uri(mut self, logo_uri: impl Into<String>) -> Self {
        self.logo_uri = Some(logo_uri.into());
        self
    }

    #[must_use]
    pub fn with_old_name(mut self, old_name: impl Into<String>) -> Self {
        self.old_name = Some(old_name.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }
}

/// One entry of the contract's `tokenLists()` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTokenList {
    pub name: String,
    /// Raw list document as written by add/update.
    pub data: String,
}

impl StoredTokenList {
    /// Parse the stored document back into a [`TokenList`].
    pub fn parse(&self) -> Result<TokenList, serde_json::Error> {
        serde_json::from_str(&self.data)
    }
}

/// Current UTC time as RFC 3339 with millisecond precision, e.g.
/// `2024-03-01T12:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
