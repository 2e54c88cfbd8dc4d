//! Option Methods - Name-keyed Dispatch Table
//!
//! Maps the public method names accepted by `save_project_option` to the
//! contract call each one issues:
//!
//! | method            | args                                  |
//! |-------------------|---------------------------------------|
//! | `setSettings`     | `[value]`                             |
//! | `addTokenList`    | `[value.name, JSON(list)]`            |
//! | `updateTokenList` | `[value.oldName, value.name, JSON(list)]` |
//! | `removeTokenList` | `[value]`                             |
//!
//! Anything else is rejected before touching the network.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::calls::WriteCall;
use super::token_list::{TokenList, TokenListInput};
use crate::errors::StorageError;

/// Option-setting methods of the Storage contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMethod {
    SetSettings,
    AddTokenList,
    UpdateTokenList,
    RemoveTokenList,
}

impl StorageMethod {
    pub const ALL: [Self; 4] = [
        Self::SetSettings,
        Self::AddTokenList,
        Self::UpdateTokenList,
        Self::RemoveTokenList,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::SetSettings => "setSettings",
            Self::AddTokenList => "addTokenList",
            Self::UpdateTokenList => "updateTokenList",
            Self::RemoveTokenList => "removeTokenList",
        }
    }

    /// Resolve an optional method name; missing and empty names are unknown.
    pub fn resolve(method: Option<&str>) -> Result<Self, StorageError> {
        method
            .ok_or(StorageError::UnknownMethod { method: None })?
            .parse()
    }

    /// Build the contract call for this method from `value`.
    ///
    /// List-mutating methods stamp a fresh token-list document.
    pub fn build_call(self, value: OptionValue) -> Result<WriteCall, StorageError> {
        match (self, value) {
            (Self::SetSettings, OptionValue::Text(settings)) => {
                Ok(WriteCall::SetSettings { settings })
            }
            (Self::RemoveTokenList, OptionValue::Text(name)) => {
                Ok(WriteCall::RemoveTokenList { name })
            }
            (Self::AddTokenList, OptionValue::TokenList(input)) => {
                let data = TokenList::generate(&input).to_json()?;
                Ok(WriteCall::AddTokenList {
                    name: input.name,
                    data,
                })
            }
            (Self::UpdateTokenList, OptionValue::TokenList(input)) => {
                let data = TokenList::generate(&input).to_json()?;
                let old_name = input.old_name.ok_or(StorageError::InvalidOptionValue {
                    method: self.name(),
                    expected: "a token list with oldName",
                })?;
                Ok(WriteCall::UpdateTokenList {
                    old_name,
                    name: input.name,
                    data,
                })
            }
            (Self::SetSettings | Self::RemoveTokenList, OptionValue::TokenList(_)) => {
                Err(StorageError::InvalidOptionValue {
                    method: self.name(),
                    expected: "a string",
                })
            }
            (Self::AddTokenList | Self::UpdateTokenList, OptionValue::Text(_)) => {
                Err(StorageError::InvalidOptionValue {
                    method: self.name(),
                    expected: "a token list",
                })
            }
        }
    }
}

impl std::fmt::Display for StorageMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StorageMethod {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| StorageError::UnknownMethod {
                method: Some(s.to_string()),
            })
    }
}

/// Value passed alongside a method name.
///
/// Deserializes untagged: a JSON string is `Text`, an object is a
/// `TokenList` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    TokenList(TokenListInput),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<TokenListInput> for OptionValue {
    fn from(value: TokenListInput) -> Self {
        Self::TokenList(value)
    }
}
