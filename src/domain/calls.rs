//! Storage Contract Calls - Typed Call Vocabulary
//!
//! Every read and write the adapter can issue against the Storage
//! contract. Chain client implementations translate these into ABI
//! calldata; tests assert on them directly.

use super::project::ProjectRecord;
use super::token_list::StoredTokenList;

/// Read-only (`eth_call`) methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadCall {
    /// `project()` — the flat project record.
    Project,
    /// `settings()` — raw settings JSON string.
    Settings,
    /// `tokenLists()` — all stored token lists.
    TokenLists,
}

impl ReadCall {
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Settings => "settings",
            Self::TokenLists => "tokenLists",
        }
    }
}

/// Decoded output of a [`ReadCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutput {
    Project(ProjectRecord),
    Settings(String),
    TokenLists(Vec<StoredTokenList>),
}

/// State-changing methods, each carrying its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteCall {
    /// `addFullData(project)`
    AddFullData(ProjectRecord),
    /// `setSettings(settings)`
    SetSettings { settings: String },
    /// `addTokenList(name, data)`
    AddTokenList { name: String, data: String },
    /// `updateTokenList(oldName, name, data)`
    UpdateTokenList {
        old_name: String,
        name: String,
        data: String,
    },
    /// `removeTokenList(name)`
    RemoveTokenList { name: String },
}

impl WriteCall {
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::AddFullData(_) => "addFullData",
            Self::SetSettings { .. } => "setSettings",
            Self::AddTokenList { .. } => "addTokenList",
            Self::UpdateTokenList { .. } => "updateTokenList",
            Self::RemoveTokenList { .. } => "removeTokenList",
        }
    }

    /// Positional string arguments in ABI order.
    ///
    /// The project record is a single tuple argument on chain; its fields
    /// are listed in tuple order with `tokens` as JSON.
    pub fn args(&self) -> Result<Vec<String>, serde_json::Error> {
        let args = match self {
            Self::AddFullData(record) => vec![
                record.name.clone(),
                record.logo.clone(),
                record.brand_color.clone(),
                record.list_name.clone(),
                record.tokens_json()?,
            ],
            Self::SetSettings { settings } => vec![settings.clone()],
            Self::AddTokenList { name, data } => vec![name.clone(), data.clone()],
            Self::UpdateTokenList {
                old_name,
                name,
                data,
            } => vec![old_name.clone(), name.clone(), data.clone()],
            Self::RemoveTokenList { name } => vec![name.clone()],
        };
        Ok(args)
    }
}
