//! Project branding data and the contract's read-back views.

use serde::{Deserialize, Serialize};

use super::token::Token;
use super::token_list::StoredTokenList;

/// Caller input for a full project write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    pub project_name: String,
    pub logo_url: String,
    pub brand_color: String,
    pub list_name: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// The flat project record the contract stores (`addFullData` / `project()`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    pub logo: String,
    pub brand_color: String,
    pub list_name: String,
    pub tokens: Vec<Token>,
}

impl From<ProjectOptions> for ProjectRecord {
    fn from(options: ProjectOptions) -> Self {
        Self {
            name: options.project_name,
            logo: options.logo_url,
            brand_color: options.brand_color,
            list_name: options.list_name,
            tokens: options.tokens,
        }
    }
}

impl ProjectRecord {
    /// `tokens` as the JSON string the contract stores.
    pub fn tokens_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.tokens)
    }
}

/// Settings and token lists read from the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractOptions {
    /// Raw settings JSON; `"{}"` when the contract holds nothing.
    pub str_settings: String,
    pub token_lists: Vec<StoredTokenList>,
}

impl ContractOptions {
    pub const EMPTY_SETTINGS: &'static str = "{}";

    /// Wrap raw reads, defaulting empty settings to `"{}"`.
    pub fn new(settings: String, token_lists: Vec<StoredTokenList>) -> Self {
        let str_settings = if settings.is_empty() {
            Self::EMPTY_SETTINGS.to_string()
        } else {
            settings
        };
        Self {
            str_settings,
            token_lists,
        }
    }

    /// Parse `str_settings` as JSON.
    pub fn settings(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.str_settings)
    }

    pub fn token_list(&self, name: &str) -> Option<&StoredTokenList> {
        self.token_lists.iter().find(|list| list.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_map_to_record() {
        let options = ProjectOptions {
            project_name: "Definance".to_string(),
            logo_url: "https://example.org/logo.svg".to_string(),
            brand_color: "#ff6600".to_string(),
            list_name: "Main".to_string(),
            tokens: vec![Token::new(1, "0x1", "A", "A", 18)],
        };

        let record = ProjectRecord::from(options.clone());
        assert_eq!(record.name, options.project_name);
        assert_eq!(record.logo, options.logo_url);
        assert_eq!(record.brand_color, options.brand_color);
        assert_eq!(record.list_name, options.list_name);
        assert_eq!(record.tokens, options.tokens);
    }

    #[test]
    fn test_tokens_json_keeps_entries_verbatim() {
        let foreign: Token =
            serde_json::from_str(r#"{"symbol":"FOO","address":"0xabc","decimals":"18"}"#).unwrap();
        let record = ProjectRecord {
            tokens: vec![foreign],
            ..ProjectRecord::default()
        };
        assert_eq!(
            record.tokens_json().unwrap(),
            r#"[{"symbol":"FOO","address":"0xabc","decimals":"18"}]"#
        );
        assert_eq!(ProjectRecord::default().tokens_json().unwrap(), "[]");
    }

    #[test]
    fn test_empty_settings_default() {
        let options = ContractOptions::new(String::new(), vec![]);
        assert_eq!(options.str_settings, "{}");
        assert!(options.settings().unwrap().as_object().unwrap().is_empty());
    }

    #[test]
    fn test_settings_kept_and_serialized_camel_case() {
        let options = ContractOptions::new(
            r#"{"theme":"dark"}"#.to_string(),
            vec![StoredTokenList {
                name: "Foo".to_string(),
                data: "{}".to_string(),
            }],
        );
        assert_eq!(options.settings().unwrap()["theme"], "dark");
        assert!(options.token_list("Foo").is_some());
        assert!(options.token_list("Bar").is_none());

        let value = serde_json::to_value(&options).unwrap();
        assert!(value.get("strSettings").is_some());
        assert!(value.get("tokenLists").is_some());
    }
}
