//! Storage contract ABI.

use alloy::sol;

sol! {
    /// Flat project record.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct Project {
        string name;
        string logo;
        string brandColor;
        string listName;
        string tokens;
    }

    /// Named token list document.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct TokenList {
        string name;
        string data;
    }

    #[derive(Debug)]
    interface IStorage {
        function addFullData(Project _data) external;
        function project() external view returns (Project memory);
        function settings() external view returns (string memory);
        function tokenLists() external view returns (TokenList[] memory);
        function setSettings(string _settings) external;
        function addTokenList(string _name, string _data) external;
        function updateTokenList(string _oldName, string _name, string _data) external;
        function removeTokenList(string _name) external;
    }
}
