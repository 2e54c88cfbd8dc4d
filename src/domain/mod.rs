//! Domain Layer - Storage Contract Data Model
//!
//! Pure types with no I/O: project records, token lists, the contract's
//! call vocabulary and the method dispatch table.

pub mod calls;
pub mod method;
pub mod project;
pub mod token;
pub mod token_list;

pub use calls::{ReadCall, ReadOutput, WriteCall};
pub use method::{OptionValue, StorageMethod};
pub use project::{ContractOptions, ProjectOptions, ProjectRecord};
pub use token::Token;
pub use token_list::{StoredTokenList, TokenList, TokenListInput, Version};
