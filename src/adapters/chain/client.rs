//! Storage Contract Client - alloy-backed `ChainClient`
//!
//! Encodes typed Storage calls into ABI calldata and runs them over raw
//! JSON-RPC: `eth_call` for reads, `eth_sendTransaction` with `from` set
//! for writes. Signing is left to the node or wallet behind the endpoint.
//! Confirmation polls for the receipt until it appears.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use alloy::transports::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::domain::calls::{ReadCall, ReadOutput, WriteCall};
use crate::domain::project::ProjectRecord;
use crate::domain::token_list::StoredTokenList;
use crate::errors::ChainError;
use crate::ports::chain_client::{ChainClient, PendingTx, TxReceipt};

use super::abi::{self, IStorage};
use super::provider::RpcProvider;

/// Implements the `ChainClient` port over an alloy HTTP provider.
pub struct RpcChainClient {
    /// Shared RPC provider.
    provider: Arc<RpcProvider>,
    /// Receipt polling interval.
    poll_interval: Duration,
}

impl RpcChainClient {
    pub const fn new(provider: Arc<RpcProvider>, poll_interval: Duration) -> Self {
        Self {
            provider,
            poll_interval,
        }
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    #[instrument(skip(self), fields(method = call.method_name()))]
    async fn call(&self, contract: Address, call: ReadCall) -> Result<ReadOutput, ChainError> {
        let calldata = match call {
            ReadCall::Project => IStorage::projectCall {}.abi_encode(),
            ReadCall::Settings => IStorage::settingsCall {}.abi_encode(),
            ReadCall::TokenLists => IStorage::tokenListsCall {}.abi_encode(),
        };

        let tx = TransactionRequest::default()
            .to(contract)
            .input(Bytes::from(calldata).into());

        let output = self
            .provider
            .inner()
            .call(&tx)
            .await
            .map_err(rpc_error)?;

        debug!(bytes = output.len(), "Call returned");
        decode_read(call, &output)
    }

    #[instrument(skip(self, call), fields(method = call.method_name()))]
    async fn submit(
        &self,
        contract: Address,
        from: Address,
        call: WriteCall,
    ) -> Result<PendingTx, ChainError> {
        let calldata = encode_write(call)?;

        let tx = TransactionRequest::default()
            .from(from)
            .to(contract)
            .input(Bytes::from(calldata).into());

        let pending = self
            .provider
            .inner()
            .send_transaction(tx)
            .await
            .map_err(rejected)?;

        Ok(PendingTx {
            tx_hash: *pending.tx_hash(),
        })
    }

    #[instrument(skip(self), fields(tx_hash = %pending.tx_hash))]
    async fn confirm(&self, pending: PendingTx) -> Result<TxReceipt, ChainError> {
        let inner = self.provider.inner();

        loop {
            let receipt = inner
                .get_transaction_receipt(pending.tx_hash)
                .await
                .map_err(rpc_error)?;

            let Some(receipt) = receipt else {
                tokio::time::sleep(self.poll_interval).await;
                continue;
            };

            if !receipt.status() {
                warn!("Transaction reverted");
                return Err(ChainError::Reverted {
                    tx_hash: pending.tx_hash,
                });
            }

            return Ok(TxReceipt {
                tx_hash: receipt.transaction_hash,
                block_number: receipt.block_number,
            });
        }
    }
}

fn encode_write(call: WriteCall) -> Result<Vec<u8>, ChainError> {
    let calldata = match call {
        WriteCall::AddFullData(record) => IStorage::addFullDataCall {
            _data: abi::Project::try_from(record)?,
        }
        .abi_encode(),
        WriteCall::SetSettings { settings } => IStorage::setSettingsCall {
            _settings: settings,
        }
        .abi_encode(),
        WriteCall::AddTokenList { name, data } => IStorage::addTokenListCall {
            _name: name,
            _data: data,
        }
        .abi_encode(),
        WriteCall::UpdateTokenList {
            old_name,
            name,
            data,
        } => IStorage::updateTokenListCall {
            _oldName: old_name,
            _name: name,
            _data: data,
        }
        .abi_encode(),
        WriteCall::RemoveTokenList { name } => {
            IStorage::removeTokenListCall { _name: name }.abi_encode()
        }
    };
    Ok(calldata)
}

/// Decode call output; empty output means there is no Storage contract at
/// the address on this network.
fn decode_read(call: ReadCall, output: &[u8]) -> Result<ReadOutput, ChainError> {
    if output.is_empty() {
        return Err(ChainError::InvalidReturnValues(format!(
            "{} returned no data",
            call.method_name()
        )));
    }

    let invalid = |e: alloy::sol_types::Error| ChainError::InvalidReturnValues(e.to_string());

    match call {
        ReadCall::Project => {
            let ret = IStorage::projectCall::abi_decode_returns(output, true).map_err(invalid)?;
            Ok(ReadOutput::Project(ProjectRecord::try_from(ret._0)?))
        }
        ReadCall::Settings => {
            let ret = IStorage::settingsCall::abi_decode_returns(output, true).map_err(invalid)?;
            Ok(ReadOutput::Settings(ret._0))
        }
        ReadCall::TokenLists => {
            let ret =
                IStorage::tokenListsCall::abi_decode_returns(output, true).map_err(invalid)?;
            Ok(ReadOutput::TokenLists(
                ret._0
                    .into_iter()
                    .map(|list| StoredTokenList {
                        name: list.name,
                        data: list.data,
                    })
                    .collect(),
            ))
        }
    }
}

impl TryFrom<ProjectRecord> for abi::Project {
    type Error = ChainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let tokens = record
            .tokens_json()
            .map_err(|e| ChainError::Encode(e.to_string()))?;
        Ok(Self {
            name: record.name,
            logo: record.logo,
            brandColor: record.brand_color,
            listName: record.list_name,
            tokens,
        })
    }
}

impl TryFrom<abi::Project> for ProjectRecord {
    type Error = ChainError;

    fn try_from(project: abi::Project) -> Result<Self, Self::Error> {
        let tokens = if project.tokens.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&project.tokens)
                .map_err(|e| ChainError::MalformedRecord(format!("project tokens: {e}")))?
        };
        Ok(Self {
            name: project.name,
            logo: project.logo,
            brand_color: project.brandColor,
            list_name: project.listName,
            tokens,
        })
    }
}

fn rpc_error(e: RpcError<TransportErrorKind>) -> ChainError {
    ChainError::Rpc(e.to_string())
}

/// JSON-RPC error responses to a send are refusals (user denied, nonce,
/// funds); anything else is a transport failure.
fn rejected(e: RpcError<TransportErrorKind>) -> ChainError {
    match e.as_error_resp() {
        Some(payload) => ChainError::Rejected(payload.message.to_string()),
        None => rpc_error(e),
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolValue;

    use super::*;
    use crate::domain::token::Token;

    fn record() -> ProjectRecord {
        ProjectRecord {
            name: "Definance".to_string(),
            logo: "https://example.org/logo.svg".to_string(),
            brand_color: "#ff6600".to_string(),
            list_name: "Main".to_string(),
            tokens: vec![Token::new(56, "0xabc", "Foo", "FOO", 18)],
        }
    }

    #[test]
    fn test_empty_output_is_invalid_return_values() {
        let err = decode_read(ReadCall::Settings, &[]).unwrap_err();
        assert!(err.is_invalid_return_values());
    }

    #[test]
    fn test_garbage_output_is_invalid_return_values() {
        let err = decode_read(ReadCall::TokenLists, &[0xde, 0xad]).unwrap_err();
        assert!(err.is_invalid_return_values());
    }

    #[test]
    fn test_decode_settings() {
        let output = ("{\"theme\":\"dark\"}".to_string(),).abi_encode_params();
        let decoded = decode_read(ReadCall::Settings, &output).unwrap();
        assert_eq!(decoded, ReadOutput::Settings("{\"theme\":\"dark\"}".to_string()));
    }

    #[test]
    fn test_decode_project_restores_tokens() {
        let project = abi::Project::try_from(record()).unwrap();
        let output = (project,).abi_encode_params();
        let decoded = decode_read(ReadCall::Project, &output).unwrap();
        assert_eq!(decoded, ReadOutput::Project(record()));
    }

    fn stored_project(tokens: &str) -> abi::Project {
        abi::Project {
            name: "Definance".to_string(),
            logo: String::new(),
            brandColor: String::new(),
            listName: "Main".to_string(),
            tokens: tokens.to_string(),
        }
    }

    #[test]
    fn test_foreign_tokens_read_back_unchanged() {
        let stored = r#"[{"symbol":"FOO","address":"0xabc","decimals":"18"}]"#;
        let record = ProjectRecord::try_from(stored_project(stored)).unwrap();

        assert_eq!(record.tokens.len(), 1);
        assert_eq!(record.tokens[0].symbol(), Some("FOO"));
        assert_eq!(record.tokens_json().unwrap(), stored);
        assert_eq!(abi::Project::try_from(record).unwrap().tokens, stored);
    }

    #[test]
    fn test_unparseable_tokens_are_not_a_wrong_contract() {
        let err = ProjectRecord::try_from(stored_project("not json")).unwrap_err();
        assert!(matches!(err, ChainError::MalformedRecord(_)));
        assert!(!err.is_invalid_return_values());
    }

    #[test]
    fn test_encode_write_selector() {
        let calldata = encode_write(WriteCall::RemoveTokenList {
            name: "Foo".to_string(),
        })
        .unwrap();
        assert_eq!(calldata[..4], IStorage::removeTokenListCall::SELECTOR);

        let decoded = IStorage::removeTokenListCall::abi_decode(&calldata, true).unwrap();
        assert_eq!(decoded._name, "Foo");
    }
}
