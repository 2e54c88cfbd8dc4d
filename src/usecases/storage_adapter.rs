//! Storage Adapter Use Case - Project Options On-chain
//!
//! Reads and writes project branding, settings and token lists on the
//! Storage contract through the `ChainClient` and `Wallet` ports. Each
//! operation is an independent unit of work: no caching, no retries, no
//! ordering between concurrent calls.

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use tracing::{debug, info, instrument, warn};

use crate::domain::calls::{ReadCall, ReadOutput, WriteCall};
use crate::domain::method::{OptionValue, StorageMethod};
use crate::domain::project::{ContractOptions, ProjectOptions, ProjectRecord};
use crate::domain::token_list::StoredTokenList;
use crate::errors::{ChainError, StorageError};
use crate::ports::chain_client::{ChainClient, TxReceipt};
use crate::ports::wallet::Wallet;

/// Callback invoked once with the transaction hash, before confirmation.
pub type OnHash = Box<dyn FnOnce(TxHash) + Send>;

/// Storage contract bound to an address.
pub struct StorageContract<C: ChainClient + ?Sized> {
    chain: Arc<C>,
    address: Address,
}

impl<C: ChainClient + ?Sized> StorageContract<C> {
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Run a read-only call.
    pub async fn call(&self, call: ReadCall) -> Result<ReadOutput, ChainError> {
        self.chain.call(self.address, call).await
    }

    pub async fn project(&self) -> Result<ProjectRecord, ChainError> {
        match self.call(ReadCall::Project).await? {
            ReadOutput::Project(record) => Ok(record),
            other => Err(unexpected_output(ReadCall::Project, &other)),
        }
    }

    pub async fn settings(&self) -> Result<String, ChainError> {
        match self.call(ReadCall::Settings).await? {
            ReadOutput::Settings(settings) => Ok(settings),
            other => Err(unexpected_output(ReadCall::Settings, &other)),
        }
    }

    pub async fn token_lists(&self) -> Result<Vec<StoredTokenList>, ChainError> {
        match self.call(ReadCall::TokenLists).await? {
            ReadOutput::TokenLists(lists) => Ok(lists),
            other => Err(unexpected_output(ReadCall::TokenLists, &other)),
        }
    }

    /// Submit a write as `from`, notify `on_hash` once accepted, then wait
    /// for the receipt.
    pub async fn send(
        &self,
        from: Address,
        call: WriteCall,
        on_hash: Option<OnHash>,
    ) -> Result<TxReceipt, ChainError> {
        let method = call.method_name();
        let pending = self.chain.submit(self.address, from, call).await?;
        debug!(method, tx_hash = %pending.tx_hash, "Transaction accepted");

        if let Some(notify) = on_hash {
            notify(pending.tx_hash);
        }

        let receipt = self.chain.confirm(pending).await?;
        info!(
            method,
            tx_hash = %receipt.tx_hash,
            block = ?receipt.block_number,
            "Transaction confirmed"
        );
        Ok(receipt)
    }
}

fn unexpected_output(call: ReadCall, output: &ReadOutput) -> ChainError {
    ChainError::InvalidReturnValues(format!(
        "{} returned {output:?}",
        call.method_name()
    ))
}

/// Request for [`StorageAdapter::save_project_option`].
pub struct SaveOptionRequest<'a> {
    pub contract_address: &'a str,
    /// Method name from the dispatch table; `None` is rejected.
    pub method: Option<&'a str>,
    pub value: OptionValue,
    pub on_hash: Option<OnHash>,
}

impl<'a> SaveOptionRequest<'a> {
    pub fn new(contract_address: &'a str, method: &'a str, value: impl Into<OptionValue>) -> Self {
        Self {
            contract_address,
            method: Some(method),
            value: value.into(),
            on_hash: None,
        }
    }

    #[must_use]
    pub fn on_hash(mut self, callback: impl FnOnce(TxHash) + Send + 'static) -> Self {
        self.on_hash = Some(Box::new(callback));
        self
    }
}

/// Reads and writes project options on Storage contracts.
pub struct StorageAdapter<C: ChainClient + ?Sized, W: Wallet + ?Sized> {
    chain: Arc<C>,
    wallet: Arc<W>,
}

impl<C: ChainClient + ?Sized, W: Wallet + ?Sized> StorageAdapter<C, W> {
    pub const fn new(chain: Arc<C>, wallet: Arc<W>) -> Self {
        Self { chain, wallet }
    }

    /// Bind the Storage ABI to `contract_address`. No network access.
    pub fn fetch_storage(&self, contract_address: &str) -> Result<StorageContract<C>, StorageError> {
        let address = Address::from_str(contract_address.trim()).map_err(|e| {
            StorageError::InvalidAddress {
                address: contract_address.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(StorageContract {
            chain: Arc::clone(&self.chain),
            address,
        })
    }

    /// First account exposed by the wallet.
    async fn active_account(&self) -> Result<Address, StorageError> {
        let accounts = self.wallet.accounts().await?;
        accounts.first().copied().ok_or_else(|| {
            warn!("Wallet returned no accounts");
            StorageError::NoAccount
        })
    }

    /// Write all project options in one `addFullData` transaction and
    /// return the project record read back after confirmation.
    #[instrument(skip(self, options), fields(contract = %contract_address))]
    pub async fn save_all_options(
        &self,
        contract_address: &str,
        options: ProjectOptions,
    ) -> Result<ProjectRecord, StorageError> {
        let storage = self.fetch_storage(contract_address)?;
        let from = self.active_account().await?;

        let record = ProjectRecord::from(options);
        storage
            .send(from, WriteCall::AddFullData(record), None)
            .await?;

        let project = storage.project().await?;
        info!(name = %project.name, "Project options saved");
        Ok(project)
    }

    /// Read settings and token lists.
    ///
    /// Undecodable output means the address is not a Storage contract on
    /// this network and is reported as `InvalidContractAddress`.
    #[instrument(skip(self), fields(contract = %contract_address))]
    pub async fn fetch_options_from_contract(
        &self,
        contract_address: &str,
    ) -> Result<ContractOptions, StorageError> {
        let storage = self.fetch_storage(contract_address)?;

        let (settings, token_lists) =
            tokio::try_join!(storage.settings(), storage.token_lists()).map_err(|e| {
                if e.is_invalid_return_values() {
                    warn!(error = %e, "Storage read returned invalid values");
                    StorageError::InvalidContractAddress { source: e }
                } else {
                    StorageError::Transport(e)
                }
            })?;

        debug!(lists = token_lists.len(), "Options fetched");
        Ok(ContractOptions::new(settings, token_lists))
    }

    /// Dispatch a single option write by method name.
    ///
    /// Unknown names and mismatched values fail before the wallet or the
    /// chain is touched.
    #[instrument(skip_all, fields(contract = %request.contract_address, method = ?request.method))]
    pub async fn save_project_option(
        &self,
        request: SaveOptionRequest<'_>,
    ) -> Result<TxReceipt, StorageError> {
        let SaveOptionRequest {
            contract_address,
            method,
            value,
            on_hash,
        } = request;

        let method = StorageMethod::resolve(method)?;
        let call = method.build_call(value)?;
        let storage = self.fetch_storage(contract_address)?;
        let from = self.active_account().await?;

        debug!(%method, args = ?call.args(), from = %from, "Submitting option");
        Ok(storage.send(from, call, on_hash).await?)
    }
}
