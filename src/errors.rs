//! Error Types - Adapter and Transport Failures
//!
//! `ChainError` is what the chain and wallet ports report. `StorageError`
//! is what the adapter operations return: it passes transport failures
//! through unchanged and rewrites the few cases that deserve a clearer
//! message (wrong contract address, unknown method).

use alloy::primitives::TxHash;
use thiserror::Error;

/// Message fragment a node returns when call output cannot be decoded
/// against the Storage ABI.
pub const INVALID_RETURN_VALUES: &str = "Returned values aren't valid";

/// Errors raised by the chain client and wallet ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Call output was empty or did not decode against the ABI.
    #[error("Returned values aren't valid, did it run Out of Gas? ({0})")]
    InvalidReturnValues(String),
    /// The wallet or the node refused the transaction.
    #[error("transaction rejected: {0}")]
    Rejected(String),
    /// The transaction was mined but reverted.
    #[error("transaction reverted: {tx_hash}")]
    Reverted { tx_hash: TxHash },
    /// Calldata could not be built.
    #[error("abi encoding failed: {0}")]
    Encode(String),
    /// Call output decoded but a stored field is not valid JSON.
    #[error("malformed stored record: {0}")]
    MalformedRecord(String),
    /// Any other JSON-RPC or transport failure.
    #[error("rpc error: {0}")]
    Rpc(String),
}

impl ChainError {
    /// Whether this failure means the contract at the address is not a
    /// Storage contract (or lives on another network).
    pub fn is_invalid_return_values(&self) -> bool {
        matches!(self, Self::InvalidReturnValues(_))
            || self.to_string().contains(INVALID_RETURN_VALUES)
    }
}

/// Errors returned by [`crate::usecases::StorageAdapter`] operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The wallet returned an empty account list.
    #[error("no account available from the wallet")]
    NoAccount,

    /// The contract address is not a 20-byte hex address.
    #[error("invalid contract address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error(
        "Invalid values. Seems it is a wrong contract address or an address from a different network."
    )]
    InvalidContractAddress {
        #[source]
        source: ChainError,
    },

    /// Method name outside the dispatch table (or missing).
    #[error("No such method")]
    UnknownMethod { method: Option<String> },

    /// The option value does not have the shape the method needs.
    #[error("invalid value for {method}: expected {expected}")]
    InvalidOptionValue {
        method: &'static str,
        expected: &'static str,
    },

    #[error("failed to encode token list: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] ChainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_return_values_detected_by_variant() {
        let err = ChainError::InvalidReturnValues("0x".to_string());
        assert!(err.is_invalid_return_values());
    }

    #[test]
    fn test_invalid_return_values_detected_by_message() {
        let err = ChainError::Rpc(
            "Returned values aren't valid, did it run Out of Gas?".to_string(),
        );
        assert!(err.is_invalid_return_values());
        assert!(!ChainError::Rpc("connection refused".to_string()).is_invalid_return_values());
    }

    #[test]
    fn test_malformed_record_is_not_a_wrong_contract() {
        let err = ChainError::MalformedRecord("expected value at line 1 column 1".to_string());
        assert!(!err.is_invalid_return_values());
    }

    #[test]
    fn test_unknown_method_message() {
        let err = StorageError::UnknownMethod { method: Some("burn".to_string()) };
        assert_eq!(err.to_string(), "No such method");
    }

    #[test]
    fn test_transport_is_transparent() {
        let inner = ChainError::Rejected("User denied transaction signature".to_string());
        let err = StorageError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
