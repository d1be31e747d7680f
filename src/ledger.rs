use alloy::primitives::{Address, TxHash, U256};

use crate::error::Result;

/// A transfer that has been broadcast but not yet finalized.
///
/// Broadcast is irreversible: dropping this handle does not cancel the
/// transaction, it only stops us watching for it.
#[derive(Debug, Clone)]
pub struct PendingTransfer {
	pub tx_hash: TxHash,
}

/// Outcome of a transfer that finalized successfully.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
	pub tx_hash: TxHash,
	pub block_number: Option<u64>,
}

/// The one seam between this tool and the chain.
///
/// Everything chain-specific (RPC transport, signing, ABI encoding)
/// lives behind these operations, so the executor can run against a
/// deterministic in-memory implementation in tests.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
	/// The address the configured secret key controls.
	fn wallet_address(&self) -> Address;

	async fn collection_name(&self) -> Result<String>;

	async fn collection_symbol(&self) -> Result<String>;

	async fn balance_of(&self, owner: Address) -> Result<U256>;

	async fn owner_of(&self, token_id: U256) -> Result<Address>;

	/// Broadcast a transfer of `token_id` from the wallet to `to`.
	/// Returns as soon as the transaction enters the pending pool; the
	/// handle says nothing about finality.
	async fn submit_transfer(&self, to: Address, token_id: U256) -> Result<PendingTransfer>;

	/// Suspend until the broadcast transaction reaches a final state.
	/// No local timeout; the node client's polling defaults apply.
	async fn wait_for_confirmation(&self, pending: PendingTransfer) -> Result<TransferReceipt>;
}
