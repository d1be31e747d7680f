use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::Context;

use crate::config::Config;
use crate::contracts::Erc721;
use crate::error::{Error, Result};
use crate::ledger::{Ledger, PendingTransfer, TransferReceipt};

/// Production ledger: an HTTP provider with the wallet attached, plus the
/// binding for the one configured collection.
///
/// Read calls go through the generated contract instance.  The
/// confirmation wait re-attaches to the root provider by transaction
/// hash, so the handle handed back from submission stays a plain value.
pub struct RpcLedger {
	wallet_address: Address,
	provider: DynProvider,
	contract: Erc721::Erc721Instance<DynProvider>,
}

impl RpcLedger {
	/// Build the signer, provider, and contract binding from startup
	/// configuration.  Purely local; the node is first contacted when an
	/// action runs.
	pub fn connect(config: &Config) -> anyhow::Result<Self> {
		let signer: PrivateKeySigner = config
			.private_key
			.parse()
			.context("PRIVATE_KEY is not a valid secp256k1 private key")?;
		let wallet_address = signer.address();

		let url = config
			.rpc_url
			.parse()
			.context("RPC_URL is not a valid URL")?;
		let provider = ProviderBuilder::new()
			.wallet(EthereumWallet::from(signer))
			.connect_http(url)
			.erased();

		let contract = Erc721::new(config.contract_address, provider.clone());

		Ok(Self {
			wallet_address,
			provider,
			contract,
		})
	}
}

#[async_trait::async_trait]
impl Ledger for RpcLedger {
	fn wallet_address(&self) -> Address {
		self.wallet_address
	}

	async fn collection_name(&self) -> Result<String> {
		self.contract
			.name()
			.call()
			.await
			.map_err(|e| Error::RemoteQuery(format!("name(): {e}")))
	}

	async fn collection_symbol(&self) -> Result<String> {
		self.contract
			.symbol()
			.call()
			.await
			.map_err(|e| Error::RemoteQuery(format!("symbol(): {e}")))
	}

	async fn balance_of(&self, owner: Address) -> Result<U256> {
		self.contract
			.balanceOf(owner)
			.call()
			.await
			.map_err(|e| Error::RemoteQuery(format!("balanceOf({owner}): {e}")))
	}

	async fn owner_of(&self, token_id: U256) -> Result<Address> {
		self.contract
			.ownerOf(token_id)
			.call()
			.await
			.map_err(|e| Error::RemoteQuery(format!("ownerOf({token_id}): {e}")))
	}

	async fn submit_transfer(&self, to: Address, token_id: U256) -> Result<PendingTransfer> {
		let pending = self
			.contract
			.safeTransferFrom(self.wallet_address, to, token_id)
			.send()
			.await
			.map_err(|e| Error::TransferSubmission(e.to_string()))?;

		Ok(PendingTransfer {
			tx_hash: *pending.tx_hash(),
		})
	}

	async fn wait_for_confirmation(&self, pending: PendingTransfer) -> Result<TransferReceipt> {
		let receipt =
			PendingTransactionBuilder::new(self.provider.root().clone(), pending.tx_hash)
				.get_receipt()
				.await
				.map_err(|e| Error::TransferNotConfirmed(e.to_string()))?;

		// Mined but reverted is still a failed transfer; the fee is spent
		// and the token did not move.
		if !receipt.status() {
			return Err(Error::TransferNotConfirmed(format!(
				"transaction {:#x} reverted on-chain",
				receipt.transaction_hash
			)));
		}

		Ok(TransferReceipt {
			tx_hash: receipt.transaction_hash,
			block_number: receipt.block_number,
		})
	}
}
