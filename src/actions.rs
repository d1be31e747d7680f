use alloy::primitives::{Address, U256};

use crate::error::Result;
use crate::ledger::{Ledger, TransferReceipt};

/// A fully validated action, ready to execute.  Constructed only by the
/// dispatcher and the interactive prompts, consumed exactly once.
#[derive(Debug, Clone)]
pub enum ActionRequest {
	Balance { address: Address },
	Info,
	Transfer { to: Address, token_id: U256 },
}

#[derive(Debug, Clone)]
pub struct BalanceReport {
	pub address: Address,
	pub balance: U256,
	pub collection: String,
}

#[derive(Debug, Clone)]
pub struct CollectionInfo {
	pub name: String,
	pub symbol: String,
}

#[derive(Debug, Clone)]
pub enum ActionOutcome {
	Balance(BalanceReport),
	Info(CollectionInfo),
	Transfer(TransferReceipt),
}

/// Run one validated action against the ledger.
pub async fn execute(ledger: &dyn Ledger, request: ActionRequest) -> Result<ActionOutcome> {
	match request {
		ActionRequest::Balance { address } => {
			check_balance(ledger, address).await.map(ActionOutcome::Balance)
		}
		ActionRequest::Info => collection_info(ledger).await.map(ActionOutcome::Info),
		ActionRequest::Transfer { to, token_id } => {
			transfer(ledger, to, token_id).await.map(ActionOutcome::Transfer)
		}
	}
}

/// Fetch the token count for `address` and the collection's display name.
/// Both reads run concurrently; if either fails the query fails as a whole.
async fn check_balance(ledger: &dyn Ledger, address: Address) -> Result<BalanceReport> {
	let (balance, collection) =
		tokio::try_join!(ledger.balance_of(address), ledger.collection_name())?;
	Ok(BalanceReport {
		address,
		balance,
		collection,
	})
}

async fn collection_info(ledger: &dyn Ledger) -> Result<CollectionInfo> {
	let (name, symbol) =
		tokio::try_join!(ledger.collection_name(), ledger.collection_symbol())?;
	Ok(CollectionInfo { name, symbol })
}

/// Submit the transfer, then suspend until it reaches a final state.
/// Ownership and approval are left to the contract; a rejection there
/// surfaces from submission, not from any local check.
async fn transfer(ledger: &dyn Ledger, to: Address, token_id: U256) -> Result<TransferReceipt> {
	println!("Transferring token #{token_id} to {to}...");
	let pending = ledger.submit_transfer(to, token_id).await?;
	println!("Submitted {:#x}, waiting for confirmation...", pending.tx_hash);
	ledger.wait_for_confirmation(pending).await
}

#[cfg(test)]
mod tests {
	use alloy::primitives::Address;

	use super::*;
	use crate::error::Error;
	use crate::ledger::stub::StubLedger;

	fn wallet() -> Address {
		Address::repeat_byte(0x11)
	}

	fn recipient() -> Address {
		Address::repeat_byte(0x22)
	}

	#[tokio::test]
	async fn balance_reports_count_and_collection_name() {
		let stub = StubLedger::new(wallet())
			.with_token(1, wallet())
			.with_token(2, wallet())
			.with_token(3, recipient());

		let outcome = execute(&stub, ActionRequest::Balance { address: wallet() })
			.await
			.unwrap();

		let ActionOutcome::Balance(report) = outcome else {
			panic!("expected a balance report");
		};
		assert_eq!(report.balance, U256::from(2u64));
		assert_eq!(report.collection, "Stub Collection");
		assert_eq!(report.address, wallet());
		// One balanceOf plus one name(), nothing else.
		assert_eq!(stub.remote_calls(), 2);
	}

	#[tokio::test]
	async fn balance_queries_do_not_mutate_state() {
		let stub = StubLedger::new(wallet()).with_token(5, wallet());

		for _ in 0..2 {
			let outcome = execute(&stub, ActionRequest::Balance { address: wallet() })
				.await
				.unwrap();
			let ActionOutcome::Balance(report) = outcome else {
				panic!("expected a balance report");
			};
			assert_eq!(report.balance, U256::from(1u64));
		}
		assert_eq!(stub.owner(5), Some(wallet()));
	}

	#[tokio::test]
	async fn info_returns_name_and_symbol() {
		let stub = StubLedger::new(wallet());

		let outcome = execute(&stub, ActionRequest::Info).await.unwrap();
		let ActionOutcome::Info(info) = outcome else {
			panic!("expected collection info");
		};
		assert_eq!(info.name, "Stub Collection");
		assert_eq!(info.symbol, "STUB");
		assert_eq!(stub.remote_calls(), 2);
	}

	#[tokio::test]
	async fn read_failure_surfaces_as_remote_query() {
		let stub = StubLedger::new(wallet()).failing_reads();

		let err = execute(&stub, ActionRequest::Info).await.unwrap_err();
		assert!(matches!(err, Error::RemoteQuery(_)));

		let err = execute(&stub, ActionRequest::Balance { address: wallet() })
			.await
			.unwrap_err();
		assert!(matches!(err, Error::RemoteQuery(_)));
	}

	#[tokio::test]
	async fn transfer_moves_the_token() {
		let stub = StubLedger::new(wallet()).with_token(7, wallet());

		let outcome = execute(
			&stub,
			ActionRequest::Transfer {
				to: recipient(),
				token_id: U256::from(7u64),
			},
		)
		.await
		.unwrap();

		assert!(matches!(outcome, ActionOutcome::Transfer(_)));
		assert_eq!(stub.owner(7), Some(recipient()));
	}

	#[tokio::test]
	async fn repeating_a_transfer_fails_the_ownership_check() {
		let stub = StubLedger::new(wallet()).with_token(7, wallet());
		let request = ActionRequest::Transfer {
			to: recipient(),
			token_id: U256::from(7u64),
		};

		execute(&stub, request.clone()).await.unwrap();

		// The token now belongs to the recipient; the contract rejects
		// the second attempt at submission.
		let err = execute(&stub, request).await.unwrap_err();
		assert!(matches!(err, Error::TransferSubmission(_)));
		assert_eq!(stub.owner(7), Some(recipient()));
	}

	#[tokio::test]
	async fn transfer_of_a_foreign_token_fails_at_submission() {
		let stub = StubLedger::new(wallet()).with_token(9, recipient());

		let err = execute(
			&stub,
			ActionRequest::Transfer {
				to: recipient(),
				token_id: U256::from(9u64),
			},
		)
		.await
		.unwrap_err();
		assert!(matches!(err, Error::TransferSubmission(_)));
	}

	#[tokio::test]
	async fn reverted_confirmation_is_not_a_success() {
		let stub = StubLedger::new(wallet()).with_token(7, wallet()).reverting();

		let err = execute(
			&stub,
			ActionRequest::Transfer {
				to: recipient(),
				token_id: U256::from(7u64),
			},
		)
		.await
		.unwrap_err();

		assert!(matches!(err, Error::TransferNotConfirmed(_)));
		// The revert left ownership untouched.
		assert_eq!(stub.owner(7), Some(wallet()));
	}
}
