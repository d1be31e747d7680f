use alloy::primitives::Address;
use anyhow::Result;

use crate::actions::{self, ActionOutcome, ActionRequest};
use crate::cli::{Action, Cli};
use crate::error::Error;
use crate::ledger::Ledger;
use crate::validate;

/// Run one flag-driven action and return when it resolves.  Any error
/// bubbles out of `main` as a non-zero exit.
pub async fn run(cli: &Cli, action: Action, ledger: &dyn Ledger) -> Result<()> {
	let request = build_request(cli, action, ledger.wallet_address())?;
	let outcome = actions::execute(ledger, request).await?;
	print_outcome(&outcome);
	Ok(())
}

/// Validate flags into an executable request.  A transfer missing `--to`
/// or `--tokenId` fails here, before the network is ever contacted.
fn build_request(
	cli: &Cli,
	action: Action,
	wallet: Address,
) -> crate::error::Result<ActionRequest> {
	match action {
		Action::Balance => {
			let address = match cli.address.as_deref() {
				Some(raw) => validate::parse_address("--address", raw)?,
				None => wallet,
			};
			Ok(ActionRequest::Balance { address })
		}
		Action::Info => Ok(ActionRequest::Info),
		Action::Transfer => {
			let to = cli.to.as_deref().ok_or(Error::MissingFlag("--to"))?;
			let token_id = cli
				.token_id
				.as_deref()
				.ok_or(Error::MissingFlag("--tokenId"))?;
			Ok(ActionRequest::Transfer {
				to: validate::parse_address("--to", to)?,
				token_id: validate::parse_token_id(token_id)?,
			})
		}
	}
}

pub fn print_outcome(outcome: &ActionOutcome) {
	match outcome {
		ActionOutcome::Balance(report) => {
			println!(
				"{} holds {} token(s) in \"{}\"",
				report.address, report.balance, report.collection
			);
		}
		ActionOutcome::Info(info) => {
			println!("Collection: {}", info.name);
			println!("Symbol:     {}", info.symbol);
		}
		ActionOutcome::Transfer(receipt) => {
			println!("Transfer confirmed.");
			println!("TX:    {:#x}", receipt.tx_hash);
			if let Some(block) = receipt.block_number {
				println!("Block: {block}");
			}
		}
	}
}
