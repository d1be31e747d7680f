use std::time::Duration;

use alloy::primitives::Address;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::actions::{self, ActionRequest};
use crate::commands::print_outcome;
use crate::ledger::Ledger;
use crate::validate;

const MENU: &[&str] = &[
	"Check balance",
	"Transfer a token",
	"View collection info",
	"Exit",
];

/// Drive the interactive menu until the user picks Exit.
///
/// Each iteration is independent: a failed action prints its error and
/// the loop carries nothing forward except the wallet and the collection
/// binding.  The loop never accepts new input while an action is in
/// flight.
pub async fn run(ledger: &dyn Ledger) -> Result<()> {
	println!("Wallet: {}", ledger.wallet_address());

	let theme = ColorfulTheme::default();
	loop {
		let choice = Select::with_theme(&theme)
			.with_prompt("What would you like to do?")
			.items(MENU)
			.default(0)
			.interact()?;

		let request = match choice {
			0 => prompt_balance(&theme, ledger.wallet_address())?,
			1 => prompt_transfer(&theme)?,
			2 => ActionRequest::Info,
			_ => break,
		};

		match actions::execute(ledger, request).await {
			Ok(outcome) => print_outcome(&outcome),
			Err(err) => println!("Action failed: {err}"),
		}

		// Brief pause so the output is readable before the menu redraws.
		tokio::time::sleep(Duration::from_secs(1)).await;
	}

	Ok(())
}

// Prompt validation reuses the flag validators; invalid input re-prompts
// instead of ending the session, and nothing reaches the node until the
// input passes.

fn prompt_balance(theme: &ColorfulTheme, wallet: Address) -> Result<ActionRequest> {
	let raw: String = Input::with_theme(theme)
		.with_prompt("Address to check")
		.default(wallet.to_string())
		.validate_with(|input: &String| -> std::result::Result<(), String> {
			validate::parse_address("address", input)
				.map(|_| ())
				.map_err(|e| e.to_string())
		})
		.interact_text()?;

	Ok(ActionRequest::Balance {
		address: validate::parse_address("address", &raw)?,
	})
}

fn prompt_transfer(theme: &ColorfulTheme) -> Result<ActionRequest> {
	let to: String = Input::with_theme(theme)
		.with_prompt("Recipient address")
		.validate_with(|input: &String| -> std::result::Result<(), String> {
			validate::parse_address("recipient", input)
				.map(|_| ())
				.map_err(|e| e.to_string())
		})
		.interact_text()?;

	let token_id: String = Input::with_theme(theme)
		.with_prompt("Token id to transfer")
		.validate_with(|input: &String| -> std::result::Result<(), String> {
			validate::parse_token_id(input)
				.map(|_| ())
				.map_err(|e| e.to_string())
		})
		.interact_text()?;

	Ok(ActionRequest::Transfer {
		to: validate::parse_address("recipient", &to)?,
		token_id: validate::parse_token_id(&token_id)?,
	})
}
