use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
	name = "erc721-cli",
	about = "Inspect and transfer NFTs from one fixed ERC-721 collection.",
	version
)]
pub struct Cli {
	/// Action to perform.  Omit to start the interactive menu.
	#[arg(long, short = 'a', value_enum)]
	pub action: Option<Action>,

	/// Address to check in a balance query.  Defaults to the wallet's own.
	#[arg(long)]
	pub address: Option<String>,

	/// Recipient address for a transfer.
	#[arg(long)]
	pub to: Option<String>,

	/// Identifier of the token to transfer.
	#[arg(long = "tokenId", alias = "token-id")]
	pub token_id: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Action {
	Balance,
	Transfer,
	Info,
}
