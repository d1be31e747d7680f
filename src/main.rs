use anyhow::Result;
use clap::Parser;

mod actions;
mod cli;
mod commands;
mod config;
mod contracts;
mod error;
mod ledger;
mod rpc;
mod session;
mod validate;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	let config = config::Config::load()?;
	let ledger = rpc::RpcLedger::connect(&config)?;

	match cli.action {
		Some(action) => commands::run(&cli, action, &ledger).await,
		None => session::run(&ledger).await,
	}
}
