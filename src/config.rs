use std::path::PathBuf;

use alloy::primitives::Address;
use anyhow::{bail, Context};
use serde::Deserialize;

use crate::validate;

/// Everything the process needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
	pub rpc_url: String,
	pub contract_address: Address,
	/// Hex-encoded secp256k1 secret key.  Held as an opaque string; only
	/// the signer parses it.
	pub private_key: String,
}

/// The non-secret subset that may live in the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
	pub rpc_url: Option<String>,
	pub contract_address: Option<String>,
}

impl FileConfig {
	/// Path to the config file (~/.erc721-cli/config.toml).
	pub fn path() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".erc721-cli")
			.join("config.toml")
	}

	/// Load the file if present.  A missing file is fine; a malformed one
	/// is fatal.
	pub fn read() -> anyhow::Result<Self> {
		let path = Self::path();
		if path.exists() {
			let content = std::fs::read_to_string(&path)
				.with_context(|| format!("could not read {}", path.display()))?;
			toml::from_str(&content)
				.with_context(|| format!("malformed config at {}", path.display()))
		} else {
			Ok(Self::default())
		}
	}
}

impl Config {
	/// Resolve startup configuration.  A `.env` file is honored, the
	/// process environment wins over the config file, and the secret key
	/// is accepted from the environment only.
	pub fn load() -> anyhow::Result<Self> {
		dotenvy::dotenv().ok();
		let file = FileConfig::read()?;
		Self::from_parts(
			file,
			env_var("RPC_URL"),
			env_var("NFT_CONTRACT_ADDRESS"),
			env_var("PRIVATE_KEY"),
		)
	}

	fn from_parts(
		file: FileConfig,
		rpc_url: Option<String>,
		contract_address: Option<String>,
		private_key: Option<String>,
	) -> anyhow::Result<Self> {
		let Some(rpc_url) = rpc_url.or(file.rpc_url) else {
			bail!("RPC_URL is not set (environment or config file)");
		};

		let Some(contract) = contract_address.or(file.contract_address) else {
			bail!("NFT_CONTRACT_ADDRESS is not set (environment or config file)");
		};
		let contract_address = validate::parse_address("NFT_CONTRACT_ADDRESS", &contract)?;

		let Some(private_key) = private_key else {
			bail!("PRIVATE_KEY is not set");
		};

		Ok(Self {
			rpc_url,
			contract_address,
			private_key,
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|v| !v.is_empty())
}
