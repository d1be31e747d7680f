use alloy::primitives::{Address, U256};

use crate::error::{Error, Result};

/// Parse a user-supplied address.
///
/// Accepts a `0x`-prefixed 40-character hex string. Mixed-case input must
/// carry a valid EIP-55 checksum; uniform-case input (all lower or all
/// upper) is accepted as the case-insensitive equivalent. `field` names
/// the flag or prompt the value came from so the error can point at it.
pub fn parse_address(field: &'static str, raw: &str) -> Result<Address> {
	let invalid = || Error::InvalidAddress {
		field,
		value: raw.to_owned(),
	};

	let s = raw.trim();
	let hex = s.strip_prefix("0x").ok_or_else(invalid)?;
	if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(invalid());
	}

	let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
	let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
	if has_upper && has_lower {
		Address::parse_checksummed(s, None).map_err(|_| invalid())
	} else {
		s.parse().map_err(|_| invalid())
	}
}

/// Parse a user-supplied token identifier: base-10 digits only, no sign.
/// The only upper bound is the chain's native 256-bit integer width.
pub fn parse_token_id(raw: &str) -> Result<U256> {
	let s = raw.trim();
	if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
		return Err(Error::InvalidTokenId(raw.to_owned()));
	}
	U256::from_str_radix(s, 10).map_err(|_| Error::InvalidTokenId(raw.to_owned()))
}
