use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure an action can surface to the user.
#[derive(Error, Debug)]
pub enum Error {
	// Validation failures, detected before any network access.
	#[error("invalid {field}: \"{value}\" is not a well-formed 20-byte address")]
	InvalidAddress { field: &'static str, value: String },

	#[error("invalid token id: \"{0}\" is not a non-negative integer")]
	InvalidTokenId(String),

	#[error("missing required flag: {0}")]
	MissingFlag(&'static str),

	// A read-only call failed or the node is unreachable.
	#[error("remote query failed: {0}")]
	RemoteQuery(String),

	// The write call was rejected before entering the pending pool.
	#[error("transfer submission failed: {0}")]
	TransferSubmission(String),

	// Broadcast but did not finalize; fees may already be spent.
	#[error("transfer not confirmed: {0}")]
	TransferNotConfirmed(String),
}

impl Error {
	/// True for errors raised locally, without contacting the network.
	#[allow(dead_code)]
	pub fn is_validation(&self) -> bool {
		matches!(
			self,
			Error::InvalidAddress { .. } | Error::InvalidTokenId(_) | Error::MissingFlag(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_errors_are_classified() {
		let err = Error::InvalidTokenId("abc".into());
		assert!(err.is_validation());
		assert!(Error::MissingFlag("--to").is_validation());
		assert!(!Error::RemoteQuery("connection refused".into()).is_validation());
		assert!(!Error::TransferNotConfirmed("reverted".into()).is_validation());
	}

	#[test]
	fn messages_name_the_offending_field() {
		let err = Error::InvalidAddress {
			field: "--to",
			value: "0xnope".into(),
		};
		let msg = err.to_string();
		assert!(msg.contains("--to"), "message should name the field: {msg}");
		assert!(msg.contains("0xnope"));
	}
}
