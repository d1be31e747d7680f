use alloy::sol;

sol! {
	/// The slice of the ERC-721 interface this tool touches.  `name` and
	/// `symbol` come from the optional metadata extension; every mainstream
	/// collection implements them.
	#[sol(rpc)]
	contract Erc721 {
		function name() external view returns (string);
		function symbol() external view returns (string);
		function balanceOf(address owner) external view returns (uint256);
		function ownerOf(uint256 tokenId) external view returns (address);
		function safeTransferFrom(address from, address to, uint256 tokenId) external;
	}
}

#[cfg(test)]
mod tests {
	use alloy::sol_types::SolCall;

	use super::*;

	#[test]
	fn selectors_match_the_standard() {
		assert_eq!(Erc721::nameCall::SELECTOR, [0x06, 0xfd, 0xde, 0x03]);
		assert_eq!(Erc721::symbolCall::SELECTOR, [0x95, 0xd8, 0x9b, 0x41]);
		assert_eq!(Erc721::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
		assert_eq!(Erc721::ownerOfCall::SELECTOR, [0x63, 0x52, 0x21, 0x1e]);
		assert_eq!(
			Erc721::safeTransferFromCall::SELECTOR,
			[0x42, 0x84, 0x2e, 0x0e]
		);
	}
}
