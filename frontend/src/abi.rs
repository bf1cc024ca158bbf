//! Solidity interface of the MintLockr contract.
//!
//! Only what the minter needs: calldata for `safeMint(address,string)` and
//! decoding of the ERC-721 `Transfer(address,address,uint256)` event.

use std::str::FromStr;

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::{sol, SolCall, SolEvent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AppResult, MintError};

sol! {
    #![sol(all_derives)]

    /// Mint a token to `to` pointing at metadata `uri`.
    function safeMint(address to, string uri);

    /// ERC-721 transfer; all three parameters are indexed.
    event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
}

/// A log entry as returned in a JSON-RPC transaction receipt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub address: Address,
    #[serde(default)]
    pub topics: Vec<B256>,
    #[serde(default)]
    pub data: Bytes,
}

/// Why a log did not decode as a `Transfer`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogDecodeError {
    #[error("log has no topics")]
    Anonymous,

    #[error("topic {0} is not a Transfer event")]
    UnknownEvent(B256),

    #[error("expected 4 topics, found {0}")]
    TopicCount(usize),

    #[error("undecodable Transfer: {0}")]
    Malformed(String),
}

/// Parse a `0x`-prefixed 20-byte address.
pub fn parse_address(address: &str) -> AppResult<Address> {
    if !address.starts_with("0x") {
        return Err(MintError::InvalidAddress(address.to_string()));
    }
    Address::from_str(address).map_err(|_| MintError::InvalidAddress(address.to_string()))
}

/// Calldata for `safeMint(to, uri)`.
pub fn encode_safe_mint(to: Address, uri: &str) -> Bytes {
    safeMintCall {
        to,
        uri: uri.to_string(),
    }
    .abi_encode()
    .into()
}

/// Decode a log against the ERC-721 `Transfer` event.
///
/// An ERC-20 `Transfer` shares the topic hash but carries only three
/// topics and is rejected.
pub fn decode_transfer(log: &Log) -> Result<Transfer, LogDecodeError> {
    let topic0 = log.topics.first().ok_or(LogDecodeError::Anonymous)?;
    if *topic0 != Transfer::SIGNATURE_HASH {
        return Err(LogDecodeError::UnknownEvent(*topic0));
    }
    if log.topics.len() != 4 {
        return Err(LogDecodeError::TopicCount(log.topics.len()));
    }

    Transfer::decode_raw_log(log.topics.iter().copied(), &log.data, true)
        .map_err(|e| LogDecodeError::Malformed(e.to_string()))
}

/// Token id of the first `Transfer` in a receipt.
///
/// Logs that do not decode are skipped.
pub fn find_minted_token_id(logs: &[Log]) -> Option<U256> {
    logs.iter()
        .filter_map(|entry| match decode_transfer(entry) {
            Ok(event) => Some(event.tokenId),
            Err(e) => {
                log::debug!("Skipping log from {}: {}", entry.address, e);
                None
            }
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;

    const WORD: usize = 32;

    fn token_topic(id: u64) -> B256 {
        B256::from(U256::from(id).to_be_bytes::<32>())
    }

    fn transfer_log(id: u64) -> Log {
        Log {
            address: Address::repeat_byte(0x5b),
            topics: vec![
                Transfer::SIGNATURE_HASH,
                Address::ZERO.into_word(),
                Address::repeat_byte(0x11).into_word(),
                token_topic(id),
            ],
            data: Bytes::new(),
        }
    }

    #[test]
    fn test_transfer_topic() {
        let expected: B256 = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
            .parse()
            .unwrap();
        assert_eq!(Transfer::SIGNATURE_HASH, expected);
        assert_eq!(
            Transfer::SIGNATURE_HASH,
            keccak256("Transfer(address,address,uint256)")
        );
    }

    #[test]
    fn test_encode_safe_mint_layout() {
        let uri = "ipfs://cid";
        let data = encode_safe_mint(Address::repeat_byte(0x11), uri);

        assert_eq!(&data[..4], &safeMintCall::SELECTOR);
        assert_eq!(
            &safeMintCall::SELECTOR,
            &keccak256("safeMint(address,string)")[..4]
        );
        let args = &data[4..];
        assert_eq!(args.len(), 4 * WORD);
        assert_eq!(&args[..12], &[0u8; 12]);
        assert_eq!(&args[12..32], &[0x11u8; 20]);
        assert_eq!(args[63], 0x40);
        assert_eq!(args[95], uri.len() as u8);
        assert_eq!(&args[96..96 + uri.len()], uri.as_bytes());
        assert!(args[96 + uri.len()..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_encode_safe_mint_long_uri_pads_to_word() {
        let uri = crate::config::PLACEHOLDER_METADATA_URI;
        let data = encode_safe_mint(Address::repeat_byte(0x11), uri);

        assert_eq!((data.len() - 4) % WORD, 0);
        assert_eq!(data.len() - 4, 3 * WORD + uri.len().div_ceil(WORD) * WORD);
    }

    #[test]
    fn test_parse_address() {
        let address = "0x1111111111111111111111111111111111111111";
        assert_eq!(parse_address(address), Ok(Address::repeat_byte(0x11)));

        assert_eq!(
            parse_address("0x1234"),
            Err(MintError::InvalidAddress("0x1234".to_string()))
        );
        assert!(parse_address("not-an-address").is_err());
    }

    #[test]
    fn test_parse_address_requires_prefix() {
        let bare = "1111111111111111111111111111111111111111";
        assert_eq!(
            parse_address(bare),
            Err(MintError::InvalidAddress(bare.to_string()))
        );
    }

    #[test]
    fn test_decode_transfer() {
        let event = decode_transfer(&transfer_log(42)).unwrap();
        assert_eq!(event.from, Address::ZERO);
        assert_eq!(event.to, Address::repeat_byte(0x11));
        assert_eq!(event.tokenId, U256::from(42));
    }

    #[test]
    fn test_decode_rejects_other_logs() {
        let mut approval = transfer_log(1);
        approval.topics[0] = keccak256("Approval(address,address,uint256)");
        assert!(matches!(
            decode_transfer(&approval),
            Err(LogDecodeError::UnknownEvent(_))
        ));

        let mut erc20 = transfer_log(1);
        erc20.topics.pop();
        assert_eq!(decode_transfer(&erc20), Err(LogDecodeError::TopicCount(3)));

        assert_eq!(decode_transfer(&Log::default()), Err(LogDecodeError::Anonymous));
    }

    #[test]
    fn test_find_minted_token_id_skips_noise() {
        let mut erc20 = transfer_log(7);
        erc20.topics.pop();
        let logs = vec![Log::default(), erc20, transfer_log(42), transfer_log(43)];

        assert_eq!(find_minted_token_id(&logs), Some(U256::from(42)));
        assert_eq!(find_minted_token_id(&logs[..2]), None);
    }

    #[test]
    fn test_large_token_id_is_decimal() {
        let mut log = transfer_log(0);
        log.topics[3] = B256::repeat_byte(0xff);
        assert_eq!(
            find_minted_token_id(&[log]).map(|id| id.to_string()).as_deref(),
            Some("115792089237316195423570985008687907853269984665640564039457584007913129639935")
        );
    }

    #[test]
    fn test_log_deserialization() {
        let json = r#"{
            "address": "0x5b1e1d2c8a6a7f3e0cd9b4f2a1e8c7d6b5a4f3e2",
            "topics": ["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"],
            "data": "0x",
            "logIndex": "0x0"
        }"#;

        let log: Log = serde_json::from_str(json).unwrap();
        assert_eq!(log.topics, vec![Transfer::SIGNATURE_HASH]);
        assert!(log.data.is_empty());
    }
}
