//! Application configuration.
//!
//! Centralized configuration for the MintLockr frontend.
//! Everything is fixed at build time; the contract address can be
//! overridden with the `MINTLOCKR_CONTRACT_ADDRESS` environment variable
//! when compiling.

/// Application name.
///
/// Shown in the page title and hero.
pub const APP_NAME: &str = "MintLockr";

/// Human-readable name of the target network.
pub const NETWORK_NAME: &str = "Sepolia testnet";

/// Default deployment of the MintLockr ERC-721 contract on Sepolia.
const DEFAULT_CONTRACT_ADDRESS: &str = "0x5b1E1D2C8a6A7f3e0cD9b4F2a1E8c7D6b5A4f3E2";

/// Address of the deployed contract exposing `safeMint(address,string)`.
pub const MINTLOCKR_CONTRACT_ADDRESS: &str = match option_env!("MINTLOCKR_CONTRACT_ADDRESS") {
    Some(address) => address,
    None => DEFAULT_CONTRACT_ADDRESS,
};

/// Metadata reference passed to every mint.
///
/// Image and description are not uploaded anywhere; all tokens point at
/// this placeholder document.
pub const PLACEHOLDER_METADATA_URI: &str =
    "ipfs://bafkreiem4qwt4hmv3b2z3t36sdk4xquxv564ygrfy3yvj7i2s72s6q43om";

/// Block explorer transaction URL prefix.
pub const EXPLORER_TX_URL: &str = "https://sepolia.etherscan.io/tx/";

/// Maximum image size accepted by the upload zone (in bytes).
///
/// 10 MB limit.
pub const MAX_IMAGE_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

/// Delay between two `eth_getTransactionReceipt` polls.
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 2_000;

/// Maximum toasts visible at once.
pub const TOAST_LIMIT: usize = 1;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Block explorer link for a transaction hash.
pub fn explorer_tx_url(tx_hash: &str) -> String {
    format!("{}{}", EXPLORER_TX_URL, tx_hash)
}
