//! Binding to the deployed MintLockr ERC-721 contract.

use alloy_primitives::{Address, TxHash};
use gloo_timers::future::TimeoutFuture;

use crate::abi::{encode_safe_mint, parse_address};
use crate::config::RECEIPT_POLL_INTERVAL_MS;
use crate::services::wallet::{
    ProviderError, Signer, TransactionReceipt, TransactionRequest, WalletProvider,
};
use crate::types::{AppResult, MintError};

/// Contract address + wallet + signing account.
pub struct MintContract<'a, P: WalletProvider> {
    address: Address,
    provider: &'a P,
    signer: Signer,
}

impl<'a, P: WalletProvider> MintContract<'a, P> {
    pub fn new(address: &str, provider: &'a P, signer: Signer) -> AppResult<Self> {
        Ok(Self {
            address: parse_address(address)?,
            provider,
            signer,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Send `safeMint(to, uri)` from the signer.
    pub async fn safe_mint(&self, to: Address, uri: &str) -> AppResult<PendingMint<'a, P>> {
        let tx = TransactionRequest {
            from: self.signer.address,
            to: self.address,
            data: encode_safe_mint(to, uri),
        };

        let hash = self
            .provider
            .send_transaction(&tx)
            .await
            .map_err(transaction_failed)?;

        log::info!("⏳ Mint transaction sent: {}", hash);

        Ok(PendingMint {
            hash,
            provider: self.provider,
        })
    }
}

/// A sent transaction awaiting inclusion.
pub struct PendingMint<'a, P: WalletProvider> {
    pub hash: TxHash,
    provider: &'a P,
}

impl<'a, P: WalletProvider> PendingMint<'a, P> {
    /// Poll for the receipt until the transaction is mined.
    pub async fn wait(&self) -> AppResult<TransactionReceipt> {
        loop {
            let receipt = self
                .provider
                .transaction_receipt(self.hash)
                .await
                .map_err(transaction_failed)?;

            match receipt {
                Some(receipt) if receipt.is_reverted() => {
                    log::error!("❌ Transaction {} reverted", self.hash);
                    return Err(MintError::TransactionFailed {
                        reason: Some("transaction reverted".to_string()),
                    });
                }
                Some(receipt) => return Ok(receipt),
                None => TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await,
            }
        }
    }
}

/// A declined signature gets the generic message; anything else keeps the
/// wallet's own reason.
pub(crate) fn transaction_failed(e: ProviderError) -> MintError {
    if e.is_user_rejection() {
        log::warn!("🚫 Transaction rejected by user");
        MintError::TransactionFailed { reason: None }
    } else {
        MintError::TransactionFailed {
            reason: Some(e.message),
        }
    }
}
