//! Wrapper around the EIP-1193 provider injected by MetaMask.
//!
//! [`WalletProvider`] is the seam the mint flow is written against;
//! [`EthereumWallet`] implements it on top of `window.ethereum`.

use alloy_primitives::{Address, Bytes, TxHash, U64};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::abi::Log;

/// EIP-1193 code for a request the user declined.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Error reported by the wallet for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Build from the fields of a rejected request.
    ///
    /// MetaMask wraps node errors as "Internal JSON-RPC error." and puts the
    /// revert reason under `data`, so `data.reason` then `data.message` win
    /// over the top-level message.
    pub fn from_parts(
        code: Option<i64>,
        message: Option<String>,
        data_reason: Option<String>,
        data_message: Option<String>,
    ) -> Self {
        let message = [data_reason, data_message, message]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .unwrap_or_else(|| "Unknown provider error".to_string());
        Self { code, message }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

/// Account allowed to sign transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub address: Address,
}

/// `eth_sendTransaction` parameters. Gas is left to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
}

/// Subset of `eth_getTransactionReceipt` the minter reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    /// `0x1` on success, `0x0` when reverted
    #[serde(default)]
    pub status: Option<U64>,
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl TransactionReceipt {
    pub fn is_reverted(&self) -> bool {
        self.status == Some(U64::ZERO)
    }
}

/// Account access and transaction submission.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Ask the user for account access (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Hand a transaction to the wallet to sign and broadcast.
    /// Returns the transaction hash.
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError>;

    /// Receipt of a mined transaction, `None` while pending.
    async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, ProviderError>;

    /// First authorized account as a signer.
    async fn signer(&self) -> Result<Signer, ProviderError> {
        let accounts = self.request_accounts().await?;
        accounts
            .into_iter()
            .next()
            .map(|address| Signer { address })
            .ok_or_else(|| ProviderError::new("Wallet returned no accounts"))
    }
}

/// MetaMask (or any EIP-1193 wallet) exposed as `window.ethereum`.
#[derive(Clone)]
pub struct EthereumWallet {
    ethereum: JsValue,
}

impl EthereumWallet {
    /// Returns the injected provider, if the page has one.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;

        if ethereum.is_null() || ethereum.is_undefined() {
            log::warn!("⚠️  No injected Ethereum provider found");
            return None;
        }

        log::info!("✅ Ethereum provider detected");
        Some(Self { ethereum })
    }

    /// `ethereum.request({ method, params })`, decoded into `T`.
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ProviderError> {
        let args = json!({ "method": method, "params": params })
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::new(format!("Failed to encode {}: {}", method, e)))?;

        let request = js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| ProviderError::new("Provider has no request method"))?;

        let promise: js_sys::Promise = request
            .call1(&self.ethereum, &args)
            .map_err(|e| provider_error(&e))?
            .dyn_into()
            .map_err(|_| ProviderError::new("Provider request did not return a promise"))?;

        let result = JsFuture::from(promise).await.map_err(|e| provider_error(&e))?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::new(format!("Failed to parse {} result: {}", method, e)))
    }
}

impl WalletProvider for EthereumWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        log::info!("🔌 Requesting wallet accounts...");
        self.request("eth_requestAccounts", json!([])).await
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError> {
        log::info!("📤 Sending transaction to {}", tx.to);
        self.request("eth_sendTransaction", json!([tx])).await
    }

    async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, ProviderError> {
        self.request("eth_getTransactionReceipt", json!([tx_hash])).await
    }
}

/// Pull `code`, `message` and the nested `data` fields out of a rejected
/// provider promise.
fn provider_error(e: &JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(e, &"code".into())
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);

    let message = js_string(e, "message").or_else(|| e.as_string());

    let data = js_sys::Reflect::get(e, &"data".into())
        .ok()
        .filter(|d| d.is_object());
    let data_reason = data.as_ref().and_then(|d| js_string(d, "reason"));
    let data_message = data.as_ref().and_then(|d| js_string(d, "message"));

    ProviderError::from_parts(code, message, data_reason, data_message)
}

fn js_string(target: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}
