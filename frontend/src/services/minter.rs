//! Connect and mint flows.
//!
//! Written against [`WalletProvider`] so they run the same on MetaMask and
//! on a test double. Session bookkeeping stays in [`crate::session`].

use alloy_primitives::Address;

use crate::abi::find_minted_token_id;
use crate::services::contract::{transaction_failed, MintContract};
use crate::services::wallet::WalletProvider;
use crate::types::{AppResult, MintError, MintRequest, MintResult};

/// Ask the wallet for access and return the first account.
pub async fn connect_account<P: WalletProvider>(provider: &P) -> AppResult<Address> {
    let accounts = provider
        .request_accounts()
        .await
        .map_err(|e| MintError::ConnectionFailed(e.message))?;

    accounts
        .into_iter()
        .next()
        .ok_or_else(|| MintError::ConnectionFailed("Wallet returned no accounts".to_string()))
}

/// Mint `request` on the contract at `contract_address` and wait for it.
///
/// A receipt without a decodable `Transfer` still counts as a success, with
/// no token id.
pub async fn mint_token<P: WalletProvider>(
    provider: &P,
    contract_address: &str,
    request: MintRequest,
) -> AppResult<MintResult> {
    log::info!("🪙 Minting to {} with {}", request.recipient, request.metadata_uri);

    let signer = provider.signer().await.map_err(transaction_failed)?;
    let contract = MintContract::new(contract_address, provider, signer)?;

    let pending = contract
        .safe_mint(request.recipient, &request.metadata_uri)
        .await?;
    let receipt = pending.wait().await?;

    let token_id = find_minted_token_id(&receipt.logs);
    if token_id.is_none() {
        log::warn!("⚠️  No Transfer event in receipt for {}", pending.hash);
    }

    Ok(MintResult {
        tx_hash: pending.hash,
        token_id,
        contract_address: contract.address(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{encode_safe_mint, Log, Transfer};
    use crate::config::PLACEHOLDER_METADATA_URI;
    use crate::services::wallet::{
        ProviderError, TransactionReceipt, TransactionRequest, USER_REJECTED_CODE,
    };
    use crate::session::MintSession;
    use crate::types::{MintStatus, Panel};
    use alloy_primitives::{Bytes, TxHash, B256, U256, U64};
    use alloy_sol_types::SolEvent;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const ACCOUNT: Address = Address::repeat_byte(0x11);
    const CONTRACT: &str = "0x5b1E1D2C8a6A7f3e0cD9b4F2a1E8c7D6b5A4f3E2";
    const TX_HASH: TxHash = B256::repeat_byte(0x9f);

    fn contract() -> Address {
        CONTRACT.parse().unwrap()
    }

    /// Scripted wallet. Receipts are available immediately.
    struct MockWallet {
        accounts: Result<Vec<Address>, ProviderError>,
        send: Result<TxHash, ProviderError>,
        receipt: TransactionReceipt,
        sent: RefCell<Vec<TransactionRequest>>,
    }

    impl MockWallet {
        fn minting(logs: Vec<Log>) -> Self {
            Self {
                accounts: Ok(vec![ACCOUNT]),
                send: Ok(TX_HASH),
                receipt: TransactionReceipt {
                    transaction_hash: TX_HASH,
                    status: Some(U64::from(1)),
                    logs,
                },
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl WalletProvider for MockWallet {
        async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
            self.accounts.clone()
        }

        async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError> {
            self.sent.borrow_mut().push(tx.clone());
            self.send.clone()
        }

        async fn transaction_receipt(
            &self,
            _tx_hash: TxHash,
        ) -> Result<Option<TransactionReceipt>, ProviderError> {
            Ok(Some(self.receipt.clone()))
        }
    }

    fn transfer_log(token_id: u64) -> Log {
        Log {
            address: contract(),
            topics: vec![
                Transfer::SIGNATURE_HASH,
                Address::ZERO.into_word(),
                ACCOUNT.into_word(),
                B256::from(U256::from(token_id).to_be_bytes::<32>()),
            ],
            data: Bytes::new(),
        }
    }

    fn request() -> MintRequest {
        MintRequest {
            recipient: ACCOUNT,
            metadata_uri: PLACEHOLDER_METADATA_URI.to_string(),
        }
    }

    #[test]
    fn test_connect_takes_first_account() {
        let mut wallet = MockWallet::minting(vec![]);
        wallet.accounts = Ok(vec![ACCOUNT, Address::repeat_byte(0x22)]);

        assert_eq!(block_on(connect_account(&wallet)), Ok(ACCOUNT));
    }

    #[test]
    fn test_connect_rejected() {
        let mut wallet = MockWallet::minting(vec![]);
        wallet.accounts = Err(ProviderError {
            code: Some(USER_REJECTED_CODE),
            message: "User rejected the request.".to_string(),
        });

        let mut session = MintSession::new();
        session.begin_connect().unwrap();
        let toast = session.complete_connect(block_on(connect_account(&wallet)));

        assert_eq!(toast.map(|t| t.title), Some("Connection Failed".to_string()));
        assert_eq!(session.status(), &MintStatus::Idle);
        assert!(session.account().is_none());
    }

    #[test]
    fn test_connect_without_accounts_fails() {
        let mut wallet = MockWallet::minting(vec![]);
        wallet.accounts = Ok(vec![]);

        assert!(matches!(
            block_on(connect_account(&wallet)),
            Err(MintError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn test_mint_sends_safe_mint_to_contract() {
        let wallet = MockWallet::minting(vec![transfer_log(1)]);

        block_on(mint_token(&wallet, CONTRACT, request())).unwrap();

        let sent = wallet.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, ACCOUNT);
        assert_eq!(sent[0].to, contract());
        assert_eq!(sent[0].data, encode_safe_mint(ACCOUNT, PLACEHOLDER_METADATA_URI));
    }

    #[test]
    fn test_cyberpunk_cat_scenario() {
        let wallet = MockWallet::minting(vec![Log::default(), transfer_log(42)]);

        let mut session = MintSession::new();
        session.begin_connect().unwrap();
        session.complete_connect(block_on(connect_account(&wallet)));
        session
            .accept_image("data:image/png;base64,iVBORw0KGgo=".to_string())
            .unwrap();
        session.set_name("Cyberpunk Cat".to_string());
        session.set_description("A short story".to_string());
        assert!(session.can_mint());

        let request = session.begin_mint().unwrap();
        let toast = session.complete_mint(block_on(mint_token(&wallet, CONTRACT, request)));

        assert_eq!(toast.title, "NFT Minted!");
        assert_eq!(session.panel(), Panel::Success);
        let result = session.mint_result().unwrap();
        assert_eq!(result.token_id, Some(U256::from(42)));
        assert_eq!(result.tx_hash, TX_HASH);
        assert_eq!(result.contract_address, contract());
    }

    #[test]
    fn test_mint_without_transfer_log_still_succeeds() {
        let wallet = MockWallet::minting(vec![Log::default()]);

        let result = block_on(mint_token(&wallet, CONTRACT, request())).unwrap();

        assert_eq!(result.token_id, None);
        assert_eq!(result.tx_hash, TX_HASH);
    }

    #[test]
    fn test_user_rejected_signature() {
        let mut wallet = MockWallet::minting(vec![]);
        wallet.send = Err(ProviderError {
            code: Some(USER_REJECTED_CODE),
            message: "User denied transaction signature.".to_string(),
        });

        let result = block_on(mint_token(&wallet, CONTRACT, request()));

        assert_eq!(result, Err(MintError::TransactionFailed { reason: None }));
    }

    #[test]
    fn test_reverted_mint_keeps_draft() {
        let mut wallet = MockWallet::minting(vec![transfer_log(5)]);
        wallet.receipt.status = Some(U64::ZERO);

        let mut session = MintSession::new();
        session.complete_connect(Ok(ACCOUNT));
        session.accept_image("data:image/gif;base64,R0lG".to_string()).unwrap();
        session.set_name("n".to_string());
        session.set_description("d".to_string());
        let draft = session.draft().clone();

        let request = session.begin_mint().unwrap();
        let toast = session.complete_mint(block_on(mint_token(&wallet, CONTRACT, request)));

        assert_eq!(toast.title, "Minting Failed");
        assert_eq!(toast.description.as_deref(), Some("transaction reverted"));
        assert_eq!(session.status(), &MintStatus::Idle);
        assert_eq!(session.draft(), &draft);
    }

    #[test]
    fn test_invalid_contract_address() {
        let wallet = MockWallet::minting(vec![]);

        let result = block_on(mint_token(&wallet, "0xnope", request()));

        assert_eq!(result, Err(MintError::InvalidAddress("0xnope".to_string())));
        assert!(wallet.sent.borrow().is_empty());
    }
}
