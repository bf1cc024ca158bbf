//! Form state machine.
//!
//! [`MintSession`] owns everything the minter card shows. It never touches
//! the browser: components call into it before and after each awaited
//! wallet operation and render whatever it says.
//!
//! ```text
//! Idle ──begin_connect──▶ Connecting ──complete_connect──▶ Idle
//! Idle ──begin_mint─────▶ Minting ─────complete_mint─────▶ Success | Idle
//! Success ──reset / accept_image──▶ Idle
//! ```

use alloy_primitives::Address;

use crate::config::{MAX_IMAGE_SIZE, PLACEHOLDER_METADATA_URI};
use crate::types::{AppResult, Draft, MintError, MintRequest, MintResult, MintStatus, Panel, Toast};

/// Check a selected file before decoding it.
pub fn check_image_file(mime: &str, size: f64) -> AppResult<()> {
    if !mime.starts_with("image/") {
        return Err(MintError::InvalidFileType(mime.to_string()));
    }
    if size > MAX_IMAGE_SIZE {
        return Err(MintError::FileTooLarge(size));
    }
    Ok(())
}

/// State of the minter card for one page session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MintSession {
    account: Option<Address>,
    draft: Draft,
    status: MintStatus,
}

impl MintSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> &MintStatus {
        &self.status
    }

    pub fn is_working(&self) -> bool {
        self.status.is_working()
    }

    /// Result of the last mint, only while the success panel is up.
    pub fn mint_result(&self) -> Option<&MintResult> {
        match &self.status {
            MintStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn panel(&self) -> Panel {
        match (&self.account, &self.status) {
            (None, _) => Panel::ConnectWallet,
            (Some(_), MintStatus::Success(_)) => Panel::Success,
            (Some(_), _) => Panel::Draft,
        }
    }

    // -------------------------------------------------------------------------
    // Wallet connection
    // -------------------------------------------------------------------------

    pub fn begin_connect(&mut self) -> AppResult<()> {
        if self.is_working() {
            return Err(MintError::Busy);
        }
        self.status = MintStatus::Connecting;
        Ok(())
    }

    /// Apply the wallet's answer. Returns the toast to show, if any.
    pub fn complete_connect(&mut self, outcome: AppResult<Address>) -> Option<Toast> {
        self.status = MintStatus::Idle;
        match outcome {
            Ok(address) => {
                log::info!("✅ Wallet connected: {}", address);
                self.account = Some(address);
                None
            }
            Err(e) => {
                log::error!("❌ Wallet connection failed: {}", e);
                Some(e.toast())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Drafting
    // -------------------------------------------------------------------------

    /// Gate a picked file before it is decoded. Leaves the session as is.
    pub fn select_image(&self, mime: &str, size: f64) -> AppResult<()> {
        if self.is_working() {
            return Err(MintError::Busy);
        }
        check_image_file(mime, size)
    }

    /// Store a decoded image. Drops any previous mint result.
    pub fn accept_image(&mut self, data_url: String) -> AppResult<()> {
        if self.is_working() {
            return Err(MintError::Busy);
        }
        self.draft.image = Some(data_url);
        self.status = MintStatus::Idle;
        Ok(())
    }

    pub fn set_name(&mut self, name: String) {
        if !self.is_working() {
            self.draft.name = name;
        }
    }

    pub fn set_description(&mut self, description: String) {
        if !self.is_working() {
            self.draft.description = description;
        }
    }

    // -------------------------------------------------------------------------
    // Minting
    // -------------------------------------------------------------------------

    /// Whether the mint button is enabled.
    pub fn can_mint(&self) -> bool {
        self.account.is_some() && self.draft.is_complete() && !self.is_working()
    }

    /// Move to `Minting` and hand back what the contract call needs.
    pub fn begin_mint(&mut self) -> AppResult<MintRequest> {
        if self.is_working() {
            return Err(MintError::Busy);
        }
        let recipient = match self.account {
            Some(account) if self.draft.is_complete() => account,
            _ => return Err(MintError::MissingInformation),
        };
        self.status = MintStatus::Minting;
        Ok(MintRequest {
            recipient,
            metadata_uri: PLACEHOLDER_METADATA_URI.to_string(),
        })
    }

    /// Apply the mint outcome. The draft survives a failure.
    pub fn complete_mint(&mut self, outcome: AppResult<MintResult>) -> Toast {
        match outcome {
            Ok(result) => {
                log::info!(
                    "✅ Minted token {} in {}",
                    result.token_id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string()),
                    result.tx_hash
                );
                self.status = MintStatus::Success(result);
                Toast::new("NFT Minted!")
                    .with_description("Your new digital asset is now on the blockchain.")
            }
            Err(e) => {
                log::error!("❌ Mint failed: {}", e);
                self.status = MintStatus::Idle;
                e.toast()
            }
        }
    }

    /// Back to an empty form. The account stays connected.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.status = MintStatus::Idle;
    }
}
