//! Common types used across the frontend application.
//!
//! This module centralizes type definitions shared by the session state
//! machine, the wallet services and the UI components.
//!
//! # Categories
//!
//! - **Session Types** - Status, draft and mint result
//! - **Notification Types** - Toasts and the toast queue
//! - **Error Types** - Frontend error handling

use alloy_primitives::{Address, TxHash, U256};
use thiserror::Error;

use crate::config::{MAX_IMAGE_SIZE, TOAST_LIMIT};

// =============================================================================
// Session Types
// =============================================================================

/// Outcome of a confirmed mint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintResult {
    /// Transaction hash returned by the wallet
    pub tx_hash: TxHash,
    /// Token id from the `Transfer` event, if one could be decoded
    pub token_id: Option<U256>,
    /// Contract the token was minted on
    pub contract_address: Address,
}

/// Where the form currently is.
///
/// The success variant owns its result, so a success state without a
/// transaction hash and contract address cannot be built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MintStatus {
    /// Waiting for user input
    #[default]
    Idle,
    /// Account access requested from the wallet
    Connecting,
    /// Mint transaction sent, waiting for confirmation
    Minting,
    /// Mint confirmed
    Success(MintResult),
}

impl MintStatus {
    /// True while a wallet request is in flight.
    pub fn is_working(&self) -> bool {
        matches!(self, MintStatus::Connecting | MintStatus::Minting)
    }
}

/// Asset being prepared for minting. Never leaves the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    /// Image as a data URL
    pub image: Option<String>,
    pub name: String,
    pub description: String,
}

impl Draft {
    /// Image present and both text fields non-empty.
    pub fn is_complete(&self) -> bool {
        self.image.is_some() && !self.name.is_empty() && !self.description.is_empty()
    }
}

/// What the mint flow needs from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintRequest {
    pub recipient: Address,
    pub metadata_uri: String,
}

/// Panel rendered by the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    ConnectWallet,
    Draft,
    Success,
}

/// Shorten an address or hash to `0x1234...abcd`.
pub fn truncate_address(addr: &str) -> String {
    if addr.len() <= 10 || !addr.is_ascii() {
        return addr.to_string();
    }
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

// =============================================================================
// Notification Types
// =============================================================================

/// Visual style of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast toast-default",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Assigned by [`ToastQueue::push`]
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            variant: ToastVariant::Default,
            title: title.into(),
            description: None,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Visible toasts, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Show a toast, evicting the oldest ones past [`TOAST_LIMIT`].
    /// Returns the id to dismiss it with.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.insert(0, toast);
        self.toasts.truncate(TOAST_LIMIT);
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant is recoverable: the session returns to idle and the
/// error is shown as a toast.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MintError {
    /// No injected wallet in the page.
    #[error("MetaMask not found")]
    ProviderNotFound,

    /// Account request rejected or failed.
    #[error("Wallet connection failed: {0}")]
    ConnectionFailed(String),

    /// Selected file is not an image.
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    /// Selected image exceeds the size limit.
    #[error("File too large: {0} bytes")]
    FileTooLarge(f64),

    /// FileReader failed to decode the selection.
    #[error("Failed to read file: {0}")]
    FileRead(String),

    /// Submit attempted before the draft was complete.
    #[error("Missing account, image, name or description")]
    MissingInformation,

    /// Malformed hex address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Rejected, reverted or otherwise failed transaction.
    #[error("Transaction failed: {}", .reason.as_deref().unwrap_or("cancelled or failed"))]
    TransactionFailed { reason: Option<String> },

    /// Another wallet request is still in flight.
    #[error("Another request is in progress")]
    Busy,
}

impl MintError {
    /// User-facing notification for this error.
    pub fn toast(&self) -> Toast {
        match self {
            MintError::ProviderNotFound => Toast::destructive("MetaMask not found")
                .with_description("Please install MetaMask to use this app."),
            MintError::ConnectionFailed(_) => Toast::destructive("Connection Failed")
                .with_description("Could not connect to MetaMask. Please try again."),
            MintError::InvalidFileType(_) => Toast::destructive("Invalid File")
                .with_description("Please upload an image file."),
            MintError::FileTooLarge(_) => Toast::destructive("File Too Large").with_description(
                format!("Images must be {} MB or smaller.", MAX_IMAGE_SIZE / (1024.0 * 1024.0)),
            ),
            MintError::FileRead(_) => Toast::destructive("Invalid File")
                .with_description("The selected file could not be read."),
            MintError::MissingInformation => Toast::destructive("Missing Information")
                .with_description("Please upload an image and provide a name and description."),
            MintError::InvalidAddress(addr) => Toast::destructive("Minting Failed")
                .with_description(format!("Invalid address: {}", addr)),
            MintError::TransactionFailed { reason } => Toast::destructive("Minting Failed")
                .with_description(
                    reason
                        .clone()
                        .unwrap_or_else(|| "The transaction was cancelled or failed.".to_string()),
                ),
            MintError::Busy => Toast::new("Please wait")
                .with_description("Another wallet request is still in progress."),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, MintError>;
