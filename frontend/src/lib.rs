//! MintLockr - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page app that connects a MetaMask wallet, lets the
//! user pick an image with a name and description, and mints it as an
//! ERC-721 token on Sepolia.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, tagline)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MintCard                                                    │
//! │  ├── CardHeader (wallet connection)                         │
//! │  ├── UploadZone + DraftDetails  (Panel::Draft)              │
//! │  └── SuccessPanel               (Panel::Success)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (MintStatus, MintResult, Toast, MintError)
//! - [`session`] - Form state machine
//! - [`abi`] - `safeMint` calldata and `Transfer` log decoding
//! - [`components`] - UI components
//! - [`services`] - Wallet, contract and browser access

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod abi;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Session
    Draft, MintRequest, MintResult, MintStatus, Panel,
    // Notifications
    Toast, ToastQueue, ToastVariant,
    // Errors
    AppResult, MintError,
};

// State machine
pub use session::{check_image_file, MintSession};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 MintLockr - Starting Leptos App");
    log::info!("📜 Contract: {}", MINTLOCKR_CONTRACT_ADDRESS);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Notifications are shared by every part of the page
    let toasts = create_rw_signal(ToastQueue::default());

    view! {
        <div class="container">
            <Hero/>
            <MintCard toasts=toasts/>
        </div>

        <Toaster toasts=toasts/>
    }
}
