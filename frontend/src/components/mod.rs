//! UI Components for the MintLockr application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Page title and tagline
//! - [`MintCard`] - The minter card, switching panels on session state
//! - [`CardHeader`] - Card title with wallet connection
//!
//! # Feature Components
//! - [`UploadZone`] - Image selection and preview
//! - [`DraftDetails`] - Name, description and mint button
//! - [`SuccessPanel`] - Mint summary with copy and explorer links
//! - [`Toaster`] - Transient notifications

mod header;
mod hero;
mod upload;
mod details;
mod success;
mod toast;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use details::*;
pub use success::*;
pub use toast::*;

use leptos::*;

use crate::session::MintSession;
use crate::types::{Panel, ToastQueue};

/// Minter card. Owns the session for the lifetime of the page.
#[component]
pub fn MintCard(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    let session = create_rw_signal(MintSession::new());
    let file_input = create_node_ref::<html::Input>();

    // Only re-render the body when the panel actually changes
    let panel = create_memo(move |_| session.with(|s| s.panel()));

    view! {
        <div class="card">
            <CardHeader session=session toasts=toasts/>

            <div class="card-content">
                {move || match panel.get() {
                    Panel::ConnectWallet => view! { }.into_view(),
                    Panel::Draft => view! {
                        <UploadZone session=session toasts=toasts file_input=file_input/>
                        <DraftDetails session=session toasts=toasts/>
                    }.into_view(),
                    Panel::Success => view! {
                        <SuccessPanel session=session toasts=toasts file_input=file_input/>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
