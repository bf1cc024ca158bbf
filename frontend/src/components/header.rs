use leptos::*;

use crate::components::notify;
use crate::services::{connect_account, EthereumWallet};
use crate::session::MintSession;
use crate::types::{truncate_address, MintError, MintStatus, ToastQueue};

/// Card title with the wallet connect button or the connected account.
#[component]
pub fn CardHeader(
    session: RwSignal<MintSession>,
    toasts: RwSignal<ToastQueue>,
) -> impl IntoView {
    let account = create_memo(move |_| session.with(|s| s.account()));
    let is_working = move || session.with(|s| s.is_working());
    let is_connecting = move || session.with(|s| matches!(s.status(), MintStatus::Connecting));

    // Missing provider is reported without touching the session
    let on_connect = move |_| {
        let Some(wallet) = EthereumWallet::detect() else {
            log::error!("❌ MetaMask not found");
            notify(toasts, MintError::ProviderNotFound.toast());
            return;
        };

        if !matches!(session.try_update(|s| s.begin_connect()), Some(Ok(()))) {
            return;
        }

        log::info!("🔑 Attempting to connect wallet...");

        spawn_local(async move {
            let outcome = connect_account(&wallet).await;
            if let Some(toast) = session.try_update(|s| s.complete_connect(outcome)).flatten() {
                notify(toasts, toast);
            }
        });
    };

    view! {
        <div class="card-header">
            <div class="card-title">
                <span class="card-title-text">"NFT Minter"</span>
                {move || match account.get() {
                    Some(addr) => view! {
                        <div class="wallet-status connected">
                            <span class="wallet-dot connected"></span>
                            <span class="wallet-address">{truncate_address(&addr.to_string())}</span>
                        </div>
                    }.into_view(),
                    None => view! {
                        <button class="btn btn-primary" on:click=on_connect disabled=is_working>
                            {move || if is_connecting() { "⏳ " } else { "👛 " }}
                            "Connect Wallet"
                        </button>
                    }.into_view(),
                }}
            </div>
            <p class="card-description">
                {move || if account.get().is_some() {
                    "Upload an image, describe it, and mint it as a unique NFT."
                } else {
                    "Connect your wallet to get started."
                }}
            </p>
        </div>
    }
}
