//! Name/description inputs and the mint button.

use leptos::*;

use crate::components::notify;
use crate::config::MINTLOCKR_CONTRACT_ADDRESS;
use crate::services::{mint_token, EthereumWallet};
use crate::session::MintSession;
use crate::types::{MintError, MintStatus, ToastQueue};

#[component]
pub fn DraftDetails(
    session: RwSignal<MintSession>,
    toasts: RwSignal<ToastQueue>,
) -> impl IntoView {
    let has_image = create_memo(move |_| session.with(|s| s.draft().image.is_some()));
    let is_working = move || session.with(|s| s.is_working());
    let is_minting = move || session.with(|s| matches!(s.status(), MintStatus::Minting));
    let can_mint = move || session.with(|s| s.can_mint());

    let on_mint = move |_| {
        let Some(wallet) = EthereumWallet::detect() else {
            notify(toasts, MintError::ProviderNotFound.toast());
            return;
        };

        let request = match session.try_update(|s| s.begin_mint()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("⚠️ Mint blocked: {}", e);
                notify(toasts, e.toast());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = mint_token(&wallet, MINTLOCKR_CONTRACT_ADDRESS, request).await;
            if let Some(toast) = session.try_update(|s| s.complete_mint(outcome)) {
                notify(toasts, toast);
            }
        });
    };

    view! {
        <Show
            when=move || has_image.get()
            fallback=|| view! { }
        >
            <div class="details">
                <div class="field">
                    <label for="nft-name">"🖼️ NFT Name"</label>
                    <input
                        id="nft-name"
                        class="input"
                        placeholder="e.g. 'Cyberpunk Cat'"
                        prop:value=move || session.with(|s| s.draft().name.clone())
                        on:input=move |ev| session.update(|s| s.set_name(event_target_value(&ev)))
                        disabled=is_working
                    />
                </div>
                <div class="field">
                    <label for="nft-description">"📝 NFT Description"</label>
                    <input
                        id="nft-description"
                        class="input"
                        placeholder="A short story about your NFT"
                        prop:value=move || session.with(|s| s.draft().description.clone())
                        on:input=move |ev| {
                            session.update(|s| s.set_description(event_target_value(&ev)))
                        }
                        disabled=is_working
                    />
                </div>
            </div>

            <div class="card-footer">
                <button
                    class="btn btn-primary btn-mint"
                    on:click=on_mint
                    disabled=move || !can_mint()
                >
                    {move || if is_minting() { "⏳ " } else { "" }}
                    "Mint Your NFT"
                </button>
            </div>
        </Show>
    }
}
