//! Success summary shown after a confirmed mint.

use leptos::*;

use crate::components::notify;
use crate::config::{explorer_tx_url, NETWORK_NAME};
use crate::services::copy_to_clipboard;
use crate::session::MintSession;
use crate::types::{truncate_address, Toast, ToastQueue};

/// Copy `text` and confirm with a toast.
fn copy_text(toasts: RwSignal<ToastQueue>, text: String) {
    spawn_local(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => notify(toasts, Toast::new("Copied to clipboard!")),
            Err(e) => log::warn!("Could not copy to clipboard: {}", e),
        }
    });
}

#[component]
pub fn SuccessPanel(
    session: RwSignal<MintSession>,
    toasts: RwSignal<ToastQueue>,
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let result = create_memo(move |_| session.with(|s| s.mint_result().cloned()));

    let on_reset = move |_| {
        session.update(|s| s.reset());
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
        log::info!("🔄 Ready for another NFT");
    };

    move || {
        result.get().map(|result| {
            let token_row = match result.token_id.map(|id| id.to_string()) {
                Some(token_id) => {
                    let copied = token_id.clone();
                    view! {
                        <span class="detail-value">
                            {token_id}
                            <button class="copy-btn" title="Copy" on:click=move |_| copy_text(toasts, copied.clone())>
                                "📋"
                            </button>
                        </span>
                    }
                    .into_view()
                }
                None => view! { <span class="detail-value muted">"Unavailable"</span> }.into_view(),
            };

            let contract = result.contract_address.to_string();
            let contract_short = truncate_address(&contract);
            let tx_hash = result.tx_hash.to_string();
            let tx_url = explorer_tx_url(&tx_hash);

            view! {
                <div class="success-panel">
                    <div class="success-icon">"✅"</div>
                    <h3>"Minting Successful!"</h3>
                    <p class="subtitle">{format!("Your NFT has been created on the {}.", NETWORK_NAME)}</p>

                    <div class="details-list">
                        <div class="detail-row">
                            <span class="detail-label">"Token ID:"</span>
                            {token_row}
                        </div>
                        <div class="detail-row">
                            <span class="detail-label">"Contract:"</span>
                            <span class="detail-value">
                                {contract_short}
                                <button class="copy-btn" title="Copy" on:click=move |_| copy_text(toasts, contract.clone())>
                                    "📋"
                                </button>
                            </span>
                        </div>
                        <div class="detail-row">
                            <span class="detail-label">"Transaction:"</span>
                            <a class="detail-value link" href=tx_url target="_blank" rel="noopener noreferrer">
                                {truncate_address(&tx_hash)} " ↗"
                            </a>
                        </div>
                    </div>

                    <button class="btn btn-primary" on:click=on_reset>"Mint Another NFT"</button>
                </div>
            }
        })
    }
}
