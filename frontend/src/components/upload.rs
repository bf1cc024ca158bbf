//! Image upload zone.
//!
//! Handles file selection, type/size checks and decoding into a data URL.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::notify;
use crate::services::read_as_data_url;
use crate::session::MintSession;
use crate::types::ToastQueue;

#[component]
pub fn UploadZone(
    session: RwSignal<MintSession>,
    toasts: RwSignal<ToastQueue>,
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let image = create_memo(move |_| session.with(|s| s.draft().image.clone()));
    let is_working = create_memo(move |_| session.with(|s| s.is_working()));

    // Rejected files never reach the draft
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let selected = session.with_untracked(|s| s.select_image(&file.type_(), file.size()));
        if let Err(e) = selected {
            log::warn!("🚫 Rejected {}: {}", file.name(), e);
            notify(toasts, e.toast());
            return;
        }

        log::info!("📤 Reading {} ({} bytes)", file.name(), file.size());

        spawn_local(async move {
            let outcome = match read_as_data_url(&file).await {
                Ok(data_url) => session
                    .try_update(|s| s.accept_image(data_url))
                    .unwrap_or(Ok(())),
                Err(e) => Err(e),
            };

            if let Err(e) = outcome {
                log::error!("❌ Image not accepted: {}", e);
                notify(toasts, e.toast());
            }
        });
    };

    let open_picker = move |_| {
        if is_working.get() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-zone"
            class:disabled=move || is_working.get()
            on:click=open_picker
        >
            <input
                type="file"
                accept="image/*"
                style="display:none"
                node_ref=file_input
                disabled=move || is_working.get()
                on:change=on_file_change
                on:click=move |ev| ev.stop_propagation()
            />

            {move || match image.get() {
                Some(src) => view! {
                    <img class="upload-preview" src=src alt="NFT Preview"/>
                }.into_view(),
                None => view! {
                    <div class="upload-placeholder">
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">"Click to upload image"</div>
                        <div class="upload-hint">"PNG, JPG, GIF up to 10MB"</div>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
