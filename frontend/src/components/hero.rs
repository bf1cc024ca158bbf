//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Create, own, and trade unique digital assets on the blockchain with ease."
            </p>
        </header>
    }
}
