//! Nav Bar Component
//!
//! Dashboard header: brand plus a Go Home button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NavBar() -> impl IntoView {
    let navigate = StoredValue::new(use_navigate());

    view! {
        <header class="nav-bar">
            <span
                class="brand"
                on:click=move |_| navigate.with_value(|nav| nav("/", Default::default()))
            >
                "TaskFlow"
            </span>
            <button
                class="btn outline"
                on:click=move |_| navigate.with_value(|nav| nav("/", Default::default()))
            >
                "Go Home"
            </button>
        </header>
    }
}
