//! Auth Layout Component
//!
//! Shared chrome for the login and signup screens: fixed brand header with
//! the signed-in identity when one exists, centered card below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::SessionContext;

#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let sign_out = move |_| {
        spawn_local(async move {
            if let Err(err) = api::sign_out().await {
                web_sys::console::warn_1(&format!("[AUTH] Sign-out failed: {}", err).into());
            }
            session.clear();
        });
    };

    view! {
        <div class="auth-page">
            <header class="top-nav">
                <a href="/" class="brand">"TaskFlow"</a>
                {move || session.user.get().map(|user| view! {
                    <span class="user-chip">
                        <span class="muted">{user.label()}</span>
                        <button class="btn ghost" on:click=sign_out>"Log out"</button>
                    </span>
                })}
            </header>

            <div class="auth-body">
                <div class="auth-card">
                    <p class="auth-tagline">"Sign in to access your account"</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}
