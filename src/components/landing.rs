//! Landing Page Component
//!
//! Public hero page with a session-aware header.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::SessionContext;

#[component]
pub fn LandingPage() -> impl IntoView {
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
        <div class="landing-page">
            <header class="top-nav">
                <a href="/" class="brand">"TaskFlow"</a>
                {move || if let Some(user) = session.user.get() {
                    view! {
                        <span class="user-chip">
                            <a href="/hi" class="btn ghost">"My Tasks"</a>
                            <span class="muted">{user.label()}</span>
                            <button class="btn ghost" on:click=sign_out>"Log out"</button>
                        </span>
                    }.into_any()
                } else {
                    view! {
                        <span class="user-chip">
                            <a href="/login" class="btn ghost">"Sign In"</a>
                            <a href="/signup" class="btn primary pill">"Get Started"</a>
                        </span>
                    }.into_any()
                }}
            </header>

            <main class="hero">
                <h1>"TaskFlow"</h1>
                <h2 class="hero-subtitle">"Organize your tasks. Boost your productivity."</h2>
                <p class="hero-copy">
                    "A clean, minimalist todo list application that helps you manage your \
                     tasks efficiently. Create, organize, and track your daily tasks with ease."
                </p>
                {move || if session.user.get().is_some() {
                    view! {
                        <a href="/hi" class="hero-link">"Open your dashboard ›"</a>
                    }.into_any()
                } else {
                    view! {
                        <a href="/signup" class="hero-link">"Start for free ›"</a>
                    }.into_any()
                }}
            </main>
        </div>
    }
}
