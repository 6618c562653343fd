//! Auth Callback Component
//!
//! Landing point for the OAuth redirect. Drives the callback machine with
//! real timers and performs exactly one navigation when it terminates.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::callback::{CallbackMachine, Probe, Step};
use crate::context::SessionContext;

#[component]
pub fn AuthCallback() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let (error, set_error) = signal::<Option<String>>(None);
    let navigate = StoredValue::new(use_navigate());

    Effect::new(move |_| {
        spawn_local(async move {
            let mut machine = CallbackMachine::new();
            loop {
                let probe = match api::current_session().await {
                    Ok(Some(found)) => {
                        session.set_user(Some(found.user));
                        Probe::Session
                    }
                    Ok(None) => Probe::NoSession,
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[AUTH] Callback session lookup failed: {}", err).into(),
                        );
                        Probe::LookupError
                    }
                };
                match machine.on_probe(probe) {
                    Step::Redirect(target) => {
                        navigate.with_value(|nav| nav(target, Default::default()));
                        break;
                    }
                    Step::RetryAfter(delay_ms) => {
                        TimeoutFuture::new(delay_ms).await;
                    }
                    Step::FailThenRedirect {
                        message,
                        target,
                        delay_ms,
                    } => {
                        set_error.set(Some(message.to_string()));
                        TimeoutFuture::new(delay_ms).await;
                        navigate.with_value(|nav| nav(target, Default::default()));
                        break;
                    }
                }
            }
        });
    });

    view! {
        <div class="callback-screen">
            {move || match error.get() {
                Some(message) => view! {
                    <div class="callback-card">
                        <h2>"Authentication Error"</h2>
                        <p class="error-text">{message}</p>
                        <p class="muted">"Redirecting to login page..."</p>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="callback-card">
                        <p class="muted">"Completing authentication..."</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
