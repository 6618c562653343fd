//! Signup Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::callback::DASHBOARD_ROUTE;
use crate::components::AuthLayout;
use crate::context::SessionContext;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = StoredValue::new(use_navigate());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending_confirm, set_pending_confirm) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::sign_up(&email, &password).await {
                // Autoconfirm projects hand back a live session right away
                Ok(Some(signed_up)) => {
                    session.set_user(Some(signed_up.user));
                    navigate.with_value(|nav| nav(DASHBOARD_ROUTE, Default::default()));
                }
                Ok(None) => {
                    set_pending_confirm.set(true);
                    set_submitting.set(false);
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout>
            <h1>"Create your account"</h1>
            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}
            {move || if pending_confirm.get() {
                view! {
                    <p class="muted">
                        "Almost there. Check your email to confirm your account, then log in."
                    </p>
                }.into_any()
            } else {
                view! {
                    <form class="auth-form" on:submit=submit>
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating..." } else { "Get Started" }}
                        </button>
                    </form>
                }.into_any()
            }}
            <p class="muted">
                "Already have an account? " <a href="/login">"Log in"</a>
            </p>
        </AuthLayout>
    }
}
