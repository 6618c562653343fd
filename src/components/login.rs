//! Login Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::callback::DASHBOARD_ROUTE;
use crate::components::AuthLayout;
use crate::context::SessionContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = StoredValue::new(use_navigate());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

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
            match api::sign_in(&email, &password).await {
                Ok(signed_in) => {
                    session.set_user(Some(signed_in.user));
                    navigate.with_value(|nav| nav(DASHBOARD_ROUTE, Default::default()));
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
            <h1>"Log in"</h1>
            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}
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
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <button class="btn outline wide" on:click=move |_| api::begin_oauth("github")>
                "Continue with GitHub"
            </button>
            <p class="muted">
                "New here? " <a href="/signup">"Create an account"</a>
            </p>
        </AuthLayout>
    }
}
