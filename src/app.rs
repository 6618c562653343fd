//! TaskFlow Frontend App
//!
//! Route table and session provider wiring.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api;
use crate::components::{AuthCallback, LandingPage, LoginPage, SignupPage, TodoDashboard};
use crate::context::SessionContext;
use crate::models::User;

#[component]
pub fn App() -> impl IntoView {
    let (user, set_user) = signal::<Option<User>>(None);
    let (loading, set_loading) = signal(true);

    // Provide session state to all routes
    let session = SessionContext::new((user, set_user), (loading, set_loading));
    provide_context(session);

    // Restore the persisted session once on load; any failure surfaces as
    // a signed-out state, never as a fault.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::restore_session().await {
                Ok(Some(restored)) => {
                    web_sys::console::log_1(
                        &format!("[AUTH] Session restored for {}", restored.user.label()).into(),
                    );
                    session.set_user(Some(restored.user));
                }
                Ok(None) => session.set_user(None),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[AUTH] Session restore failed: {}", err).into(),
                    );
                    session.set_user(None);
                }
            }
            session.finish_loading();
        });
    });

    view! {
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/hi") view=TodoDashboard/>
                <Route path=path!("/auth/callback") view=AuthCallback/>
            </Routes>
        </Router>
    }
}
