//! Session Context
//!
//! Current-user identity shared via the Leptos Context API. The remote auth
//! service owns the session; this context observes a single snapshot of it.

use leptos::prelude::*;

use crate::models::User;

/// App-wide session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Authenticated user, `None` when signed out - read
    pub user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    /// True until the initial session restore resolves - read
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
}

impl SessionContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    /// Install the identity from a freshly materialized session.
    pub fn set_user(&self, user: Option<User>) {
        self.set_user.set(user);
    }

    /// Mark the initial restore as finished.
    pub fn finish_loading(&self) {
        self.set_loading.set(false);
    }

    /// Drop the local identity after sign-out.
    pub fn clear(&self) {
        self.set_user.set(None);
    }
}
