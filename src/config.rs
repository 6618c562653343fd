//! Backend Configuration
//!
//! Supabase project coordinates, resolved at compile time. The anon key is
//! public by design (row-level security gates all data access); it is still
//! injected from the build environment rather than committed.

/// Supabase project URL.
pub const SUPABASE_URL: &str = "https://tkrfbhvtadoqnfqzlhaw.supabase.co";

/// Public anon key, from `SUPABASE_ANON_KEY` at build time.
pub const SUPABASE_ANON_KEY: &str = match option_env!("SUPABASE_ANON_KEY") {
    Some(key) => key,
    None => "",
};

/// localStorage key for the persisted session snapshot.
pub const SESSION_STORAGE_KEY: &str = "taskflow.auth.session";
