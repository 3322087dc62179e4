//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::Config;

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    /// Backend and frontend base URLs
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Get the app context, panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
