//! Application Context
//!
//! Config, credentials, and theme, provided once at startup via the Leptos
//! Context API.

use leptos::prelude::*;

use catalog_draft::HttpCatalogApi;

use crate::config::AppConfig;
use crate::storage::{LocalStore, Theme};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Bearer token for API calls
    token: RwSignal<Option<String>>,
    /// Current color theme
    theme: RwSignal<Theme>,
}

impl AppContext {
    /// Read config, token, and theme from browser storage
    pub fn from_storage() -> Self {
        let store = LocalStore::open();
        let config = AppConfig::resolve(store.api_base_url());
        log::info!("[APP] API base URL {}", config.api_base_url);
        Self {
            config: StoredValue::new(config),
            token: RwSignal::new(store.token()),
            theme: RwSignal::new(store.theme()),
        }
    }

    /// Client for the catalog endpoints using the current token
    pub fn api(&self) -> HttpCatalogApi {
        let base = self.config.with_value(|c| c.api_base_url.clone());
        HttpCatalogApi::new(base, self.token.get_untracked())
    }

    pub fn has_token(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Re-read the token, e.g. after logging in from another tab
    pub fn refresh_token(&self) {
        self.token.set(LocalStore::open().token());
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip the theme and persist it
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        LocalStore::open().set_theme(next);
        self.theme.set(next);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
