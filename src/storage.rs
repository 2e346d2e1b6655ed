//! Browser Storage
//!
//! Typed access to the `localStorage` keys the admin app uses.

const TOKEN_KEY: &str = "token";
const THEME_KEY: &str = "theme";
const API_URL_KEY: &str = "apiBaseUrl";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Handle over `window.localStorage`; every accessor is a no-op without it
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[STORAGE] localStorage unavailable");
        }
        Self { storage }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("[STORAGE] could not write {}", key);
            }
        }
    }

    /// Bearer token written by the login flow
    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn theme(&self) -> Theme {
        self.get(THEME_KEY).map(|v| Theme::from_str(&v)).unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.set(THEME_KEY, theme.as_str());
    }

    pub fn api_base_url(&self) -> Option<String> {
        self.get(API_URL_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str("sepia"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
