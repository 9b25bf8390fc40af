//! Light/dark theme toggle persisted in localStorage.

use dioxus::prelude::*;

/// localStorage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "catalog-admin-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the Pico CSS `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unknown falls back to light.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Some(Theme::from_stored(&value))
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_theme() -> Option<Theme> {
    None
}

#[cfg(target_arch = "wasm32")]
fn apply_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme(_theme: Theme) {}

/// Footer button switching between light and dark.
#[component]
pub fn ThemeSwitcher() -> Element {
    let mut theme = use_signal(Theme::default);

    // Pick up the stored choice once mounted in the browser
    use_effect(move || {
        if let Some(stored) = stored_theme() {
            theme.set(stored);
        }
    });

    let current = theme();
    let next_name = current.toggled().as_str();
    let label = match current {
        Theme::Light => "🌙 Dark",
        Theme::Dark => "☀️ Light",
    };

    rsx! {
        div { class: "theme-switcher",
            button {
                id: "theme-toggle",
                r#type: "button",
                class: "outline secondary",
                aria_label: "Switch to {next_name} theme",
                onclick: move |_| {
                    let next = theme().toggled();
                    apply_theme(next);
                    theme.set(next);
                },
                "{label}"
            }
        }
    }
}

/// Inline head script applying the stored theme before first paint.
pub const THEME_SCRIPT: &str = r#"
(function(){
    var t = localStorage.getItem('catalog-admin-theme') === 'dark' ? 'dark' : 'light';
    document.documentElement.setAttribute('data-theme', t);
})();
"#;
