//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::{ThemeSwitcher, THEME_SCRIPT};
use crate::app::Route;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.record-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.record-card header { display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; }
.record-card h3 { margin: 0; }
.record-meta { display: flex; justify-content: space-between; align-items: baseline; }
.record-meta .price { font-size: 1.25rem; font-weight: 600; }
.record-actions { display: flex; gap: 0.5rem; }
.record-actions > * { margin: 0; flex: 1; }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 50%; display: inline-flex; align-items: center; justify-content: center; background: var(--pico-primary-background); color: var(--pico-primary-inverse); font-weight: 700; }
.badge { font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 1rem; white-space: nowrap; }
.badge-ok { background: var(--pico-ins-color); color: #fff; }
.badge-err { background: var(--pico-del-color); color: #fff; }
.tags { display: flex; flex-wrap: wrap; gap: 0.25rem; margin-bottom: 1rem; }
.tag { font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 0.25rem; background: var(--pico-secondary-background); color: var(--pico-secondary-inverse); }
.list-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.error-message { color: var(--pico-del-color); border: 1px solid var(--pico-del-color); padding: 0.75rem 1rem; border-radius: var(--pico-border-radius); margin-bottom: 1rem; }
.empty-state { text-align: center; }
.form-actions { display: flex; gap: 0.5rem; }
.quick-links { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 0.5rem; }
small { color: var(--pico-muted-color); }
/* Theme switcher */
.theme-switcher { display: flex; gap: 0.25rem; }
.theme-switcher button { padding: 0.25rem 0.5rem; font-size: 0.8rem; margin: 0; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Catalog Admin", props.title);
    // Nav highlight follows the current route
    let active = use_route::<Route>().section();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        header { class: "container",
            Nav { active: active.to_string() }
        }
        main { class: "container",
            {props.children}
        }
        footer {
            class: "container",
            style: "display:flex;justify-content:space-between;align-items:center;",
            small { "Catalog Admin v{version}" }
            ThemeSwitcher {}
        }
    }
}
