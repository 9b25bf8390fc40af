//! Navigation bar with a collapsible menu for narrow screens.

use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active section ("home", "products", "users")
    pub active: String,
}

/// Top navigation: brand link plus one link per record section.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let link_class = |section: &str| {
        if props.active == section {
            "contrast"
        } else {
            "secondary"
        }
    };

    let menu_style = if menu_open() { "" } else { "display:none;" };

    rsx! {
        nav {
            ul {
                li {
                    Link { to: Route::Home {}, strong { "Product & User Manager" } }
                }
            }
            ul {
                li {
                    Link {
                        to: Route::Products {},
                        class: link_class("products").to_string(),
                        "Products"
                    }
                }
                li {
                    Link {
                        to: Route::Users {},
                        class: link_class("users").to_string(),
                        "Users"
                    }
                }
                li {
                    button {
                        class: "outline secondary",
                        r#type: "button",
                        aria_label: "Quick actions",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }

        // Quick actions menu
        div { style: "{menu_style}", id: "quick-menu",
            ul {
                li {
                    Link { to: Route::ProductNew {}, onclick: move |_| menu_open.set(false), "Add New Product" }
                }
                li {
                    Link { to: Route::UserNew {}, onclick: move |_| menu_open.set(false), "Add New User" }
                }
            }
        }
    }
}
