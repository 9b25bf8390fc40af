//! Catch-all route: any unknown path redirects to the home page.

use dioxus::prelude::*;
use tracing::debug;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        debug!("Unknown path /{}, redirecting home", segments.join("/"));
        navigator.replace(Route::Home {});
    });

    rsx! {}
}
