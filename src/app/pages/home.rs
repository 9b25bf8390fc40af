//! Landing page with links into each record section.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),

            hgroup {
                h1 { "Welcome to Product & User Manager" }
                p { "Manage your products and users with ease" }
            }

            div { class: "record-grid",
                article {
                    header { h2 { "📦 Products" } }
                    p { "Create, read, update, and delete products with full CRUD operations." }
                    Link { to: Route::Products {}, "Manage Products →" }
                }
                article {
                    header { h2 { "👥 Users" } }
                    p { "Manage user accounts, view details, and perform user operations." }
                    Link { to: Route::Users {}, "Manage Users →" }
                }
            }

            section {
                h2 { "Quick Actions" }
                div { class: "quick-links",
                    Link { to: Route::ProductNew {}, "Add New Product" }
                    Link { to: Route::UserNew {}, "Add New User" }
                    Link { to: Route::Products {}, "View All Products" }
                    Link { to: Route::Users {}, "View All Users" }
                }
            }
        }
    }
}
