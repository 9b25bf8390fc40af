//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod crud;
pub mod pages;
pub mod task;

use crate::api::{default_transport, ApiClient};
use crate::model::{Product, Resource, User};
use pages::{Home, NotFound, ProductEdit, ProductNew, Products, UserEdit, UserNew, Users};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // One client for the whole app; pages pick their resource from it
    use_context_provider(|| ApiClient::new(&crate::config::api_base_url(), default_transport()));

    rsx! {
        Router::<Route> {}
    }
}

/// API client provided by [`App`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/products/new")]
    ProductNew {},
    #[route("/products/:id/edit")]
    ProductEdit { id: i64 },
    #[route("/users")]
    Users {},
    #[route("/users/new")]
    UserNew {},
    #[route("/users/:id/edit")]
    UserEdit { id: i64 },
    // Anything else bounces to the home page
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The page a path finally lands on once redirects are applied.
    pub fn resolve(path: &str) -> Route {
        match path.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => Route::Home {},
            Ok(route) => route,
        }
    }

    /// Nav section highlighted for this route
    pub fn section(&self) -> &'static str {
        match self {
            Route::Products {} | Route::ProductNew {} | Route::ProductEdit { .. } => "products",
            Route::Users {} | Route::UserNew {} | Route::UserEdit { .. } => "users",
            Route::Home {} | Route::NotFound { .. } => "home",
        }
    }
}

/// Routes belonging to a record kind.
pub trait Routed: Resource {
    fn list_route() -> Route;
    fn new_route() -> Route;
    fn edit_route(id: i64) -> Route;
}

impl Routed for Product {
    fn list_route() -> Route {
        Route::Products {}
    }

    fn new_route() -> Route {
        Route::ProductNew {}
    }

    fn edit_route(id: i64) -> Route {
        Route::ProductEdit { id }
    }
}

impl Routed for User {
    fn list_route() -> Route {
        Route::Users {}
    }

    fn new_route() -> Route {
        Route::UserNew {}
    }

    fn edit_route(id: i64) -> Route {
        Route::UserEdit { id }
    }
}
