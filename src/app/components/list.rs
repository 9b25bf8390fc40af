//! Generic record list: fetch on mount, render cards, delete with confirmation.

use dioxus::prelude::*;
use tracing::debug;

use super::card::RecordCard;
use crate::api::ResourceApi;
use crate::app::crud::{confirm_delete_message, ListState};
use crate::app::task::use_task_scope;
use crate::app::Routed;
use crate::model::CardView;

#[derive(Props, Clone, PartialEq)]
pub struct RecordListProps<R: Routed> {
    pub api: ResourceApi<R>,
}

/// List of every record of kind `R`.
#[allow(non_snake_case)]
pub fn RecordList<R: Routed>(props: RecordListProps<R>) -> Element {
    let scope = use_task_scope();
    let mut state = use_signal(ListState::<R>::loading);

    let fetch_api = props.api.clone();
    let fetch_scope = scope.clone();
    let fetched = use_resource(move || {
        let api = fetch_api.clone();
        let scope = fetch_scope.clone();
        async move { scope.run(async move { api.get_all().await }).await }
    });

    use_effect(move || {
        if let Some(Some(result)) = fetched.read().as_ref() {
            state.write().finish_load(result.clone());
        }
    });

    let delete_api = props.api.clone();
    let on_delete = use_callback(move |id: i64| {
        let Some(message) = state.read().find(id).map(confirm_delete_message)
        else {
            return;
        };
        if !confirm_with_user(&message) {
            debug!("Delete of {} {} cancelled", R::LABEL, id);
            return;
        }

        let api = delete_api.clone();
        let scope = scope.clone();
        spawn(async move {
            if let Some(result) = scope.run(api.delete(id)).await {
                state.write().finish_delete(id, result);
            }
        });
    });

    let current = state.read();
    let plural = R::plural();
    let label = R::LABEL;
    let cards: Vec<(i64, CardView)> = current
        .records
        .iter()
        .map(|record| (record.id(), record.card()))
        .collect();

    let content = if current.loading {
        rsx! {
            article { aria_busy: "true", "Loading {plural}..." }
        }
    } else if current.shows_empty_state() {
        rsx! {
            article { class: "empty-state",
                p { "No {plural} found. Create one to get started!" }
                Link { to: R::new_route(), "Add New {label}" }
            }
        }
    } else {
        rsx! {
            div { class: "record-grid",
                for (id, card) in cards {
                    RecordCard {
                        key: "{id}",
                        card,
                        edit_to: R::edit_route(id),
                        on_delete: move |_| on_delete.call(id),
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "list-header",
            h1 { style: "margin:0;text-transform:capitalize;", "{plural}" }
            Link { to: R::new_route(), class: "button".to_string(), "Add New {label}" }
        }

        if let Some(ref error) = current.error {
            div { class: "error-message", role: "alert", "{error}" }
        }

        {content}
    }
}

/// Ask the user to confirm a destructive action.
#[cfg(target_arch = "wasm32")]
fn confirm_with_user(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Without a browser there is nobody to ask.
#[cfg(not(target_arch = "wasm32"))]
fn confirm_with_user(_message: &str) -> bool {
    true
}
