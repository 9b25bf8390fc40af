//! Card for one record in a list.

use dioxus::prelude::*;

use crate::app::Route;
use crate::model::CardView;

#[component]
pub fn RecordCard(card: CardView, edit_to: Route, on_delete: EventHandler<()>) -> Element {
    rsx! {
        article { class: "record-card",
            header {
                div { style: "display:flex;align-items:center;gap:0.75rem;",
                    if let Some(initial) = card.avatar {
                        span { class: "avatar", "{initial}" }
                    }
                    div {
                        h3 { "{card.title}" }
                        if let Some(ref subtitle) = card.subtitle {
                            small { "{subtitle}" }
                        }
                    }
                }
                if let Some(ref badge) = card.badge {
                    span {
                        class: if badge.positive { "badge badge-ok" } else { "badge badge-err" },
                        "{badge.label}"
                    }
                }
            }

            if let Some(ref body) = card.body {
                p { "{body}" }
            }

            if !card.meta.is_empty() {
                div { class: "record-meta",
                    for (i, fact) in card.meta.iter().enumerate() {
                        span { key: "{i}", class: if i == 0 { "price" } else { "" }, "{fact}" }
                    }
                }
            }

            if !card.tags.is_empty() {
                div { class: "tags",
                    for tag in card.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }

            footer { class: "record-actions",
                Link { to: edit_to.clone(), class: "button".to_string(), "Edit" }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
