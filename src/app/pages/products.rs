//! Product list and editor pages.

use dioxus::prelude::*;

use crate::app::components::{Layout, RecordForm, RecordList};
use crate::app::use_api;
use crate::model::FormMode;

#[component]
pub fn Products() -> Element {
    let api = use_api().products();

    rsx! {
        Layout { title: "Products".to_string(),
            RecordList { api }
        }
    }
}

#[component]
pub fn ProductNew() -> Element {
    let api = use_api().products();

    rsx! {
        Layout { title: "New Product".to_string(),
            RecordForm { api, mode: FormMode::Create }
        }
    }
}

#[component]
pub fn ProductEdit(id: i64) -> Element {
    let api = use_api().products();

    rsx! {
        Layout { title: "Edit Product".to_string(),
            // Fresh form state when navigating between records
            RecordForm { key: "{id}", api, mode: FormMode::Edit(id) }
        }
    }
}
