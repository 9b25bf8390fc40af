//! User list and editor pages.

use dioxus::prelude::*;

use crate::app::components::{Layout, RecordForm, RecordList};
use crate::app::use_api;
use crate::model::FormMode;

#[component]
pub fn Users() -> Element {
    let api = use_api().users();

    rsx! {
        Layout { title: "Users".to_string(),
            RecordList { api }
        }
    }
}

#[component]
pub fn UserNew() -> Element {
    let api = use_api().users();

    rsx! {
        Layout { title: "New User".to_string(),
            RecordForm { api, mode: FormMode::Create }
        }
    }
}

#[component]
pub fn UserEdit(id: i64) -> Element {
    let api = use_api().users();

    rsx! {
        Layout { title: "Edit User".to_string(),
            RecordForm { key: "{id}", api, mode: FormMode::Edit(id) }
        }
    }
}
