//! Generic create/edit form driven by a resource's field schema.

use dioxus::prelude::*;
use tracing::{debug, info};

use super::field::FormField;
use crate::api::ResourceApi;
use crate::app::crud::{load_form, submit};
use crate::app::task::use_task_scope;
use crate::app::Routed;
use crate::model::{FieldSpec, FieldValue, FormMode};

#[derive(Props, Clone, PartialEq)]
pub struct RecordFormProps<R: Routed> {
    pub api: ResourceApi<R>,
    pub mode: FormMode,
}

/// Form for creating a record of kind `R` or editing an existing one.
///
/// In edit mode the record is fetched once on mount. A failed submit keeps
/// the entered values and shows the error above the form.
#[allow(non_snake_case)]
pub fn RecordForm<R: Routed>(props: RecordFormProps<R>) -> Element {
    let mode = props.mode;
    let scope = use_task_scope();
    let navigator = use_navigator();

    let mut values = use_signal(R::blank_form);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let mut loading = use_signal(|| mode.is_editing());

    let load_api = props.api.clone();
    let load_scope = scope.clone();
    use_effect(move || {
        let FormMode::Edit(id) = mode else {
            return;
        };
        let api = load_api.clone();
        let scope = load_scope.clone();
        spawn(async move {
            if let Some(result) = scope.run(load_form(&api, id)).await {
                match result {
                    Ok(form) => values.set(form),
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            }
        });
    });

    let submit_api = props.api.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        error.set(None);

        let api = submit_api.clone();
        let scope = scope.clone();
        let form = values();
        spawn(async move {
            match scope.run(submit(&api, mode, &form)).await {
                Some(Ok(record)) => {
                    info!("Saved {} {}", R::LABEL, record.id());
                    navigator.push(R::list_route());
                }
                Some(Err(err)) => {
                    debug!("Save of {} rejected: {}", R::LABEL, err);
                    error.set(Some(err.to_string()));
                    saving.set(false);
                }
                None => {}
            }
        });
    };

    let label = R::LABEL;
    let busy = saving() || loading();
    let heading = if mode.is_editing() {
        format!("Edit {label}")
    } else {
        format!("Create New {label}")
    };
    let submit_text = if saving() {
        "Saving...".to_string()
    } else if mode.is_editing() {
        format!("Update {label}")
    } else {
        format!("Create {label}")
    };

    let current = values.read();
    let inputs: Vec<(&'static str, FieldSpec, FieldValue)> = R::fields(mode)
        .into_iter()
        .map(|field| {
            let value = current.value_for(&field);
            (field.name, field, value)
        })
        .collect();

    if loading() {
        let what = label.to_lowercase();
        return rsx! {
            h1 { "{heading}" }
            article { aria_busy: "true", "Loading {what}..." }
        };
    }

    rsx! {
        h1 { "{heading}" }

        if let Some(message) = error() {
            div { class: "error-message", role: "alert", "{message}" }
        }

        form { onsubmit: on_submit,
            for (name, spec, value) in inputs {
                FormField {
                    key: "{name}",
                    spec,
                    value,
                    disabled: busy,
                    on_change: move |value: FieldValue| values.write().set(name, value),
                }
            }

            div { class: "form-actions",
                button { r#type: "submit", disabled: busy, "{submit_text}" }
                button {
                    r#type: "button",
                    class: "secondary",
                    disabled: busy,
                    onclick: move |_| {
                        navigator.push(R::list_route());
                    },
                    "Cancel"
                }
            }
        }
    }
}
