//! A single labelled form input rendered from a [`FieldSpec`].

use dioxus::prelude::*;

use crate::model::{FieldKind, FieldSpec, FieldValue};

#[component]
pub fn FormField(
    spec: FieldSpec,
    value: FieldValue,
    disabled: bool,
    on_change: EventHandler<FieldValue>,
) -> Element {
    let name = spec.name;
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };
    let text = match &value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Flag(_) => String::new(),
    };

    match spec.kind {
        FieldKind::Checkbox => {
            let checked = matches!(value, FieldValue::Flag(true));
            rsx! {
                label { r#for: "{name}",
                    input {
                        r#type: "checkbox",
                        id: "{name}",
                        name: "{name}",
                        checked,
                        disabled,
                        onchange: move |evt: FormEvent| on_change.call(FieldValue::Flag(evt.checked())),
                    }
                    "{spec.label}"
                }
            }
        }
        FieldKind::TextArea => rsx! {
            label { r#for: "{name}", "{label}" }
            textarea {
                id: "{name}",
                name: "{name}",
                rows: "4",
                required: spec.required,
                placeholder: spec.placeholder,
                disabled,
                value: "{text}",
                oninput: move |evt: FormEvent| on_change.call(FieldValue::Text(evt.value())),
            }
        },
        FieldKind::Number { step, min } => rsx! {
            label { r#for: "{name}", "{label}" }
            input {
                r#type: "number",
                id: "{name}",
                name: "{name}",
                step,
                min,
                required: spec.required,
                placeholder: spec.placeholder,
                disabled,
                value: "{text}",
                oninput: move |evt: FormEvent| on_change.call(FieldValue::Text(evt.value())),
            }
        },
        kind => rsx! {
            label { r#for: "{name}", "{label}" }
            input {
                r#type: kind.input_type(),
                id: "{name}",
                name: "{name}",
                required: spec.required,
                placeholder: spec.placeholder,
                disabled,
                value: "{text}",
                oninput: move |evt: FormEvent| on_change.call(FieldValue::Text(evt.value())),
            }
        },
    }
}
