//! Multi-line text input.

use dioxus::prelude::*;

use super::{classes, rand_id, FormHandle, Variant};

/// Properties for the [`TextArea`] component.
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Form controller owning this field's value and error.
    pub form: FormHandle,
    /// Field name in the form controller.
    pub name: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub id: Option<String>,
    /// Number of visible rows.
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub variant: Variant,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub input_class: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default)]
    pub error_class: Option<String>,
    /// Called with the value after every change.
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
}

/// Textarea bound to a form-controller field.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let theme = props.variant.theme();
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("textarea-{}", rand_id()));
    let mut value = use_signal({
        let form = props.form.clone();
        let name = props.name.clone();
        move || form.value(&name).unwrap_or_default()
    });

    let form = props.form.clone();
    let name = props.name.clone();
    let on_change = props.on_change;
    let handle_input = move |evt: FormEvent| {
        let raw = evt.value();
        value.set(raw.clone());
        form.set_value(&name, &raw);
        if let Some(handler) = &on_change {
            handler.call(raw);
        }
    };

    let label_class = if props.required {
        format!(
            "{} fk-label--required",
            classes(theme.label, props.label_class.as_deref())
        )
    } else {
        classes(theme.label, props.label_class.as_deref())
    };
    let error = props.form.error(&props.name);

    rsx! {
        div { class: classes(theme.wrapper, props.class.as_deref()),
            if let Some(label) = &props.label {
                label { class: "{label_class}", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: classes(theme.field, props.input_class.as_deref()),
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{value}",
                oninput: handle_input,
            }
            if let Some(error) = &error {
                div { class: classes(theme.error, props.error_class.as_deref()), "{error.message}" }
            }
        }
    }
}
