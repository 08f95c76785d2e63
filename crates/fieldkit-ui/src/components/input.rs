//! Text input component.
//!
//! Covers the text/email/password/tel types. Numeric-ish types run the digit
//! normalizer on change, plain text collapses doubled spaces. Password
//! fields get a local visibility toggle; email and full-name flavors accept
//! icon slots.

use dioxus::prelude::*;
use fieldkit_core::{collapse_whitespace, normalize_numeric};

use super::{classes, rand_id, FormHandle, Variant};

/// Properties for the [`TextInput`] component.
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// Form controller owning this field's value and error.
    pub form: FormHandle,
    /// Field name in the form controller.
    pub name: String,
    /// Input type: `text`, `email`, `password`, `number`, or `tel`.
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Plain-text label. Escaped by the renderer; the safe default.
    #[props(default)]
    pub label: Option<String>,
    /// Caller-trusted markup label, rendered as raw HTML.
    ///
    /// This is an explicit injection capability: the string goes into the
    /// page unescaped, so it must never contain untrusted content. Prefer
    /// `label` unless markup is genuinely required.
    #[props(default)]
    pub label_html: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Optional ID for label association.
    #[props(default)]
    pub id: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Visual preset.
    #[props(default)]
    pub variant: Variant,
    /// Tooltip rendered next to the label.
    #[props(default)]
    pub tooltip: Option<Element>,
    /// Icon slot shown for email fields.
    #[props(default)]
    pub email_icon: Option<Element>,
    /// Icon slot shown for full-name fields.
    #[props(default)]
    pub name_icon: Option<Element>,
    /// Icon shown while a password field is revealed.
    #[props(default)]
    pub view_icon: Option<Element>,
    /// Icon shown while a password field is hidden.
    #[props(default)]
    pub hide_icon: Option<Element>,
    /// Class overrides per sub-element.
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub input_class: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default)]
    pub error_class: Option<String>,
    #[props(default)]
    pub icon_class: Option<String>,
    /// Called with the normalized value after every accepted change.
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
}

/// Single-line input bound to a form-controller field.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextInput {
///         form: form.clone(),
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         label: "Email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let theme = props.variant.theme();
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let mut visible = use_signal(|| false);
    let mut value = use_signal({
        let form = props.form.clone();
        let name = props.name.clone();
        move || form.value(&name).unwrap_or_default()
    });

    let numeric = matches!(props.input_type.as_str(), "number" | "tel");
    let is_password = props.input_type == "password";
    let effective_type = if is_password && visible() {
        "text".to_string()
    } else {
        props.input_type.clone()
    };

    let form = props.form.clone();
    let name = props.name.clone();
    let on_change = props.on_change;
    let handle_input = move |evt: FormEvent| {
        let raw = evt.value();
        let normalized = if numeric {
            normalize_numeric(&raw)
        } else {
            collapse_whitespace(&raw)
        };
        value.set(normalized.clone());
        form.set_value(&name, &normalized);
        if let Some(handler) = &on_change {
            handler.call(normalized);
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
            if let Some(html) = &props.label_html {
                label {
                    class: "{label_class}",
                    r#for: "{id}",
                    dangerous_inner_html: "{html}",
                }
            } else if let Some(label) = &props.label {
                label { class: "{label_class}", r#for: "{id}", "{label}" }
            }
            if let Some(tooltip) = &props.tooltip {
                div { class: "fk-tooltip", {tooltip.clone()} }
            }
            input {
                id: "{id}",
                class: classes(theme.field, props.input_class.as_deref()),
                r#type: "{effective_type}",
                value: "{value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: handle_input,
            }
            if props.input_type == "email" {
                if let Some(icon) = &props.email_icon {
                    div { class: classes(theme.icon, props.icon_class.as_deref()), {icon.clone()} }
                }
            }
            if let Some(icon) = &props.name_icon {
                div { class: classes(theme.icon, props.icon_class.as_deref()), {icon.clone()} }
            }
            if is_password {
                div {
                    class: classes(theme.icon, props.icon_class.as_deref()),
                    onclick: move |_| {
                        let now = !visible();
                        visible.set(now);
                    },
                    if visible() {
                        if let Some(icon) = &props.view_icon {
                            {icon.clone()}
                        } else {
                            span { "hide" }
                        }
                    } else {
                        if let Some(icon) = &props.hide_icon {
                            {icon.clone()}
                        } else {
                            span { "show" }
                        }
                    }
                }
            }
            if let Some(error) = &error {
                div { class: classes(theme.error, props.error_class.as_deref()), "{error.message}" }
            }
        }
    }
}
