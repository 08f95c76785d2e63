//! Numeric input with clamping and a confirmation popup.
//!
//! Wraps [`NumberField`]: edits are reduced to digits and clamped into the
//! configured range; once the value reaches the confirmation threshold a
//! modal popup suspends editing until the user confirms or cancels.

use dioxus::prelude::*;
use fieldkit_core::NumberField;

use super::{classes, rand_id, FormHandle, Variant};

/// Placeholder interpolated with the current value in the popup message.
const VALUE_PLACEHOLDER: &str = "|||value|||";

/// Properties for the [`NumberInput`] component.
#[derive(Clone, PartialEq, Props)]
pub struct NumberInputProps {
    /// Form controller owning this field's value and error.
    pub form: FormHandle,
    /// Field name in the form controller.
    pub name: String,
    #[props(default)]
    pub label: Option<String>,
    /// Caller-trusted markup label; see `TextInput::label_html`.
    #[props(default)]
    pub label_html: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub id: Option<String>,
    /// Lower clamp bound; cancel resets to this value.
    #[props(default)]
    pub min: Option<u128>,
    /// Upper clamp bound.
    #[props(default)]
    pub max: Option<u128>,
    /// Threshold at or above which the confirmation popup opens.
    #[props(default)]
    pub confirm_at: Option<u128>,
    /// Popup message; `|||value|||` is replaced with the current value.
    /// No message means no popup even when a threshold is configured.
    #[props(default)]
    pub popup_message: Option<String>,
    #[props(default = "Confirm".to_string())]
    pub confirm_label: String,
    #[props(default = "Cancel".to_string())]
    pub cancel_label: String,
    /// Render-slots overriding the default popup buttons and close icon.
    #[props(default)]
    pub confirm_button: Option<Element>,
    #[props(default)]
    pub cancel_button: Option<Element>,
    #[props(default)]
    pub close_icon: Option<Element>,
    #[props(default)]
    pub tooltip: Option<Element>,
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
    #[props(default)]
    pub popup_class: Option<String>,
    /// Called with the accepted value after every edit.
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
}

/// Clamped numeric input bound to a form-controller field.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NumberInput {
///         form: form.clone(),
///         name: "amount".to_string(),
///         min: Some(10),
///         max: Some(100_000),
///         confirm_at: Some(10_000),
///         popup_message: "Send |||value|||?".to_string(),
///     }
/// }
/// ```
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let theme = props.variant.theme();
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("number-{}", rand_id()));
    let has_popup = props.popup_message.is_some();
    let mut field = use_signal({
        let (min, max) = (props.min, props.max);
        let confirm_at = if has_popup { props.confirm_at } else { None };
        move || NumberField::new(min, max, confirm_at)
    });

    let form = props.form.clone();
    let name = props.name.clone();
    let on_change = props.on_change;
    let handle_input = move |evt: FormEvent| {
        let accepted = field.write().apply(&evt.value()).to_string();
        form.set_value(&name, &accepted);
        if let Some(handler) = &on_change {
            handler.call(accepted);
        }
    };

    // Sign keys never reach the value.
    let handle_keydown = move |evt: KeyboardEvent| {
        if let Key::Character(key) = evt.key() {
            if !NumberField::key_admissible(&key) {
                evt.prevent_default();
            }
        }
    };

    let popup_open = field.read().awaiting_confirmation();
    let value = field.read().value().to_string();

    let form_for_cancel = props.form.clone();
    let name_for_cancel = props.name.clone();
    let close_popup = move |_: MouseEvent| {
        let mut field = field.write();
        field.cancel();
        form_for_cancel.set_value(&name_for_cancel, field.value());
    };
    let confirm_popup = move |_: MouseEvent| field.write().confirm();

    let label_class = if props.required {
        format!(
            "{} fk-label--required",
            classes(theme.label, props.label_class.as_deref())
        )
    } else {
        classes(theme.label, props.label_class.as_deref())
    };
    let error = props.form.error(&props.name);
    let popup_text = props
        .popup_message
        .as_deref()
        .unwrap_or_default()
        .replace(VALUE_PLACEHOLDER, &value);

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
                r#type: "number",
                inputmode: "numeric",
                value: "{value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                // Editing is suspended while the popup is open.
                disabled: props.disabled || popup_open,
                oninput: handle_input,
                onkeydown: handle_keydown,
            }
            if let Some(error) = &error {
                div { class: classes(theme.error, props.error_class.as_deref()), "{error.message}" }
            }
            if popup_open {
                div { class: "fk-popup-overlay",
                    div { class: classes("fk-popup", props.popup_class.as_deref()),
                        div { class: "fk-popup-close", onclick: close_popup.clone(),
                            if let Some(icon) = &props.close_icon {
                                {icon.clone()}
                            } else {
                                span { "\u{00d7}" }
                            }
                        }
                        p { class: "fk-popup-message", "{popup_text}" }
                        div { class: "fk-popup-actions",
                            if let Some(slot) = &props.cancel_button {
                                div { onclick: close_popup.clone(), {slot.clone()} }
                            } else {
                                button { class: "fk-popup-button", onclick: close_popup.clone(),
                                    "{props.cancel_label}"
                                }
                            }
                            if let Some(slot) = &props.confirm_button {
                                div { onclick: confirm_popup, {slot.clone()} }
                            } else {
                                button { class: "fk-popup-button fk-popup-button--primary",
                                    onclick: confirm_popup,
                                    "{props.confirm_label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
