//! Phone-number input component.
//!
//! Binds a [`PhoneBinder`] to the input: the parser capability is built at
//! mount with the resolved initial country, every change/blur commits the
//! binder, and teardown releases the parser so no handler outlives the
//! component. Keypresses and pastes pass the admission guards before they
//! reach the value.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use fieldkit_core::phone::{admit_paste, key_admissible};
use fieldkit_core::{LocaleReader, ParserOptions, PhoneBinder, PhoneFields, PhoneParser};

use super::{classes, rand_id, FormHandle, LocaleHandle, PhoneHandle, Variant};

/// Locale reader that knows nothing; used when the caller provides none.
struct NoLocale;

impl LocaleReader for NoLocale {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Admit or reject one input-event value.
///
/// Text the keydown guard could have produced — digits with at most one
/// leading `+`, including the bare `+` and the empty string mid-edit — is
/// accepted as typed. Anything else can only have arrived by paste and goes
/// through the paste guard, which strips whitespace and otherwise rejects.
fn admit_change(raw: &str) -> Option<String> {
    let typed = raw
        .strip_prefix('+')
        .unwrap_or(raw)
        .chars()
        .all(|c| c.is_ascii_digit());
    if typed {
        return Some(raw.to_string());
    }
    admit_paste(raw)
}

/// Properties for the [`PhoneInput`] component.
#[derive(Clone, PartialEq, Props)]
pub struct PhoneInputProps {
    /// Form controller owning the three bound fields.
    pub form: FormHandle,
    /// Field name for the national number.
    pub name: String,
    /// Field name for the dial-code prefix. Defaults to `phone_prefix`.
    #[props(default)]
    pub name_prefix: Option<String>,
    /// Field name for the ISO country code. Defaults to
    /// `phone_country_code`.
    #[props(default)]
    pub name_code: Option<String>,
    /// Factory constructing the parsing capability for this input,
    /// seeded with the resolved initial country.
    pub build_parser: Callback<ParserOptions, PhoneHandle>,
    /// Locale/cookie reader consulted for the default country.
    #[props(default)]
    pub locale: Option<LocaleHandle>,
    /// Key looked up in the locale reader.
    #[props(default = "COUNTRY".to_string())]
    pub cookie_key: String,
    /// Explicit initial-country override; wins over locale detection.
    #[props(default)]
    pub country: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub id: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub variant: Variant,
    /// Optional icon slot inside the field.
    #[props(default)]
    pub phone_icon: Option<Element>,
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
}

/// Phone input keeping national number, dial code, and country code
/// consistent in the bound form.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PhoneInput {
///         form: form.clone(),
///         name: "phone".to_string(),
///         build_parser: Callback::new(|options| PhoneHandle::new(MyParser::new(options))),
///         locale: Some(LocaleHandle::new(cookies)),
///         label: "Phone number".to_string(),
///     }
/// }
/// ```
#[component]
pub fn PhoneInput(props: PhoneInputProps) -> Element {
    let theme = props.variant.theme();
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("phone-{}", rand_id()));

    let prefix_name = props
        .name_prefix
        .clone()
        .unwrap_or_else(|| "phone_prefix".to_string());
    let fields = PhoneFields {
        number: props.name.clone(),
        prefix: prefix_name.clone(),
        country_code: props
            .name_code
            .clone()
            .unwrap_or_else(|| "phone_country_code".to_string()),
    };

    // Bind once per component instance; the parser lives exactly as long as
    // the input it was built for.
    let (binder, parser) = use_hook({
        let form = props.form.clone();
        let locale = props.locale.clone();
        let country = props.country.clone();
        let cookie_key = props.cookie_key.clone();
        let build_parser = props.build_parser;
        move || {
            let mut binder = PhoneBinder::new(fields);
            let initial = match &locale {
                Some(handle) => {
                    binder.initial_country(country.as_deref(), handle.reader(), &cookie_key)
                }
                None => binder.initial_country(country.as_deref(), &NoLocale, &cookie_key),
            };
            let parser = build_parser.call(ParserOptions::for_country(initial));
            binder.bind(parser.clone(), form.controller());
            (Rc::new(RefCell::new(binder)), parser)
        }
    });

    {
        let binder = binder.clone();
        use_drop(move || binder.borrow_mut().release());
    }

    let mut value = use_signal({
        let parser = parser.clone();
        move || parser.number()
    });
    let mut error = use_signal({
        let form = props.form.clone();
        let name = props.name.clone();
        move || form.error(&name)
    });

    let handle_keydown = move |evt: KeyboardEvent| {
        if let Key::Character(key) = evt.key() {
            if !key_admissible(&key) {
                evt.prevent_default();
            }
        }
    };

    let handle_input = {
        let mut parser = parser.clone();
        let input_id = id.clone();
        move |evt: FormEvent| match admit_change(&evt.value()) {
            Some(cleaned) => {
                parser.set_number(&cleaned);
                value.set(cleaned);
            }
            None => {
                tracing::debug!("paste rejected on phone input");
                let previous = value();
                // The signal already holds `previous`, so re-setting it
                // produces no DOM patch and the rejected paste would stay
                // visible in the webview until the next render. Push the
                // element back imperatively; `previous` is digits and `+`
                // only, safe to inline.
                document::eval(&format!(
                    "document.getElementById('{input_id}').value = '{previous}';"
                ));
                value.set(previous);
            }
        }
    };

    let commit = {
        let binder = binder.clone();
        let parser = parser.clone();
        let form = props.form.clone();
        let name = props.name.clone();
        move || {
            binder.borrow_mut().commit(form.controller());
            value.set(parser.number());
            error.set(form.error(&name));
        }
    };
    let commit_on_blur = {
        let commit = commit.clone();
        move |_: FocusEvent| commit()
    };
    let commit_on_change = move |_: FormEvent| commit();

    let dial_code = props.form.value(&prefix_name);
    let label_class = if props.required {
        format!(
            "{} fk-label--required",
            classes(theme.label, props.label_class.as_deref())
        )
    } else {
        classes(theme.label, props.label_class.as_deref())
    };

    rsx! {
        div { class: classes(theme.wrapper, props.class.as_deref()),
            if let Some(label) = &props.label {
                label { class: "{label_class}", r#for: "{id}", "{label}" }
            }
            div { class: "fk-phone-row",
                if let Some(dial) = &dial_code {
                    span { class: "fk-dial-code", "{dial}" }
                }
                input {
                    id: "{id}",
                    class: classes(theme.field, props.input_class.as_deref()),
                    r#type: "tel",
                    inputmode: "numeric",
                    maxlength: "20",
                    value: "{value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    required: props.required,
                    disabled: props.disabled,
                    oninput: handle_input,
                    onkeydown: handle_keydown,
                    onblur: commit_on_blur,
                    onchange: commit_on_change,
                }
                if let Some(icon) = &props.phone_icon {
                    div { class: classes(theme.icon, props.icon_class.as_deref()), {icon.clone()} }
                }
            }
            if let Some(error) = &error() {
                div { class: classes(theme.error, props.error_class.as_deref()), "{error.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_a_leading_plus_is_kept() {
        // Every prefix of an international number is admitted as typed,
        // starting with the bare `+` the keydown guard lets through.
        assert!(key_admissible("+"));
        assert_eq!(admit_change("+").as_deref(), Some("+"));
        assert_eq!(admit_change("+8").as_deref(), Some("+8"));
        assert_eq!(admit_change("+84").as_deref(), Some("+84"));
    }

    #[test]
    fn clearing_the_field_is_admitted() {
        assert_eq!(admit_change("").as_deref(), Some(""));
    }

    #[test]
    fn typed_digits_pass_without_rewriting() {
        assert_eq!(admit_change("912345678").as_deref(), Some("912345678"));
    }

    #[test]
    fn pasted_whitespace_is_stripped() {
        assert_eq!(admit_change("12 34").as_deref(), Some("1234"));
        assert_eq!(admit_change("+84 912 345").as_deref(), Some("+84912345"));
    }

    #[test]
    fn pasted_garbage_is_rejected() {
        assert_eq!(admit_change("12a34"), None);
        assert_eq!(admit_change("12+34"), None);
        assert_eq!(admit_change("++123"), None);
    }
}
