//! Searchable single-select component.
//!
//! Renders flat or grouped options with an optional search box. Dropdown
//! visibility and the search query are component-local state; the selected
//! value is written to the bound form field and handed to the caller's
//! `on_select`.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::{classes, rand_id, FormHandle, Variant};

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub value: String,
    pub label: String,
    /// Icon source rendered before the label, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Count badge rendered after the label, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A labelled group of options.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

/// Case-insensitive substring match on the label; the default filter.
fn label_matches(option: &SelectOption, query: &str) -> bool {
    query.is_empty() || option.label.to_lowercase().contains(&query.to_lowercase())
}

/// Properties for the [`SelectInput`] component.
#[derive(Clone, PartialEq, Props)]
pub struct SelectInputProps {
    /// Form controller owning this field's value and error.
    pub form: FormHandle,
    /// Field name in the form controller.
    pub name: String,
    /// Flat options. Ignored when `groups` is set.
    #[props(default)]
    pub options: Vec<SelectOption>,
    /// Grouped options; takes precedence over `options`.
    #[props(default)]
    pub groups: Option<Vec<SelectGroup>>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub id: Option<String>,
    #[props(default = true)]
    pub searchable: bool,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub variant: Variant,
    /// Custom option filter; receives the option and the current query.
    /// Defaults to a case-insensitive label match.
    #[props(default)]
    pub filter: Option<Callback<(SelectOption, String), bool>>,
    /// Custom renderer for group headers.
    #[props(default)]
    pub format_group_label: Option<Callback<String, Element>>,
    /// Icon rendered at the start of the control.
    #[props(default)]
    pub start_icon: Option<Element>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default)]
    pub error_class: Option<String>,
    /// Called with the chosen option.
    #[props(default)]
    pub on_select: Option<EventHandler<SelectOption>>,
}

/// Searchable select bound to a form-controller field.
#[component]
pub fn SelectInput(props: SelectInputProps) -> Element {
    let theme = props.variant.theme();
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("select-{}", rand_id()));
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut selected = use_signal({
        let form = props.form.clone();
        let name = props.name.clone();
        move || form.value(&name).unwrap_or_default()
    });

    let groups: Vec<SelectGroup> = match &props.groups {
        Some(groups) => groups.clone(),
        None => vec![SelectGroup {
            label: String::new(),
            options: props.options.clone(),
        }],
    };

    let filter = props.filter;
    let keep = move |option: &SelectOption, q: &str| match filter {
        Some(callback) => callback.call((option.clone(), q.to_string())),
        None => label_matches(option, q),
    };

    let form = props.form.clone();
    let name = props.name.clone();
    let on_select = props.on_select;
    let choose = move |option: SelectOption| {
        form.set_value(&name, &option.value);
        form.clear_error(&name);
        selected.set(option.label.clone());
        open.set(false);
        query.set(String::new());
        if let Some(handler) = &on_select {
            handler.call(option);
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
    let display = if selected().is_empty() {
        props.placeholder.clone().unwrap_or_default()
    } else {
        selected()
    };
    let q = query();

    rsx! {
        div { class: classes(theme.wrapper, props.class.as_deref()),
            if let Some(label) = &props.label {
                label { class: "{label_class}", r#for: "{id}", "{label}" }
            }
            div {
                id: "{id}",
                class: if props.disabled { "fk-select fk-select--disabled" } else { "fk-select" },
                onclick: move |_| {
                    if !props.disabled {
                        let now = !open();
                        open.set(now);
                    }
                },
                if let Some(icon) = &props.start_icon {
                    span { class: "fk-select-start-icon", {icon.clone()} }
                }
                span {
                    class: if selected().is_empty() { "fk-select-value fk-select-value--placeholder" } else { "fk-select-value" },
                    "{display}"
                }
                span { class: "fk-select-caret", "\u{25be}" }
            }
            if open() && !props.disabled {
                div { class: "fk-select-menu",
                    if props.searchable {
                        input {
                            class: "fk-select-search",
                            r#type: "search",
                            value: "{q}",
                            placeholder: "Search...",
                            oninput: move |evt| query.set(evt.value()),
                        }
                    }
                    if props.loading {
                        div { class: "fk-select-loading", "Loading..." }
                    } else {
                        for group in groups.iter() {
                            if !group.label.is_empty() {
                                div { class: "fk-select-group",
                                    if let Some(format) = &props.format_group_label {
                                        {format.call(group.label.clone())}
                                    } else {
                                        "{group.label}"
                                    }
                                }
                            }
                            for option in group.options.iter().filter(|o| keep(o, &q)) {
                                div {
                                    key: "{option.value}",
                                    class: "fk-select-option",
                                    onclick: {
                                        let mut choose = choose.clone();
                                        let option = option.clone();
                                        move |_| choose(option.clone())
                                    },
                                    if let Some(icon) = &option.icon {
                                        img { class: "fk-select-option-icon", src: "{icon}" }
                                    }
                                    span { "{option.label}" }
                                    if let Some(count) = option.state_count {
                                        span { class: "fk-select-count", "{count}" }
                                    }
                                }
                            }
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
