use std::sync::Arc;

use dioxus::prelude::*;
use fieldkit_core::MemoryForm;
use fieldkit_ui::{
    FileInput, FormHandle, LocaleHandle, NumberInput, PhoneHandle, PhoneInput, SelectInput,
    SelectOption, TextArea, TextInput, Variant,
};

use crate::capabilities::{DigitParser, StaticLocale};
use crate::country_override;
use crate::theme::GLOBAL_STYLES;

/// Root demo component: one signup-style form exercising every Fieldkit
/// widget against a shared in-memory form controller.
#[component]
pub fn App() -> Element {
    let form = use_hook(|| FormHandle::new(Arc::new(MemoryForm::new())));
    let locale = use_hook(|| LocaleHandle::new(StaticLocale::with_country(country_override())));

    let build_parser = use_callback(|options| PhoneHandle::new(DigitParser::new(&options)));

    let countries = vec![
        SelectOption::new("us", "United States"),
        SelectOption::new("gb", "United Kingdom"),
        SelectOption::new("fr", "France"),
        SelectOption::new("de", "Germany"),
        SelectOption::new("vn", "Vietnam"),
        SelectOption::new("jp", "Japan"),
    ];

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "demo-form",
            h2 { "Fieldkit demo" }
            TextInput {
                form: form.clone(),
                name: "full_name".to_string(),
                label: "Full name".to_string(),
                placeholder: "Jane Doe".to_string(),
                required: true,
            }
            TextInput {
                form: form.clone(),
                name: "email".to_string(),
                input_type: "email".to_string(),
                label: "Email".to_string(),
                placeholder: "jane@example.com".to_string(),
            }
            TextInput {
                form: form.clone(),
                name: "password".to_string(),
                input_type: "password".to_string(),
                label: "Password".to_string(),
            }
            PhoneInput {
                form: form.clone(),
                name: "phone".to_string(),
                label: "Phone number".to_string(),
                placeholder: "912345678".to_string(),
                build_parser,
                locale: Some(locale.clone()),
            }
            NumberInput {
                form: form.clone(),
                name: "amount".to_string(),
                label: "Amount".to_string(),
                min: Some(10),
                max: Some(100_000),
                confirm_at: Some(10_000),
                popup_message: "You are about to enter |||value|||. Continue?".to_string(),
            }
            SelectInput {
                form: form.clone(),
                name: "country".to_string(),
                label: "Country".to_string(),
                placeholder: "Select a country".to_string(),
                options: countries,
                variant: Variant::Visa,
            }
            TextArea {
                form: form.clone(),
                name: "notes".to_string(),
                label: "Notes".to_string(),
                rows: 5,
            }
            FileInput {
                form: form.clone(),
                name: "attachments".to_string(),
                label: "Attachments".to_string(),
                button_label: "Upload documents".to_string(),
                on_files: move |files: Vec<fieldkit_core::PickedFile>| {
                    tracing::info!(count = files.len(), "selection updated");
                },
            }
        }
    }
}
