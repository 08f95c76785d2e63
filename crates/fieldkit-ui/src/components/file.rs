//! Multi-file picker component.
//!
//! Opens the native file dialog and runs every picked file through the
//! selection guard: oversized or disallowed files attach an error to the
//! field, admitted files accumulate and are reported to the caller. The
//! advertised 3-file limit lives in the help text only.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use fieldkit_core::files::ADVERTISED_FILE_LIMIT;
use fieldkit_core::{FileGuard, PickedFile, ALLOWED_EXTENSIONS};
use rfd::FileDialog;

use super::{classes, FormHandle, Variant};

/// Properties for the [`FileInput`] component.
#[derive(Clone, PartialEq, Props)]
pub struct FileInputProps {
    /// Form controller owning this field's error.
    pub form: FormHandle,
    /// Field name in the form controller.
    pub name: String,
    /// Plain-text label.
    #[props(default)]
    pub label: Option<String>,
    /// Caller-trusted markup label; see `TextInput::label_html`.
    #[props(default)]
    pub label_html: Option<String>,
    /// Caption on the picker button.
    #[props(default = "Choose files".to_string())]
    pub button_label: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub variant: Variant,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub label_class: Option<String>,
    #[props(default)]
    pub error_class: Option<String>,
    /// Called with the full admitted selection after every pick.
    pub on_files: EventHandler<Vec<PickedFile>>,
}

/// Multi-file picker with size/type guarding.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FileInput {
///         form: form.clone(),
///         name: "attachments".to_string(),
///         label: "Attachments".to_string(),
///         on_files: move |files: Vec<PickedFile>| selection.set(files),
///     }
/// }
/// ```
#[component]
pub fn FileInput(props: FileInputProps) -> Element {
    let theme = props.variant.theme();
    let guard = use_hook({
        let name = props.name.clone();
        move || Rc::new(RefCell::new(FileGuard::new(name)))
    });
    let mut selection = use_signal(Vec::<PickedFile>::new);
    let mut error = use_signal({
        let form = props.form.clone();
        let name = props.name.clone();
        move || form.error(&name)
    });

    let handle_pick = {
        let guard = guard.clone();
        let form = props.form.clone();
        let name = props.name.clone();
        let on_files = props.on_files;
        move |_| {
            let guard = guard.clone();
            let form = form.clone();
            let name = name.clone();
            spawn(async move {
                // Native dialog blocks; keep the UI responsive.
                let picked = tokio::task::spawn_blocking(move || {
                    FileDialog::new()
                        .add_filter("documents", &ALLOWED_EXTENSIONS)
                        .set_title("Select files")
                        .pick_files()
                })
                .await;

                let paths = match picked {
                    Ok(Some(paths)) => paths,
                    Ok(None) => return,
                    Err(e) => {
                        tracing::warn!("file dialog task failed: {e}");
                        return;
                    }
                };

                let mut guard = guard.borrow_mut();
                for path in paths {
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    let size = match std::fs::metadata(&path) {
                        Ok(meta) => meta.len(),
                        Err(e) => {
                            tracing::warn!(file = %file_name, "could not stat picked file: {e}");
                            continue;
                        }
                    };
                    // Rejections attach the field error; admissions clear it.
                    let _ = guard.admit(PickedFile::new(file_name, size), form.controller());
                }

                selection.set(guard.selection().to_vec());
                error.set(form.error(&name));
                on_files.call(guard.selection().to_vec());
            });
        }
    };

    let label_class = classes(theme.label, props.label_class.as_deref());
    let count = selection().len();

    rsx! {
        div { class: classes(theme.wrapper, props.class.as_deref()),
            if let Some(html) = &props.label_html {
                label { class: "{label_class}", dangerous_inner_html: "{html}" }
            } else if let Some(label) = &props.label {
                label { class: "{label_class}", "{label}" }
            }
            button {
                class: "fk-file-button",
                r#type: "button",
                disabled: props.disabled,
                onclick: handle_pick,
                "{props.button_label}"
            }
            div { class: "fk-file-help",
                "(*.jpg, *.jpeg, *.png, *.gif, *.bmp, *.pdf, *.txt, *.doc, *.docx, *.xls, *.xlsx, <= 20MB/file, limit {ADVERTISED_FILE_LIMIT}/{ADVERTISED_FILE_LIMIT} files)"
            }
            if count > 0 {
                ul { class: "fk-file-list",
                    for file in selection() {
                        li { key: "{file.name}-{file.size_bytes}", "{file.name}" }
                    }
                }
            }
            if let Some(error) = &error() {
                div { class: classes(theme.error, props.error_class.as_deref()), "{error.message}" }
            }
        }
    }
}
