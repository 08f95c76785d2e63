//! File-selection guard for the multi-file picker.
//!
//! Each picked file is admitted or rejected synchronously: oversized files
//! and files outside the extension allow-list are rejected with an error on
//! the owning field, everything else is appended to the selection.

use thiserror::Error;

use crate::form::{FieldError, FormController};

/// Hard per-file size limit.
pub const MAX_FILE_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// Extensions the picker accepts. Matching is case-sensitive against this
/// lowercase list, so `photo.PNG` is rejected (see DESIGN.md, known
/// discrepancy).
pub const ALLOWED_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "bmp", "pdf", "txt", "doc", "docx", "xls", "xlsx",
];

/// File count advertised in the picker's help text. Not enforced by the
/// guard (see DESIGN.md, known discrepancy).
pub const ADVERTISED_FILE_LIMIT: usize = 3;

/// Why a file was rejected. The display text is the user-facing message.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("<= 20MB/file")]
    TooLarge,
    #[error("Your file is invalid.")]
    InvalidType,
}

impl SelectionError {
    /// Stable tag used as the error kind on the field.
    pub fn kind(&self) -> &'static str {
        match self {
            SelectionError::TooLarge => "FILE_TOO_LARGE",
            SelectionError::InvalidType => "FILE_TYPE_INVALID",
        }
    }
}

/// A file as reported by the platform picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// Extension of a file name: the substring after the last `.`, case kept as
/// typed. `None` when the name has no dot or nothing after it.
pub fn extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Accumulates admitted files for one picker field.
///
/// Admitted files are appended without a duplicate check and without a count
/// cap; the advertised limit lives in help text only.
pub struct FileGuard {
    field: String,
    selection: Vec<PickedFile>,
}

impl FileGuard {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            selection: Vec::new(),
        }
    }

    /// Files admitted so far, in pick order.
    pub fn selection(&self) -> &[PickedFile] {
        &self.selection
    }

    /// Admit or reject one picked file.
    ///
    /// Size is checked before type. On rejection the error is attached to
    /// the owning field; on admission the file is appended and any previous
    /// error on the field is cleared.
    pub fn admit(
        &mut self,
        file: PickedFile,
        form: &dyn FormController,
    ) -> Result<(), SelectionError> {
        let verdict = if file.size_bytes > MAX_FILE_SIZE_BYTES {
            Err(SelectionError::TooLarge)
        } else if !extension(&file.name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext)) {
            Err(SelectionError::InvalidType)
        } else {
            Ok(())
        };

        match verdict {
            Ok(()) => {
                form.clear_error(&self.field);
                self.selection.push(file);
                Ok(())
            }
            Err(error) => {
                tracing::debug!(field = %self.field, file = %file.name, kind = error.kind(), "file rejected");
                form.set_error(&self.field, FieldError::new(error.kind(), error.to_string()));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn oversized_file_rejected_with_size_error() {
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        let result = guard.admit(PickedFile::new("scan.png", 21 * MB), &form);
        assert_eq!(result, Err(SelectionError::TooLarge));
        let error = form.error("attachments").unwrap();
        assert_eq!(error.kind, "FILE_TOO_LARGE");
        assert_eq!(error.message, "<= 20MB/file");
        assert!(guard.selection().is_empty());
    }

    #[test]
    fn disallowed_extension_rejected_with_type_error() {
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        let result = guard.admit(PickedFile::new("setup.exe", MB), &form);
        assert_eq!(result, Err(SelectionError::InvalidType));
        assert_eq!(form.error("attachments").unwrap().kind, "FILE_TYPE_INVALID");
    }

    #[test]
    fn valid_file_appended_and_error_cleared() {
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        guard
            .admit(PickedFile::new("setup.exe", MB), &form)
            .unwrap_err();

        guard
            .admit(PickedFile::new("contract.pdf", MB), &form)
            .unwrap();
        assert_eq!(form.error("attachments"), None);
        assert_eq!(guard.selection().len(), 1);
        assert_eq!(guard.selection()[0].name, "contract.pdf");
    }

    #[test]
    fn size_checked_before_type() {
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        // Oversized and wrong type: the size error wins.
        let result = guard.admit(PickedFile::new("setup.exe", 30 * MB), &form);
        assert_eq!(result, Err(SelectionError::TooLarge));
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        guard
            .admit(PickedFile::new("big.pdf", MAX_FILE_SIZE_BYTES), &form)
            .unwrap();
        assert_eq!(guard.selection().len(), 1);
    }

    #[test]
    fn fourth_file_still_appended() {
        // Pins the known discrepancy: the 3-file limit is help text only.
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        for i in 0..4 {
            guard
                .admit(PickedFile::new(format!("doc{i}.pdf"), MB), &form)
                .unwrap();
        }
        assert_eq!(guard.selection().len(), 4);
        assert!(guard.selection().len() > ADVERTISED_FILE_LIMIT);
    }

    #[test]
    fn uppercase_extension_rejected() {
        // Pins the known discrepancy: matching is case-sensitive.
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        let result = guard.admit(PickedFile::new("photo.PNG", MB), &form);
        assert_eq!(result, Err(SelectionError::InvalidType));
    }

    #[test]
    fn duplicates_are_not_deduplicated() {
        let form = MemoryForm::new();
        let mut guard = FileGuard::new("attachments");
        guard.admit(PickedFile::new("a.pdf", MB), &form).unwrap();
        guard.admit(PickedFile::new("a.pdf", MB), &form).unwrap();
        assert_eq!(guard.selection().len(), 2);
    }

    #[test]
    fn extension_is_substring_after_last_dot() {
        assert_eq!(extension("a.tar.gz"), Some("gz"));
        assert_eq!(extension("noext"), None);
        assert_eq!(extension("trailing."), None);
        assert_eq!(extension("photo.PNG"), Some("PNG"));
    }
}
