//! Fieldkit core - form field logic with no UI dependency.
//!
//! This crate holds everything the Fieldkit components compute, free of any
//! rendering concern:
//!
//! - [`normalize`] - pure input normalizers (digit cleanup, whitespace
//!   collapsing)
//! - [`number`] - the clamped numeric field with a confirmation threshold
//! - [`phone`] - the phone-number binder state machine and its capability
//!   traits
//! - [`files`] - the file-selection guard for multi-file pickers
//! - [`form`] - the form-controller capability that owns field values and
//!   errors
//!
//! Components never own authoritative field values. They bind to a
//! [`FormController`] provided by the host application, push normalized
//! values into it, and attach or clear [`FieldError`]s on the fields they
//! manage. Everything here is synchronous and runs inside a single event
//! callback.

pub mod files;
pub mod form;
pub mod normalize;
pub mod number;
pub mod phone;

pub use files::{FileGuard, PickedFile, SelectionError, ALLOWED_EXTENSIONS, MAX_FILE_SIZE_BYTES};
pub use form::{FieldError, FormController, MemoryForm};
pub use normalize::{collapse_whitespace, normalize_numeric};
pub use number::NumberField;
pub use phone::{
    admit_paste, key_admissible, BinderState, CountryData, LocaleReader, ParserOptions,
    PhoneBinder, PhoneFields, PhoneParser, ValidationOutcome,
};
