//! Fieldkit UI components for Dioxus.
//!
//! Form-input widgets that bind to a host-provided form controller:
//!
//! - [`TextInput`] - text/email/password/tel with normalization and a
//!   password visibility toggle
//! - [`NumberInput`] - clamped numeric input with a confirmation popup
//! - [`PhoneInput`] - phone number with country detection, bound through the
//!   phone binder state machine
//! - [`SelectInput`] - searchable single-select over flat or grouped options
//! - [`TextArea`] - multi-line text
//! - [`FileInput`] - multi-file picker with size/type guarding
//!
//! Components own only transient UI state (popup open, password visibility,
//! dropdown search text); authoritative field values and errors live in the
//! [`FormHandle`]'s controller. Every component takes a [`Variant`] selecting
//! one of two visual presets, resolved to a class strategy at construction.

pub mod components;

pub use components::*;
