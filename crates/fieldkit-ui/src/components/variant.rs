//! Visual variant strategy.
//!
//! Two presets exist; a component resolves its [`Variant`] to a
//! [`VariantTheme`] once at construction and only that theme's classes are
//! consulted while rendering. No per-variant branching lives in render
//! bodies.

/// Visual/behavioral preset for a component.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Variant {
    /// Rounded fields, label above, error floated below the field.
    #[default]
    Classic,
    /// Compact checkout styling with inline labels.
    Visa,
}

/// CSS class strategy for one variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VariantTheme {
    pub wrapper: &'static str,
    pub label: &'static str,
    pub field: &'static str,
    pub error: &'static str,
    pub icon: &'static str,
}

const CLASSIC: VariantTheme = VariantTheme {
    wrapper: "fk-field",
    label: "fk-label",
    field: "fk-input",
    error: "fk-error",
    icon: "fk-icon",
};

const VISA: VariantTheme = VariantTheme {
    wrapper: "fk-field fk-field--visa",
    label: "fk-label fk-label--inline",
    field: "fk-input fk-input--compact",
    error: "fk-error fk-error--inline",
    icon: "fk-icon fk-icon--compact",
};

impl Variant {
    /// Resolve the class strategy for this variant.
    pub fn theme(&self) -> &'static VariantTheme {
        match self {
            Variant::Classic => &CLASSIC,
            Variant::Visa => &VISA,
        }
    }
}

/// Join a theme class with an optional caller override.
pub(crate) fn classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}
