//! Phone-number binder state machine.
//!
//! Wraps an external telephone parsing/validation capability and keeps three
//! related form fields consistent: the national number, the dial-code prefix,
//! and the ISO country code. The binder owns the parser instance for the
//! lifetime of one bound input and must be released on teardown.

use serde::{Deserialize, Serialize};

use crate::form::{FieldError, FormController};

/// Message attached to the phone field for every validation failure.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

/// Outcome reported by the external phone-validation capability.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ValidationOutcome {
    Possible,
    InvalidCountryCode,
    TooShort,
    TooLong,
    NotANumber,
}

impl ValidationOutcome {
    /// Stable tag used as the error kind for programmatic matching.
    pub fn tag(&self) -> &'static str {
        match self {
            ValidationOutcome::Possible => "IS_POSSIBLE",
            ValidationOutcome::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            ValidationOutcome::TooShort => "TOO_SHORT",
            ValidationOutcome::TooLong => "TOO_LONG",
            ValidationOutcome::NotANumber => "NOT_A_NUMBER",
        }
    }
}

/// Country selection reported by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryData {
    /// Dial-code digits without the leading `+` (for example `84`).
    pub dial_code: String,
    /// Two-letter ISO country code (for example `vn`).
    pub iso2: String,
}

/// External telephone parsing/validation capability bound to one input.
pub trait PhoneParser {
    /// The number as currently understood by the parser, possibly still
    /// carrying the international prefix.
    fn number(&self) -> String;

    /// The currently selected country.
    fn selected_country(&self) -> CountryData;

    /// Replace the parser's number.
    fn set_number(&mut self, number: &str);

    /// Validate the current number.
    fn validation_outcome(&self) -> ValidationOutcome;

    /// Destroy the binding to the input. No parser method may be called
    /// afterwards.
    fn release(&mut self);
}

/// Locale/cookie capability used once at bind time to seed the default
/// country.
pub trait LocaleReader {
    fn read(&self, key: &str) -> Option<String>;
}

/// Options handed to the parser factory when a component binds.
///
/// The resolved initial country seeds the parser as its default selection
/// and as the sole preferred suggestion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Lowercase ISO country code, when one could be resolved.
    pub initial_country: Option<String>,
    /// Preferred suggestions; contains the initial country or nothing.
    pub preferred_countries: Vec<String>,
}

impl ParserOptions {
    /// Options for a resolved (or unresolved) initial country.
    pub fn for_country(country: Option<String>) -> Self {
        Self {
            preferred_countries: country.clone().into_iter().collect(),
            initial_country: country,
        }
    }
}

/// Names of the three form fields the binder keeps consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneFields {
    /// Field holding the national number.
    pub number: String,
    /// Field holding the dial-code prefix, formatted `+<digits>`.
    pub prefix: String,
    /// Field holding the ISO country code.
    pub country_code: String,
}

impl PhoneFields {
    /// Conventional companion field names for a given phone field.
    pub fn named(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            prefix: "phone_prefix".to_string(),
            country_code: "phone_country_code".to_string(),
        }
    }
}

/// Binder lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BinderState {
    #[default]
    Uninitialized,
    /// Parser bound, waiting for edits.
    Ready,
    /// An edit is being processed.
    Editing,
    /// Last commit passed validation.
    Validated,
    /// Last commit failed validation; the error is attached to the field.
    Invalid,
}

/// Keeps a phone input, its parser, and three form fields mutually
/// consistent.
///
/// Lifecycle: `Uninitialized -> Ready` on [`bind`](Self::bind), then every
/// change or blur runs [`commit`](Self::commit), which re-enters editing and
/// lands in `Validated` or `Invalid`. [`release`](Self::release) returns to
/// `Uninitialized` and destroys the parser; binding again releases any
/// previous parser first.
pub struct PhoneBinder<P: PhoneParser> {
    parser: Option<P>,
    fields: PhoneFields,
    state: BinderState,
    /// ISO code seen on a previous bind or commit, reused as the initial
    /// country when re-binding.
    detected_country: Option<String>,
}

impl<P: PhoneParser> PhoneBinder<P> {
    pub fn new(fields: PhoneFields) -> Self {
        Self {
            parser: None,
            fields,
            state: BinderState::Uninitialized,
            detected_country: None,
        }
    }

    pub fn state(&self) -> BinderState {
        self.state
    }

    pub fn fields(&self) -> &PhoneFields {
        &self.fields
    }

    /// Country the parser most recently reported, if any.
    pub fn detected_country(&self) -> Option<&str> {
        self.detected_country.as_deref()
    }

    /// Resolve the initial country for a new parser instance.
    ///
    /// Priority: explicit override, then the country detected on a previous
    /// bind, then the locale/cookie reader. First non-empty wins. Cookie
    /// values arrive uppercased and are lowercased to match parser
    /// expectations; the other two sources pass through as given.
    pub fn initial_country(
        &self,
        override_country: Option<&str>,
        locale: &dyn LocaleReader,
        cookie_key: &str,
    ) -> Option<String> {
        override_country
            .map(str::to_string)
            .filter(|c| !c.is_empty())
            .or_else(|| self.detected_country.clone().filter(|c| !c.is_empty()))
            .or_else(|| {
                locale
                    .read(cookie_key)
                    .filter(|c| !c.is_empty())
                    .map(|c| c.to_lowercase())
            })
    }

    /// Attach a parser instance that was constructed against the rendered
    /// input. Any previously bound parser is released first.
    ///
    /// If the form already holds a value for the phone field, it is pushed
    /// into the parser and all three fields are written so the companion
    /// fields never lag behind a prefilled number.
    pub fn bind(&mut self, mut parser: P, form: &dyn FormController) {
        self.release();

        if let Some(existing) = form.value(&self.fields.number).filter(|v| !v.is_empty()) {
            parser.set_number(&existing);
            let country = parser.selected_country();
            form.set_value(&self.fields.prefix, &format!("+{}", country.dial_code));
            form.set_value(&self.fields.country_code, &country.iso2);
            self.detected_country = Some(country.iso2);
        }

        self.parser = Some(parser);
        self.state = BinderState::Ready;
        tracing::debug!(field = %self.fields.number, "phone binder ready");
    }

    /// Process a change or blur on the bound input.
    ///
    /// Reads the number and country from the parser, strips a doubled dial
    /// prefix, writes the three fields, and validates. Returns the resulting
    /// state; calling without a bound parser is a no-op.
    pub fn commit(&mut self, form: &dyn FormController) -> BinderState {
        let Some(parser) = self.parser.as_mut() else {
            return self.state;
        };
        self.state = BinderState::Editing;

        let mut number = parser.number();
        let country = parser.selected_country();
        let dial = format!("+{}", country.dial_code);
        self.detected_country = Some(country.iso2.clone());

        // The parser can hand back a number still carrying the international
        // prefix; store the national part only, never `+84` twice.
        if let Some(national) = number.strip_prefix(&dial) {
            let national = national.to_string();
            parser.set_number(&national);
            number = national;
        }

        form.set_value(&self.fields.number, &number);
        form.set_value(&self.fields.prefix, &dial);
        form.set_value(&self.fields.country_code, &country.iso2);

        let outcome = parser.validation_outcome();
        if outcome != ValidationOutcome::Possible {
            tracing::debug!(field = %self.fields.number, tag = outcome.tag(), "phone validation failed");
            form.set_error(
                &self.fields.number,
                FieldError::new(outcome.tag(), INVALID_NUMBER_MESSAGE),
            );
            self.state = BinderState::Invalid;
            return self.state;
        }

        if !is_phone_pattern(&number) {
            form.set_error(
                &self.fields.number,
                FieldError::new(ValidationOutcome::NotANumber.tag(), INVALID_NUMBER_MESSAGE),
            );
            self.state = BinderState::Invalid;
            return self.state;
        }

        form.clear_error(&self.fields.number);
        self.state = BinderState::Validated;
        self.state
    }

    /// Destroy the parser binding. Safe to call repeatedly; after release no
    /// handler can reach the parser.
    pub fn release(&mut self) {
        if let Some(mut parser) = self.parser.take() {
            parser.release();
            tracing::debug!(field = %self.fields.number, "phone binder released");
        }
        self.state = BinderState::Uninitialized;
    }
}

impl<P: PhoneParser> Drop for PhoneBinder<P> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Admission guard for keypresses: only digits and `+` reach the input.
pub fn key_admissible(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit() || c == '+',
        _ => false,
    }
}

/// Admission guard for pasted content.
///
/// Internal whitespace is removed first; the remainder must be all digits
/// with at most one leading `+`. Returns the cleaned string when admitted,
/// `None` when the paste must be prevented.
pub fn admit_paste(text: &str) -> Option<String> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    is_phone_pattern(&cleaned).then_some(cleaned)
}

/// Digits with an optional single leading `+`.
fn is_phone_pattern(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::form::MemoryForm;

    /// Scripted stand-in for the external parsing capability.
    struct FakeParser {
        number: String,
        country: CountryData,
        outcome: ValidationOutcome,
        released: Rc<RefCell<bool>>,
    }

    impl FakeParser {
        fn new(number: &str, dial: &str, iso2: &str, outcome: ValidationOutcome) -> Self {
            Self {
                number: number.to_string(),
                country: CountryData {
                    dial_code: dial.to_string(),
                    iso2: iso2.to_string(),
                },
                outcome,
                released: Rc::new(RefCell::new(false)),
            }
        }
    }

    impl PhoneParser for FakeParser {
        fn number(&self) -> String {
            self.number.clone()
        }
        fn selected_country(&self) -> CountryData {
            self.country.clone()
        }
        fn set_number(&mut self, number: &str) {
            self.number = number.to_string();
        }
        fn validation_outcome(&self) -> ValidationOutcome {
            self.outcome
        }
        fn release(&mut self) {
            *self.released.borrow_mut() = true;
        }
    }

    struct MapLocale(HashMap<String, String>);

    impl LocaleReader for MapLocale {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    fn locale_with(key: &str, value: &str) -> MapLocale {
        MapLocale(HashMap::from([(key.to_string(), value.to_string())]))
    }

    #[test]
    fn strips_doubled_dial_prefix() {
        let form = MemoryForm::new();
        let parser = FakeParser::new("+84912345678", "84", "vn", ValidationOutcome::Possible);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);

        assert_eq!(binder.commit(&form), BinderState::Validated);
        assert_eq!(form.value("phone").as_deref(), Some("912345678"));
        assert_eq!(form.value("phone_prefix").as_deref(), Some("+84"));
        assert_eq!(form.value("phone_country_code").as_deref(), Some("vn"));
        assert_eq!(form.error("phone"), None);
    }

    #[test]
    fn number_without_prefix_stored_as_is() {
        let form = MemoryForm::new();
        let parser = FakeParser::new("912345678", "84", "vn", ValidationOutcome::Possible);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);

        binder.commit(&form);
        assert_eq!(form.value("phone").as_deref(), Some("912345678"));
    }

    #[test]
    fn too_short_reports_tagged_error() {
        let form = MemoryForm::new();
        let parser = FakeParser::new("12", "1", "us", ValidationOutcome::TooShort);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);

        assert_eq!(binder.commit(&form), BinderState::Invalid);
        let error = form.error("phone").unwrap();
        assert_eq!(error.kind, "TOO_SHORT");
        assert_eq!(error.message, INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn possible_but_malformed_tags_not_a_number() {
        let form = MemoryForm::new();
        // Parser is lenient, but the stored value fails the digits pattern.
        let parser = FakeParser::new("91a2", "84", "vn", ValidationOutcome::Possible);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);

        assert_eq!(binder.commit(&form), BinderState::Invalid);
        assert_eq!(form.error("phone").unwrap().kind, "NOT_A_NUMBER");
    }

    #[test]
    fn revalidation_clears_previous_error() {
        let form = MemoryForm::new();
        let parser = FakeParser::new("12", "84", "vn", ValidationOutcome::TooShort);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);
        binder.commit(&form);
        assert!(form.error("phone").is_some());

        if let Some(parser) = binder.parser.as_mut() {
            parser.set_number("912345678");
            parser.outcome = ValidationOutcome::Possible;
        }
        assert_eq!(binder.commit(&form), BinderState::Validated);
        assert_eq!(form.error("phone"), None);
    }

    #[test]
    fn bind_seeds_companion_fields_from_prefill() {
        let form = MemoryForm::new();
        form.set_value("phone", "+84912345678");
        let parser = FakeParser::new("", "84", "vn", ValidationOutcome::Possible);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);

        assert_eq!(form.value("phone_prefix").as_deref(), Some("+84"));
        assert_eq!(form.value("phone_country_code").as_deref(), Some("vn"));
        assert_eq!(binder.detected_country(), Some("vn"));
    }

    #[test]
    fn initial_country_priority() {
        let binder: PhoneBinder<FakeParser> = PhoneBinder::new(PhoneFields::named("phone"));
        let locale = locale_with("COUNTRY", "FR");

        // Override wins over everything and passes through as given.
        assert_eq!(
            binder.initial_country(Some("de"), &locale, "COUNTRY"),
            Some("de".to_string())
        );
        assert_eq!(
            binder.initial_country(Some("DE"), &locale, "COUNTRY"),
            Some("DE".to_string())
        );
        // Cookie used when nothing else is available, lowercased.
        assert_eq!(
            binder.initial_country(None, &locale, "COUNTRY"),
            Some("fr".to_string())
        );
        // Empty override is skipped.
        assert_eq!(
            binder.initial_country(Some(""), &locale, "COUNTRY"),
            Some("fr".to_string())
        );

        let empty = MapLocale(HashMap::new());
        assert_eq!(binder.initial_country(None, &empty, "COUNTRY"), None);
    }

    #[test]
    fn detected_country_outranks_cookie_on_rebind() {
        let form = MemoryForm::new();
        let parser = FakeParser::new("912345678", "84", "vn", ValidationOutcome::Possible);
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);
        binder.commit(&form);

        let locale = locale_with("COUNTRY", "FR");
        assert_eq!(
            binder.initial_country(None, &locale, "COUNTRY"),
            Some("vn".to_string())
        );
    }

    #[test]
    fn release_destroys_parser_and_resets_state() {
        let form = MemoryForm::new();
        let parser = FakeParser::new("912345678", "84", "vn", ValidationOutcome::Possible);
        let released = parser.released.clone();
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(parser, &form);

        binder.release();
        assert!(*released.borrow());
        assert_eq!(binder.state(), BinderState::Uninitialized);
        // Commit after release is a no-op.
        assert_eq!(binder.commit(&form), BinderState::Uninitialized);
    }

    #[test]
    fn rebind_releases_previous_parser() {
        let form = MemoryForm::new();
        let first = FakeParser::new("1", "1", "us", ValidationOutcome::Possible);
        let first_released = first.released.clone();
        let mut binder = PhoneBinder::new(PhoneFields::named("phone"));
        binder.bind(first, &form);

        let second = FakeParser::new("2", "1", "us", ValidationOutcome::Possible);
        binder.bind(second, &form);
        assert!(*first_released.borrow());
        assert_eq!(binder.state(), BinderState::Ready);
    }

    #[test]
    fn key_admission() {
        assert!(key_admissible("5"));
        assert!(key_admissible("+"));
        assert!(!key_admissible("a"));
        assert!(!key_admissible("-"));
        assert!(!key_admissible("Enter"));
    }

    #[test]
    fn paste_admission() {
        assert_eq!(admit_paste("12 34"), Some("1234".to_string()));
        assert_eq!(admit_paste("+84 912 345"), Some("+84912345".to_string()));
        assert_eq!(admit_paste("12a34"), None);
        assert_eq!(admit_paste("++123"), None);
        assert_eq!(admit_paste("+"), None);
        assert_eq!(admit_paste(""), None);
    }
}
