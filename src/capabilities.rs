//! Demo implementations of the injected capabilities.
//!
//! A real host wires these to its form layer, a telephone library, and its
//! cookie/locale store. The demo keeps everything local: an offline phone
//! parser over a small country table and a locale reader seeded from the
//! command line.

use std::collections::HashMap;

use fieldkit_core::phone::{CountryData, ParserOptions, PhoneParser, ValidationOutcome};
use fieldkit_core::LocaleReader;

/// `(iso2, dial code, min national digits, max national digits)`
const COUNTRIES: &[(&str, &str, usize, usize)] = &[
    ("us", "1", 10, 10),
    ("gb", "44", 10, 10),
    ("fr", "33", 9, 9),
    ("de", "49", 10, 11),
    ("vn", "84", 9, 10),
    ("jp", "81", 10, 10),
];

const DEFAULT_COUNTRY: usize = 0;

fn country_data(index: usize) -> CountryData {
    let (iso2, dial, _, _) = COUNTRIES[index];
    CountryData {
        dial_code: dial.to_string(),
        iso2: iso2.to_string(),
    }
}

/// Offline phone parser over the country table above.
///
/// Selection follows the number: a `+` prefix matching a known dial code
/// switches the selected country, as the real telephone libraries do.
pub struct DigitParser {
    number: String,
    selected: usize,
    released: bool,
}

impl DigitParser {
    pub fn new(options: &ParserOptions) -> Self {
        let selected = options
            .initial_country
            .as_deref()
            .and_then(|iso| COUNTRIES.iter().position(|(i, ..)| *i == iso))
            .unwrap_or(DEFAULT_COUNTRY);
        Self {
            number: String::new(),
            selected,
            released: false,
        }
    }

    fn national_digits(&self) -> Option<&str> {
        match self.number.strip_prefix('+') {
            Some(rest) => {
                let (_, dial, _, _) = COUNTRIES[self.selected];
                rest.strip_prefix(dial)
            }
            None => Some(&self.number),
        }
    }
}

impl PhoneParser for DigitParser {
    fn number(&self) -> String {
        debug_assert!(!self.released);
        self.number.clone()
    }

    fn selected_country(&self) -> CountryData {
        country_data(self.selected)
    }

    fn set_number(&mut self, number: &str) {
        debug_assert!(!self.released);
        self.number = number.to_string();
        if let Some(rest) = number.strip_prefix('+') {
            // Longest dial-code match wins.
            let mut best: Option<(usize, usize)> = None;
            for (index, (_, dial, _, _)) in COUNTRIES.iter().enumerate() {
                if rest.starts_with(dial) {
                    match best {
                        Some((_, len)) if dial.len() <= len => {}
                        _ => best = Some((index, dial.len())),
                    }
                }
            }
            if let Some((index, _)) = best {
                self.selected = index;
            }
        }
    }

    fn validation_outcome(&self) -> ValidationOutcome {
        if self.number.is_empty() {
            return ValidationOutcome::NotANumber;
        }
        if self.number.starts_with('+') && self.national_digits().is_none() {
            return ValidationOutcome::InvalidCountryCode;
        }
        let digits = self.national_digits().unwrap_or_default();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return ValidationOutcome::NotANumber;
        }
        let (_, _, min, max) = COUNTRIES[self.selected];
        if digits.len() < min {
            ValidationOutcome::TooShort
        } else if digits.len() > max {
            ValidationOutcome::TooLong
        } else {
            ValidationOutcome::Possible
        }
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// Locale reader over a fixed key/value map.
pub struct StaticLocale(HashMap<String, String>);

impl StaticLocale {
    pub fn with_country(country: Option<String>) -> Self {
        let mut map = HashMap::new();
        if let Some(country) = country {
            map.insert("COUNTRY".to_string(), country);
        }
        Self(map)
    }
}

impl LocaleReader for StaticLocale {
    fn read(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser_for(country: &str) -> DigitParser {
        DigitParser::new(&ParserOptions::for_country(Some(country.to_string())))
    }

    #[test]
    fn validates_lengths_for_selected_country() {
        let mut parser = parser_for("vn");
        parser.set_number("912345678");
        assert_eq!(parser.validation_outcome(), ValidationOutcome::Possible);
        parser.set_number("9123");
        assert_eq!(parser.validation_outcome(), ValidationOutcome::TooShort);
        parser.set_number("912345678901");
        assert_eq!(parser.validation_outcome(), ValidationOutcome::TooLong);
    }

    #[test]
    fn plus_prefix_switches_country() {
        let mut parser = parser_for("us");
        parser.set_number("+84912345678");
        assert_eq!(parser.selected_country().iso2, "vn");
        assert_eq!(parser.validation_outcome(), ValidationOutcome::Possible);
    }

    #[test]
    fn unknown_dial_code_is_invalid_country() {
        let mut parser = parser_for("us");
        parser.set_number("+999123456");
        // 9 isn't in the table; +9... matches nothing.
        assert_eq!(
            parser.validation_outcome(),
            ValidationOutcome::InvalidCountryCode
        );
    }

    #[test]
    fn unknown_initial_country_falls_back_to_default() {
        let parser = parser_for("zz");
        assert_eq!(parser.selected_country().iso2, "us");
    }
}
