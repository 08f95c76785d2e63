//! Clamped numeric field with an optional confirmation threshold.
//!
//! Backs the numeric input component: raw edits are reduced to digits,
//! clamped into the configured range, and large values can be gated behind
//! an explicit user confirmation before editing resumes.

use crate::normalize::normalize_numeric;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum Stage {
    #[default]
    Editing,
    /// Edits are suspended until the user confirms or cancels.
    AwaitingConfirmation,
}

/// State machine for a clamped numeric form field.
///
/// - `apply` accepts raw input, strips non-digits, and clamps the numeric
///   interpretation into `[min, max]`. An empty cleaned string is accepted
///   as the empty string, never as zero.
/// - When a `confirm_at` threshold is configured and the accepted value
///   reaches it, the field moves to an awaiting-confirmation stage that
///   rejects further edits until [`confirm`](Self::confirm) or
///   [`cancel`](Self::cancel) is called. Cancelling resets the value to the
///   configured minimum. A confirmed threshold never re-prompts.
#[derive(Clone, Debug, Default)]
pub struct NumberField {
    min: Option<u128>,
    max: Option<u128>,
    confirm_at: Option<u128>,
    value: String,
    stage: Stage,
    confirmed: bool,
}

impl NumberField {
    pub fn new(min: Option<u128>, max: Option<u128>, confirm_at: Option<u128>) -> Self {
        Self {
            min,
            max,
            confirm_at,
            ..Self::default()
        }
    }

    /// Accepted value as a decimal string. Empty until the first edit.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether edits are currently suspended behind the confirmation popup.
    pub fn awaiting_confirmation(&self) -> bool {
        self.stage == Stage::AwaitingConfirmation
    }

    /// Apply a raw edit. Returns the accepted value.
    ///
    /// While awaiting confirmation the edit is ignored and the current value
    /// is returned unchanged.
    pub fn apply(&mut self, raw: &str) -> &str {
        if self.stage == Stage::AwaitingConfirmation {
            return &self.value;
        }

        let cleaned: String = normalize_numeric(raw)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if cleaned.is_empty() {
            self.value.clear();
            return &self.value;
        }

        // Digit-only strings longer than u128 cannot be meaningfully clamped;
        // saturate to the configured maximum if one exists.
        let accepted = match cleaned.parse::<u128>() {
            Ok(n) => {
                let n = match self.min {
                    Some(min) if n < min => min,
                    _ => n,
                };
                let n = match self.max {
                    Some(max) if n > max => max,
                    _ => n,
                };
                n
            }
            Err(_) => match self.max {
                Some(max) => max,
                None => {
                    self.value = cleaned;
                    return &self.value;
                }
            },
        };

        self.value = accepted.to_string();

        if let Some(threshold) = self.confirm_at {
            if accepted >= threshold && !self.confirmed {
                tracing::debug!(value = %self.value, threshold, "numeric field awaiting confirmation");
                self.stage = Stage::AwaitingConfirmation;
            }
        }

        &self.value
    }

    /// User confirmed the large value; editing resumes and the threshold
    /// will not prompt again.
    pub fn confirm(&mut self) {
        self.confirmed = true;
        self.stage = Stage::Editing;
    }

    /// User dismissed the popup; the value resets to the configured minimum
    /// (empty when no minimum is set) and editing resumes.
    pub fn cancel(&mut self) {
        self.value = self.min.map(|m| m.to_string()).unwrap_or_default();
        self.stage = Stage::Editing;
    }

    /// Admission guard for keypresses on the numeric input: sign characters
    /// are rejected before they reach the value.
    pub fn key_admissible(key: &str) -> bool {
        key != "+" && key != "-"
    }
}
