//! Reusable form-input components.
//!
//! Each component binds to the host's form controller through a
//! [`FormHandle`] and reports validation failures as field errors. Visual
//! structure is shared: optional label (plain or caller-trusted markup),
//! the input element, an icon slot, and an error line underneath.

mod binding;
mod file;
mod input;
mod number;
mod phone;
mod select;
mod textarea;
mod variant;

pub use binding::*;
pub use file::*;
pub use input::*;
pub use number::*;
pub use phone::*;
pub use select::*;
pub use textarea::*;
pub use variant::*;

/// Generate a simple random ID for form elements
pub(crate) fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }
}
