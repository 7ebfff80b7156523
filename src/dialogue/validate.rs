//! ID format checks.

use std::sync::LazyLock;

use regex::Regex;

use super::model::IdType;

static SSN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{2}-\d{4}$").expect("SSN pattern is valid"));

/// Minimum length of a tribal ID.
pub const TRIBAL_MIN_LEN: usize = 5;

// Both patterns use Unicode `\d`, so any decimal digit counts.
static TRIBAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\d{{{TRIBAL_MIN_LEN},}}$")).expect("tribal pattern is valid")
});

/// Check `input` against the format for the selected ID type.
///
/// Without a selected type nothing validates.
pub fn validate_id(id_type: Option<IdType>, input: &str) -> bool {
    match id_type {
        Some(IdType::Ssn) => SSN_PATTERN.is_match(input),
        Some(IdType::Tribal) => TRIBAL_PATTERN.is_match(input),
        None => false,
    }
}
