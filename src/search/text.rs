//! Free-text matching across every field of a record.

use crate::models::Record;

/// Whether the free-text stage should run at all for `needle`.
///
/// Blank needles match everything, so callers skip the stage.
pub fn is_blank(needle: &str) -> bool {
    needle.trim().is_empty()
}

/// Case-insensitive substring match of `needle` against the string
/// form of every field value.
pub fn matches(record: &Record, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    record
        .values()
        .any(|value| value.to_text().to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Value;

    fn record() -> Record {
        Record::new(vec![
            ("id".to_string(), Value::Int(7)),
            ("department".to_string(), "Engineering".into()),
            ("isActive".to_string(), Value::Bool(true)),
            ("notes".to_string(), Value::Null),
        ])
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        assert!(matches(&record(), "ENGINEER"));
        assert!(matches(&record(), "neer"));
        assert!(!matches(&record(), "marketing"));
    }

    #[test]
    fn non_string_values_match_on_their_string_form() {
        assert!(matches(&record(), "7"));
        assert!(matches(&record(), "TRUE"));
    }

    #[test]
    fn whitespace_only_needles_are_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_needle() {
        assert!(!matches(&record(), " engineering "));
    }
}
