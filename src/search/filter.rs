//! Attribute filter evaluation.
//!
//! Each field kind owns a closed operator set. Operator names that a
//! kind does not recognise parse to `Unknown`, and every kind treats
//! `Unknown` as a match. That permissive fallback lives in exactly one
//! match arm per kind so it is easy to find.
//!
//! Evaluation never fails: unknown fields and values that cannot be
//! coerced to the field's kind simply do not match.

use time::OffsetDateTime;

use crate::models::{Combinator, FieldKind, Filter, Record, Value};
use crate::registry::FieldRegistry;
use crate::search::datetime::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringOp {
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    Unknown,
}

impl StringOp {
    fn parse(op: &str) -> Self {
        match op {
            "contains" => StringOp::Contains,
            "not_contains" => StringOp::NotContains,
            "equals" => StringOp::Equals,
            "not_equals" => StringOp::NotEquals,
            "starts_with" => StringOp::StartsWith,
            "ends_with" => StringOp::EndsWith,
            "is_empty" => StringOp::IsEmpty,
            "is_not_empty" => StringOp::IsNotEmpty,
            _ => StringOp::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberOp {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,
    IsEmpty,
    IsNotEmpty,
    Unknown,
}

impl NumberOp {
    fn parse(op: &str) -> Self {
        match op {
            "equals" => NumberOp::Equals,
            "not_equals" => NumberOp::NotEquals,
            "greater_than" => NumberOp::GreaterThan,
            "greater_than_or_equal" => NumberOp::GreaterThanOrEqual,
            "less_than" => NumberOp::LessThan,
            "less_than_or_equal" => NumberOp::LessThanOrEqual,
            "between" => NumberOp::Between,
            "is_empty" => NumberOp::IsEmpty,
            "is_not_empty" => NumberOp::IsNotEmpty,
            _ => NumberOp::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOp {
    Before,
    After,
    BeforeOrEquals,
    AfterOrEquals,
    Equals,
    NotEquals,
    Between,
    IsEmpty,
    IsNotEmpty,
    Unknown,
}

impl DateOp {
    fn parse(op: &str) -> Self {
        match op {
            "before" => DateOp::Before,
            "after" => DateOp::After,
            "before_or_equals" => DateOp::BeforeOrEquals,
            "after_or_equals" => DateOp::AfterOrEquals,
            "equals" => DateOp::Equals,
            "not_equals" => DateOp::NotEquals,
            "between" => DateOp::Between,
            "is_empty" => DateOp::IsEmpty,
            "is_not_empty" => DateOp::IsNotEmpty,
            _ => DateOp::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoolOp {
    Equals,
    NotEquals,
    Unknown,
}

impl BoolOp {
    fn parse(op: &str) -> Self {
        match op {
            "equals" => BoolOp::Equals,
            "not_equals" => BoolOp::NotEquals,
            _ => BoolOp::Unknown,
        }
    }
}

/// Whether `record` satisfies a single filter.
///
/// A field that is not in the registry never matches. A registered
/// field missing from the record is treated as null.
pub fn evaluate(registry: &FieldRegistry, record: &Record, filter: &Filter) -> bool {
    let Some(kind) = registry.kind_of(&filter.field) else {
        return false;
    };

    let raw = record.get(&filter.field).unwrap_or(&Value::Null);
    let operator = filter.operator.as_str();

    match kind {
        FieldKind::String => filter_string(raw, StringOp::parse(operator), &filter.value),
        FieldKind::Number => filter_number(raw, NumberOp::parse(operator), &filter.value),
        FieldKind::Date => filter_date(raw, DateOp::parse(operator), &filter.value),
        FieldKind::Boolean => filter_boolean(raw, BoolOp::parse(operator), &filter.value),
    }
}

/// Combine every filter against `record` with `combinator`.
///
/// An empty filter list always matches.
pub fn matches_all(
    registry: &FieldRegistry,
    record: &Record,
    filters: &[Filter],
    combinator: Combinator,
) -> bool {
    if filters.is_empty() {
        return true;
    }
    match combinator {
        Combinator::And => filters.iter().all(|f| evaluate(registry, record, f)),
        Combinator::Or => filters.iter().any(|f| evaluate(registry, record, f)),
    }
}

fn filter_string(raw: &Value, op: StringOp, value: &Value) -> bool {
    match op {
        StringOp::IsEmpty => return raw.is_null() || raw.to_text().trim().is_empty(),
        StringOp::IsNotEmpty => return !raw.is_null() && !raw.to_text().trim().is_empty(),
        _ => {}
    }

    if raw.is_null() {
        return false;
    }
    let haystack = raw.to_text().to_lowercase();
    let needle = value.to_text().to_lowercase();

    match op {
        StringOp::Contains => haystack.contains(&needle),
        StringOp::NotContains => !haystack.contains(&needle),
        StringOp::Equals => haystack == needle,
        StringOp::NotEquals => haystack != needle,
        StringOp::StartsWith => haystack.starts_with(&needle),
        StringOp::EndsWith => haystack.ends_with(&needle),
        StringOp::IsEmpty | StringOp::IsNotEmpty => unreachable!("handled above"),
        StringOp::Unknown => true,
    }
}

fn filter_number(raw: &Value, op: NumberOp, value: &Value) -> bool {
    match op {
        NumberOp::IsEmpty => return raw.is_null(),
        NumberOp::IsNotEmpty => return !raw.is_null(),
        _ => {}
    }

    let Some(num) = raw.as_number() else {
        return false;
    };

    let compare = |check: fn(f64, f64) -> bool| value.as_number().is_some_and(|v| check(num, v));

    match op {
        NumberOp::Equals => compare(|a, b| a == b),
        NumberOp::NotEquals => compare(|a, b| a != b),
        NumberOp::GreaterThan => compare(|a, b| a > b),
        NumberOp::GreaterThanOrEqual => compare(|a, b| a >= b),
        NumberOp::LessThan => compare(|a, b| a < b),
        NumberOp::LessThanOrEqual => compare(|a, b| a <= b),
        NumberOp::Between => match parse_number_range(value) {
            Some((lo, hi)) => lo <= num && num <= hi,
            None => false,
        },
        NumberOp::IsEmpty | NumberOp::IsNotEmpty => unreachable!("handled above"),
        NumberOp::Unknown => true,
    }
}

/// Parse a `"lo,hi"` range, splitting on the first comma.
fn parse_number_range(value: &Value) -> Option<(f64, f64)> {
    let text = value.to_text();
    let (lo, hi) = text.split_once(',')?;
    let lo = lo.trim().parse::<f64>().ok()?;
    let hi = hi.trim().parse::<f64>().ok()?;
    Some((lo, hi))
}

fn as_timestamp(value: &Value) -> Option<OffsetDateTime> {
    match value {
        Value::Null => None,
        other => parse_timestamp(&other.to_text()),
    }
}

fn filter_date(raw: &Value, op: DateOp, value: &Value) -> bool {
    match op {
        DateOp::IsEmpty => return raw.is_null(),
        DateOp::IsNotEmpty => return !raw.is_null(),
        _ => {}
    }

    let Some(dv) = as_timestamp(raw) else {
        return false;
    };

    if op == DateOp::Between {
        return match parse_date_range(value) {
            Some((start, end)) => start <= dv && dv <= end,
            None => false,
        };
    }

    let Some(fv) = as_timestamp(value) else {
        return false;
    };

    match op {
        DateOp::Before => dv < fv,
        DateOp::After => dv > fv,
        DateOp::BeforeOrEquals => dv <= fv,
        DateOp::AfterOrEquals => dv >= fv,
        DateOp::Equals => dv.date() == fv.date(),
        DateOp::NotEquals => dv.date() != fv.date(),
        DateOp::Between | DateOp::IsEmpty | DateOp::IsNotEmpty => unreachable!("handled above"),
        DateOp::Unknown => true,
    }
}

/// Parse a `"start,end"` timestamp range, splitting on the first comma.
fn parse_date_range(value: &Value) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let text = value.to_text();
    let (start, end) = text.split_once(',')?;
    Some((parse_timestamp(start.trim())?, parse_timestamp(end.trim())?))
}

fn filter_boolean(raw: &Value, op: BoolOp, value: &Value) -> bool {
    if raw.is_null() {
        return false;
    }
    let bv = raw.is_truthy();
    let fv = matches!(value, Value::Bool(true)) || value.to_text().to_lowercase() == "true";

    match op {
        BoolOp::Equals => bv == fv,
        BoolOp::NotEquals => bv != fv,
        BoolOp::Unknown => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldDefinition;

    fn registry() -> FieldRegistry {
        FieldRegistry::new(vec![
            FieldDefinition::new("name", "Name", FieldKind::String),
            FieldDefinition::new("age", "Age", FieldKind::Number),
            FieldDefinition::new("createdAt", "Created At", FieldKind::Date),
            FieldDefinition::new("isActive", "Active", FieldKind::Boolean),
        ])
    }

    fn record(name: Value, age: Value, created: Value, active: Value) -> Record {
        Record::new(vec![
            ("name".to_string(), name),
            ("age".to_string(), age),
            ("createdAt".to_string(), created),
            ("isActive".to_string(), active),
        ])
    }

    fn alice() -> Record {
        record(
            "Alice Martin".into(),
            32i64.into(),
            "2022-03-15T10:00:00Z".into(),
            true.into(),
        )
    }

    fn check(record: &Record, field: &str, op: &str, value: impl Into<Value>) -> bool {
        evaluate(&registry(), record, &Filter::new(field, op, value))
    }

    #[test]
    fn unknown_field_never_matches() {
        assert!(!check(&alice(), "salary", "is_empty", Value::Null));
        assert!(!check(&alice(), "salary", "whatever", Value::Null));
    }

    #[test]
    fn string_operators_are_case_insensitive() {
        let r = alice();
        assert!(check(&r, "name", "contains", "MARTIN"));
        assert!(!check(&r, "name", "not_contains", "martin"));
        assert!(check(&r, "name", "equals", "alice martin"));
        assert!(check(&r, "name", "not_equals", "alice"));
        assert!(check(&r, "name", "starts_with", "ALI"));
        assert!(check(&r, "name", "ends_with", "TIN"));
        assert!(!check(&r, "name", "ends_with", "alice"));
    }

    #[test]
    fn string_emptiness_treats_whitespace_and_null_as_empty() {
        let blank = record("   ".into(), Value::Null, Value::Null, Value::Null);
        let null = record(Value::Null, Value::Null, Value::Null, Value::Null);
        assert!(check(&blank, "name", "is_empty", Value::Null));
        assert!(check(&null, "name", "is_empty", Value::Null));
        assert!(!check(&alice(), "name", "is_empty", Value::Null));
        assert!(check(&alice(), "name", "is_not_empty", Value::Null));
        assert!(!check(&null, "name", "is_not_empty", Value::Null));
    }

    #[test]
    fn string_comparison_against_null_raw_fails_closed() {
        let null = record(Value::Null, Value::Null, Value::Null, Value::Null);
        assert!(!check(&null, "name", "not_contains", "x"));
        assert!(!check(&null, "name", "bogus_operator", "x"));
    }

    #[test]
    fn string_null_comparison_value_compares_as_empty() {
        assert!(check(&alice(), "name", "contains", Value::Null));
        assert!(!check(&alice(), "name", "equals", Value::Null));
    }

    #[test]
    fn unknown_operators_match_for_every_kind() {
        let r = alice();
        assert!(check(&r, "name", "fuzzy", "zzz"));
        assert!(check(&r, "age", "approximately", "1000"));
        assert!(check(&r, "createdAt", "around", "2022-01-01"));
        assert!(check(&r, "isActive", "is", false));
    }

    #[test]
    fn number_comparisons_coerce_values() {
        let r = alice();
        assert!(check(&r, "age", "equals", "32"));
        assert!(check(&r, "age", "equals", 32i64));
        assert!(check(&r, "age", "not_equals", 31i64));
        assert!(check(&r, "age", "greater_than", " 31 "));
        assert!(check(&r, "age", "greater_than_or_equal", "32"));
        assert!(check(&r, "age", "less_than", 33.5));
        assert!(check(&r, "age", "less_than_or_equal", "32"));
        assert!(!check(&r, "age", "less_than", "32"));
    }

    #[test]
    fn number_parse_failures_do_not_match() {
        let r = alice();
        assert!(!check(&r, "age", "equals", "thirty"));
        assert!(!check(&r, "age", "not_equals", Value::Null));

        let text_age = record(Value::Null, "old".into(), Value::Null, Value::Null);
        assert!(!check(&text_age, "age", "greater_than", "1"));
        assert!(!check(&text_age, "age", "mystery", "1"));
    }

    #[test]
    fn number_emptiness_only_checks_null() {
        let null = record(Value::Null, Value::Null, Value::Null, Value::Null);
        let text_age = record(Value::Null, "".into(), Value::Null, Value::Null);
        assert!(check(&null, "age", "is_empty", Value::Null));
        assert!(!check(&text_age, "age", "is_empty", Value::Null));
        assert!(check(&text_age, "age", "is_not_empty", Value::Null));
    }

    #[test]
    fn number_between_is_inclusive_and_trims() {
        let r = alice();
        assert!(check(&r, "age", "between", "30,40"));
        assert!(check(&r, "age", "between", " 32 , 32 "));
        assert!(!check(&r, "age", "between", "33,40"));
    }

    #[test]
    fn number_between_rejects_malformed_ranges() {
        let r = alice();
        assert!(!check(&r, "age", "between", "30"));
        assert!(!check(&r, "age", "between", "30,forty"));
        assert!(!check(&r, "age", "between", "30,35,40"));
        assert!(!check(&r, "age", "between", 32i64));
    }

    #[test]
    fn date_comparisons_use_instants() {
        let r = alice();
        assert!(check(&r, "createdAt", "before", "2022-03-15T10:00:01Z"));
        assert!(check(&r, "createdAt", "after", "2022-03-15T09:59:59Z"));
        assert!(check(&r, "createdAt", "before_or_equals", "2022-03-15T10:00:00Z"));
        assert!(check(&r, "createdAt", "after_or_equals", "2022-03-15T12:00:00+02:00"));
        assert!(!check(&r, "createdAt", "after", "2023-01-01"));
    }

    #[test]
    fn date_equality_ignores_time_of_day() {
        let r = alice();
        assert!(check(&r, "createdAt", "equals", "2022-03-15"));
        assert!(check(&r, "createdAt", "equals", "2022-03-15T23:59:00Z"));
        assert!(check(&r, "createdAt", "not_equals", "2022-03-16"));
        assert!(!check(&r, "createdAt", "not_equals", "2022-03-15T00:00:00Z"));
    }

    #[test]
    fn date_raw_strings_are_parsed() {
        let r = record(Value::Null, Value::Null, "2021-06-20T07:30:00Z".into(), Value::Null);
        assert!(check(&r, "createdAt", "before", "2022-01-01"));

        let bad = record(Value::Null, Value::Null, "yesterday".into(), Value::Null);
        assert!(!check(&bad, "createdAt", "before", "2022-01-01"));
        assert!(!check(&bad, "createdAt", "unknown_op", "2022-01-01"));
    }

    #[test]
    fn date_unparseable_comparison_value_does_not_match() {
        let r = alice();
        assert!(!check(&r, "createdAt", "before", "soon"));
        assert!(!check(&r, "createdAt", "equals", Value::Null));
        assert!(!check(&r, "createdAt", "unknown_op", "soon"));
    }

    #[test]
    fn date_between_is_inclusive() {
        let r = alice();
        assert!(check(
            &r,
            "createdAt",
            "between",
            "2022-01-01T00:00:00Z, 2022-12-31T23:59:59Z"
        ));
        assert!(check(
            &r,
            "createdAt",
            "between",
            "2022-03-15T10:00:00Z,2022-03-15T10:00:00Z"
        ));
        assert!(!check(&r, "createdAt", "between", "2023-01-01,2023-12-31"));
    }

    #[test]
    fn date_between_rejects_malformed_ranges() {
        let r = alice();
        assert!(!check(&r, "createdAt", "between", "2022-01-01"));
        assert!(!check(&r, "createdAt", "between", "2022-01-01,later"));
        assert!(!check(&r, "createdAt", "between", Value::Null));
    }

    #[test]
    fn date_emptiness_only_checks_null() {
        let null = record(Value::Null, Value::Null, Value::Null, Value::Null);
        let junk = record(Value::Null, Value::Null, "junk".into(), Value::Null);
        assert!(check(&null, "createdAt", "is_empty", Value::Null));
        assert!(check(&junk, "createdAt", "is_not_empty", Value::Null));
    }

    #[test]
    fn boolean_comparison_value_coercion() {
        let r = alice();
        assert!(check(&r, "isActive", "equals", true));
        assert!(check(&r, "isActive", "equals", "TRUE"));
        assert!(!check(&r, "isActive", "equals", "yes"));
        assert!(!check(&r, "isActive", "equals", 1i64));
        assert!(check(&r, "isActive", "not_equals", false));
        assert!(check(&r, "isActive", "not_equals", Value::Null));
    }

    #[test]
    fn boolean_null_raw_never_matches() {
        let null = record(Value::Null, Value::Null, Value::Null, Value::Null);
        assert!(!check(&null, "isActive", "equals", false));
        assert!(!check(&null, "isActive", "not_equals", true));
        assert!(!check(&null, "isActive", "unknown", true));
    }

    #[test]
    fn combinators_join_filters() {
        let registry = registry();
        let r = alice();
        let hit = Filter::new("name", "contains", "alice");
        let miss = Filter::new("age", "greater_than", "50");

        assert!(matches_all(&registry, &r, &[], Combinator::And));
        assert!(matches_all(&registry, &r, &[], Combinator::Or));
        assert!(!matches_all(&registry, &r, &[hit.clone(), miss.clone()], Combinator::And));
        assert!(matches_all(&registry, &r, &[hit.clone(), miss.clone()], Combinator::Or));
        assert!(!matches_all(&registry, &r, &[miss], Combinator::Or));
        assert!(matches_all(&registry, &r, &[hit], Combinator::And));
    }
}
