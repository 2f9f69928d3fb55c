//! Core search and export entry points.
//!
//! These functions provide the "search as a function" API used by the
//! CLI and the HTTP server. The engine owns an immutable dataset and
//! never mutates it, so a single instance can be shared across threads
//! without locking.

use std::cmp::Ordering;

use anyhow::Result;

use crate::dataset::Dataset;
use crate::export::to_csv;
use crate::models::{FieldDefinition, Query, Record, SearchPage, SortOrder, Value};
use crate::registry::FieldRegistry;
use crate::search::{filter, text};

pub struct Engine {
    dataset: Dataset,
}

impl Engine {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn registry(&self) -> &FieldRegistry {
        self.dataset.registry()
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        self.dataset.registry().definitions()
    }

    pub fn records(&self) -> &[Record] {
        self.dataset.records()
    }

    /// Every record matching `query`, filtered and sorted but not
    /// paginated.
    pub fn apply(&self, query: &Query) -> Vec<&Record> {
        let registry = self.registry();
        let mut results: Vec<&Record> = self.records().iter().collect();

        if !text::is_blank(&query.text) {
            results.retain(|record| text::matches(record, &query.text));
            tracing::debug!(text = %query.text, remaining = results.len(), "applied text stage");
        }

        if !query.filters.is_empty() {
            for f in &query.filters {
                if registry.lookup(&f.field).is_none() {
                    tracing::warn!(field = %f.field, "filter references unknown field");
                }
            }
            results.retain(|record| {
                filter::matches_all(registry, record, &query.filters, query.combinator)
            });
            tracing::debug!(
                filters = query.filters.len(),
                combinator = ?query.combinator,
                remaining = results.len(),
                "applied attribute filters"
            );
        }

        sort_records(&mut results, &query.sort_field, query.sort_order);
        results
    }

    /// One page of results for `query`.
    ///
    /// Pages past the end yield an empty `data` list with the real
    /// `total`. A `page` or `page_size` of zero is treated as 1.
    pub fn search(&self, query: &Query) -> SearchPage {
        let page = query.page.max(1);
        let page_size = query.page_size.max(1);

        let matched = self.apply(query);
        let total = matched.len();
        let total_pages = total.div_ceil(page_size).max(1);

        let start = (page - 1).saturating_mul(page_size);
        let data = matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        SearchPage {
            data,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    /// Every matching record in sorted order, for export.
    pub fn export(&self, query: &Query) -> Vec<&Record> {
        self.apply(query)
    }

    /// CSV text for every record matching `query`.
    ///
    /// An empty match set yields an empty string with no header row.
    pub fn export_all(&self, query: &Query) -> Result<String> {
        let records = self.export(query);
        tracing::debug!(rows = records.len(), "exporting matching records as CSV");
        to_csv(&records)
    }
}

/// Comparable part of a sort key. Numbers order before text when a
/// field mixes both.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: &Value) -> Option<SortKey> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(SortKey::Number(if *b { 1.0 } else { 0.0 })),
            Value::Int(n) => Some(SortKey::Number(*n as f64)),
            Value::Float(n) => Some(SortKey::Number(*n)),
            Value::Text(s) => Some(SortKey::Text(s.to_lowercase())),
        }
    }

    fn cmp(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Stable sort by `field`. Null or missing values always come last,
/// whatever the direction; only present values are reversed by `desc`.
fn sort_records(records: &mut Vec<&Record>, field: &str, order: SortOrder) {
    let mut keyed: Vec<(Option<SortKey>, &Record)> = records
        .drain(..)
        .map(|record| (record.get(field).and_then(SortKey::of), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(b),
            SortOrder::Desc => b.cmp(a),
        },
    });

    records.extend(keyed.into_iter().map(|(_, record)| record));
}
