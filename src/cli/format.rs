use std::cmp;

use anyhow::Result;

use crate::models::{FieldDefinition, Record, SearchPage};

const MAX_COLUMN_WIDTH: usize = 30;

/// Render a `SearchPage` in human-readable text form.
///
/// A summary header is followed by one line per record:
/// `key=value key=value ...`, with values containing whitespace
/// quoted.
pub fn print_text(page: &SearchPage) -> Result<()> {
    println!(
        "page {}/{} ({} total)",
        page.page, page.total_pages, page.total
    );

    for record in &page.data {
        println!("{}", render_record_line(record));
    }

    Ok(())
}

fn render_record_line(record: &Record) -> String {
    record
        .iter()
        .map(|(key, value)| {
            let text = value.to_text();
            if text.is_empty() || text.chars().any(char::is_whitespace) {
                format!("{key}={text:?}")
            } else {
                format!("{key}={text}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render records as a table whose columns follow the key order of the
/// first record.
pub fn print_table(records: &[Record]) -> Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };

    let headers: Vec<String> = first.keys().map(str::to_uppercase).collect();
    let keys: Vec<&str> = first.keys().collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            keys.iter()
                .map(|key| record.get(key).map(|v| v.to_text()).unwrap_or_default())
                .collect()
        })
        .collect();

    print_grid(&headers, &rows);
    Ok(())
}

/// Render field definitions as `FIELD  LABEL  TYPE` rows.
pub fn print_fields(fields: &[FieldDefinition]) -> Result<()> {
    let headers = vec!["FIELD".to_string(), "LABEL".to_string(), "TYPE".to_string()];
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|f| vec![f.field.clone(), f.label.clone(), f.kind.as_str().to_string()])
        .collect();

    print_grid(&headers, &rows);
    Ok(())
}

fn print_grid(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let max_cell = rows
                .iter()
                .map(|row| row.get(idx).map(|c| c.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0);
            cmp::min(cmp::max(header.chars().count(), max_cell), MAX_COLUMN_WIDTH)
        })
        .collect();

    println!("{}", render_grid_line(headers, &widths));
    for row in rows {
        println!("{}", render_grid_line(row, &widths));
    }
}

fn render_grid_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", truncate(cell, width)))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

fn truncate(s: &str, max_width: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        s.chars()
            .take(max_width.saturating_sub(1))
            .collect::<String>()
            + "…"
    }
}
