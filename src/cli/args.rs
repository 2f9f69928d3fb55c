use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::models::{Combinator, Filter, Query, SortOrder, Value};

/// Top-level CLI entrypoint for `rowsift`.
#[derive(Parser, Debug)]
#[command(
    name = "rowsift",
    about = "Structured search and CSV export over in-memory records",
    author = "rowsift developers",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    /// Print the JSON schema version used for `--format=json` output
    /// and exit.
    #[arg(long = "schema-version")]
    pub schema_version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search records and print one page of results.
    Search(SearchArgs),
    /// Export every matching record as CSV.
    Export(ExportArgs),
    /// List the searchable fields and their types.
    Fields(FieldsArgs),
    /// Run a long-lived HTTP+JSON daemon.
    Serve(ServeArgs),
}

/// Query flags shared by `search` and `export`.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Free-text needle matched case-insensitively against every field.
    pub text: Option<String>,

    /// Attribute filter as `field:operator[:value]`.
    ///
    /// The value may itself contain `:` (e.g. timestamps). Repeat the
    /// flag to add more filters; they are joined with AND unless `--or`
    /// is given.
    #[arg(short = 'f', long = "filter")]
    pub filters: Vec<String>,

    /// Join filters with OR instead of AND.
    #[arg(long = "or")]
    pub or: bool,

    /// Field to sort by (defaults to `id`).
    #[arg(long = "sort")]
    pub sort: Option<String>,

    /// Sort in descending order. Null values still sort last.
    #[arg(long = "desc")]
    pub desc: bool,

    /// JSON dataset to search instead of the bundled sample.
    #[arg(long = "data")]
    pub data: Option<PathBuf>,
}

/// Arguments specific to the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// 1-based page number.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Number of records per page (defaults to 10).
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Output format (text, table, json, or csv).
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Optional server URL for delegating search to a daemon.
    ///
    /// When set (either via this flag or the `ROWSIFT_SERVER_URL`
    /// environment variable), the CLI sends the query to the HTTP
    /// server instead of searching locally. Use `--no-server` to
    /// override this and force local execution.
    #[arg(long = "server", env = "ROWSIFT_SERVER_URL")]
    pub server: Option<String>,

    /// Disable use of any configured server and force local search.
    #[arg(long = "no-server")]
    pub no_server: bool,
}

/// Arguments specific to the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Write CSV to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Optional server URL for delegating export to a daemon.
    #[arg(long = "server", env = "ROWSIFT_SERVER_URL")]
    pub server: Option<String>,

    /// Disable use of any configured server and force local export.
    #[arg(long = "no-server")]
    pub no_server: bool,
}

/// Arguments specific to the `fields` subcommand.
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// JSON dataset whose fields to list instead of the bundled sample.
    #[arg(long = "data")]
    pub data: Option<PathBuf>,

    /// Output format (text, table, or json).
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments specific to the `serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to (e.g. 127.0.0.1:7878).
    #[arg(long = "addr", default_value = DEFAULT_SERVE_ADDR)]
    pub addr: String,

    /// JSON dataset to serve instead of the bundled sample.
    #[arg(long = "data")]
    pub data: Option<PathBuf>,
}

pub const DEFAULT_SERVE_ADDR: &str = "127.0.0.1:7878";

/// CLI representation of output format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Table,
    Json,
    Csv,
}

/// CLI representation of sort order, as written in config files.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrderArg {
    Asc,
    Desc,
}

/// CLI representation of the filter combinator, as written in config
/// files.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinatorArg {
    And,
    Or,
}

/// Parse a `field:operator[:value]` filter flag.
///
/// A missing value means "no comparison value" (for `is_empty` and
/// friends). Values are passed through as text and coerced by the
/// evaluator according to the field's type.
pub fn parse_filter_arg(raw: &str, idx: usize) -> Result<Filter> {
    let mut parts = raw.splitn(3, ':');
    let field = parts.next().unwrap_or_default().trim();
    let operator = parts.next().unwrap_or_default().trim();

    if field.is_empty() || operator.is_empty() {
        bail!("invalid filter `{raw}`: expected field:operator[:value]");
    }

    let value = match parts.next() {
        Some(value) => Value::Text(value.to_string()),
        None => Value::Null,
    };

    Ok(Filter {
        id: format!("f{}", idx + 1),
        field: field.to_string(),
        operator: operator.to_string(),
        value,
    })
}

fn query_from_query_args(args: &QueryArgs) -> Result<Query> {
    let filters = args
        .filters
        .iter()
        .enumerate()
        .map(|(idx, raw)| parse_filter_arg(raw, idx))
        .collect::<Result<Vec<_>>>()?;

    let defaults = Query::default();
    Ok(Query {
        text: args.text.clone().unwrap_or_default(),
        filters,
        combinator: if args.or {
            Combinator::Or
        } else {
            Combinator::And
        },
        sort_field: args.sort.clone().unwrap_or(defaults.sort_field),
        sort_order: if args.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        },
        ..defaults
    })
}

/// Build a paginated `Query` from `search` arguments.
pub fn search_query_from_args(args: &SearchArgs) -> Result<Query> {
    if args.page == 0 {
        bail!("--page must be at least 1");
    }
    let page_size = args.page_size.unwrap_or(Query::default().page_size);
    if page_size == 0 {
        bail!("--page-size must be at least 1");
    }

    Ok(Query {
        page: args.page,
        page_size,
        ..query_from_query_args(&args.query)?
    })
}

/// Build an export `Query` from `export` arguments.
pub fn export_query_from_args(args: &ExportArgs) -> Result<Query> {
    query_from_query_args(&args.query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_arg_keeps_colons_in_value() {
        let filter = parse_filter_arg("createdAt:after:2022-01-01T10:00:00Z", 0).expect("filter");
        assert_eq!(filter.id, "f1");
        assert_eq!(filter.field, "createdAt");
        assert_eq!(filter.operator, "after");
        assert_eq!(filter.value, Value::Text("2022-01-01T10:00:00Z".into()));
    }

    #[test]
    fn filter_arg_without_value_is_null() {
        let filter = parse_filter_arg("name:is_empty", 2).expect("filter");
        assert_eq!(filter.id, "f3");
        assert!(filter.value.is_null());
    }

    #[test]
    fn filter_arg_requires_field_and_operator() {
        assert!(parse_filter_arg("name", 0).is_err());
        assert!(parse_filter_arg(":contains:x", 0).is_err());
    }

    #[test]
    fn search_query_applies_flags_and_defaults() {
        let args = SearchArgs {
            query: QueryArgs {
                text: Some("engineering".to_string()),
                filters: vec!["age:between:30,40".to_string()],
                or: true,
                sort: None,
                desc: true,
                data: None,
            },
            page: 2,
            page_size: None,
            format: OutputFormat::Json,
            server: None,
            no_server: false,
        };

        let query = search_query_from_args(&args).expect("query");
        assert_eq!(query.text, "engineering");
        assert_eq!(query.combinator, Combinator::Or);
        assert_eq!(query.sort_field, "id");
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.filters.len(), 1);
    }

    #[test]
    fn search_query_rejects_zero_page() {
        let args = SearchArgs {
            query: QueryArgs::default(),
            page: 0,
            page_size: None,
            format: OutputFormat::Text,
            server: None,
            no_server: false,
        };
        assert!(search_query_from_args(&args).is_err());
    }
}
