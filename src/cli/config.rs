use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::args::{CombinatorArg, OutputFormat, SortOrderArg, DEFAULT_SERVE_ADDR};
use crate::cli::{ExportArgs, FieldsArgs, SearchArgs, ServeArgs};

/// Top-level representation of `.rowsift/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub search: Option<SearchSection>,

    #[serde(default)]
    pub export: Option<ExportSection>,

    #[serde(default)]
    pub serve: Option<ServeSection>,

    #[serde(default)]
    pub http: Option<HttpSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub sort_field: Option<String>,
    #[serde(default)]
    pub sort_order: Option<SortOrderArg>,
    #[serde(default)]
    pub combinator: Option<CombinatorArg>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub no_server: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportSection {
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub sort_field: Option<String>,
    #[serde(default)]
    pub sort_order: Option<SortOrderArg>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub no_server: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServeSection {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub data: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HttpSection {
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Discover and load a project-local `.rowsift/config.toml` (or
/// `.rowsift/rowsift.toml`) starting from the current working
/// directory and walking up parent directories.
pub fn load_cli_config() -> Result<Option<CliConfig>> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_path = find_project_config(&cwd);

    let Some(path) = config_path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: CliConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse TOML config at {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded project config");
    Ok(Some(config))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);

    while let Some(current) = dir {
        let rowsift_dir = current.join(".rowsift");
        let config_toml = rowsift_dir.join("config.toml");
        if config_toml.is_file() {
            return Some(config_toml);
        }

        let rowsift_toml = rowsift_dir.join("rowsift.toml");
        if rowsift_toml.is_file() {
            return Some(rowsift_toml);
        }

        dir = current.parent();
    }

    None
}

fn global_server_url(config: &CliConfig) -> Option<String> {
    config.http.as_ref().and_then(|http| http.server_url.clone())
}

pub fn apply_search_config_defaults(config: &CliConfig, args: &mut SearchArgs) {
    if let Some(search) = &config.search {
        if args.query.data.is_none() {
            args.query.data = search.data.clone();
        }

        if args.page_size.is_none() {
            args.page_size = search.page_size;
        }

        if args.query.sort.is_none() {
            args.query.sort = search.sort_field.clone();
        }

        if !args.query.desc {
            if let Some(SortOrderArg::Desc) = search.sort_order {
                args.query.desc = true;
            }
        }

        if !args.query.or {
            if let Some(CombinatorArg::Or) = search.combinator {
                args.query.or = true;
            }
        }

        if matches!(args.format, OutputFormat::Text) {
            if let Some(format) = search.format {
                args.format = format;
            }
        }

        if args.server.is_none() {
            args.server = search.server.clone().or_else(|| global_server_url(config));
        }

        if !args.no_server {
            if let Some(true) = search.no_server {
                args.no_server = true;
            }
        }
    } else if args.server.is_none() {
        // If there is no per-search section, fall back to a global
        // HTTP server URL when present.
        args.server = global_server_url(config);
    }
}

pub fn apply_export_config_defaults(config: &CliConfig, args: &mut ExportArgs) {
    if let Some(export) = &config.export {
        if args.query.data.is_none() {
            args.query.data = export.data.clone();
        }

        if args.output.is_none() {
            args.output = export.output.clone();
        }

        if args.query.sort.is_none() {
            args.query.sort = export.sort_field.clone();
        }

        if !args.query.desc {
            if let Some(SortOrderArg::Desc) = export.sort_order {
                args.query.desc = true;
            }
        }

        if args.server.is_none() {
            args.server = export.server.clone().or_else(|| global_server_url(config));
        }

        if !args.no_server {
            if let Some(true) = export.no_server {
                args.no_server = true;
            }
        }
    } else if args.server.is_none() {
        args.server = global_server_url(config);
    }
}

pub fn apply_fields_config_defaults(config: &CliConfig, args: &mut FieldsArgs) {
    if args.data.is_none() {
        if let Some(search) = &config.search {
            args.data = search.data.clone();
        }
    }
}

pub fn apply_serve_config_defaults(config: &CliConfig, args: &mut ServeArgs) {
    if let Some(serve) = &config.serve {
        if args.addr == DEFAULT_SERVE_ADDR {
            if let Some(addr) = &serve.addr {
                args.addr = addr.clone();
            }
        }

        if args.data.is_none() {
            args.data = serve.data.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::QueryArgs;
    use tempfile::tempdir;

    fn search_args() -> SearchArgs {
        SearchArgs {
            query: QueryArgs::default(),
            page: 1,
            page_size: None,
            format: OutputFormat::Text,
            server: None,
            no_server: false,
        }
    }

    #[test]
    fn search_section_fills_unset_flags() {
        let config: CliConfig = toml::from_str(
            r#"
[search]
page_size = 5
sort_field = "salary"
sort_order = "desc"
combinator = "or"
format = "json"
"#,
        )
        .expect("config");

        let mut args = search_args();
        apply_search_config_defaults(&config, &mut args);

        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.query.sort.as_deref(), Some("salary"));
        assert!(args.query.desc);
        assert!(args.query.or);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_flags_win_over_config() {
        let config: CliConfig = toml::from_str(
            r#"
[search]
page_size = 5
sort_field = "salary"
"#,
        )
        .expect("config");

        let mut args = search_args();
        args.page_size = Some(20);
        args.query.sort = Some("name".to_string());
        apply_search_config_defaults(&config, &mut args);

        assert_eq!(args.page_size, Some(20));
        assert_eq!(args.query.sort.as_deref(), Some("name"));
    }

    #[test]
    fn global_http_section_supplies_server_url() {
        let config: CliConfig = toml::from_str(
            r#"
[http]
server_url = "http://127.0.0.1:9999"
"#,
        )
        .expect("config");

        let mut args = search_args();
        apply_search_config_defaults(&config, &mut args);
        assert_eq!(args.server.as_deref(), Some("http://127.0.0.1:9999"));
    }

    #[test]
    fn serve_section_overrides_default_addr_only() {
        let config: CliConfig = toml::from_str(
            r#"
[serve]
addr = "0.0.0.0:9000"
"#,
        )
        .expect("config");

        let mut args = ServeArgs {
            addr: DEFAULT_SERVE_ADDR.to_string(),
            data: None,
        };
        apply_serve_config_defaults(&config, &mut args);
        assert_eq!(args.addr, "0.0.0.0:9000");

        let mut explicit = ServeArgs {
            addr: "127.0.0.1:1".to_string(),
            data: None,
        };
        apply_serve_config_defaults(&config, &mut explicit);
        assert_eq!(explicit.addr, "127.0.0.1:1");
    }

    #[test]
    fn config_is_found_in_parent_directories() {
        let tmp = tempdir().expect("tempdir");
        let config_dir = tmp.path().join(".rowsift");
        fs::create_dir_all(&config_dir).expect("create .rowsift");
        fs::write(config_dir.join("rowsift.toml"), "").expect("write config");

        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("create nested");

        let found = find_project_config(&nested).expect("config path");
        assert_eq!(found, config_dir.join("rowsift.toml"));
    }
}
