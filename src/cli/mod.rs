use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use crate::dataset::Dataset;
use crate::export::to_csv;
use crate::models::SEARCH_RESULT_VERSION;
use crate::search::engine::Engine;
use crate::server;

mod args;
mod config;
mod format;
mod http_backend;

pub use args::{
    Cli, Commands, ExportArgs, FieldsArgs, OutputFormat, QueryArgs, SearchArgs, ServeArgs,
};

use config::{
    apply_export_config_defaults, apply_fields_config_defaults, apply_search_config_defaults,
    apply_serve_config_defaults, load_cli_config,
};
use http_backend::HttpSearchBackend;

/// Entry point for the CLI binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.schema_version {
        println!(
            "Search result JSON schema version: {}",
            SEARCH_RESULT_VERSION
        );
        return Ok(());
    }

    let cli_config = load_cli_config()?;

    match cli.command {
        Some(Commands::Search(mut search_args)) => {
            if let Some(ref config) = cli_config {
                apply_search_config_defaults(config, &mut search_args);
            }

            let query = args::search_query_from_args(&search_args)?;
            let page = if let Some(server_url) =
                effective_server_url(search_args.server.as_deref(), search_args.no_server)
            {
                warn_if_data_ignored(search_args.query.data.as_deref(), &server_url);
                let backend = HttpSearchBackend::new(server_url)?;
                backend.search(&query)?
            } else {
                let dataset = Dataset::load(search_args.query.data.as_deref())?;
                Engine::new(dataset).search(&query)
            };

            match search_args.format {
                OutputFormat::Text => format::print_text(&page),
                OutputFormat::Table => format::print_table(&page.data),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &page)?;
                    println!();
                    Ok(())
                }
                OutputFormat::Csv => {
                    let records: Vec<_> = page.data.iter().collect();
                    print!("{}", to_csv(&records)?);
                    Ok(())
                }
            }
        }
        Some(Commands::Export(mut export_args)) => {
            if let Some(ref config) = cli_config {
                apply_export_config_defaults(config, &mut export_args);
            }

            let query = args::export_query_from_args(&export_args)?;
            let csv = if let Some(server_url) =
                effective_server_url(export_args.server.as_deref(), export_args.no_server)
            {
                warn_if_data_ignored(export_args.query.data.as_deref(), &server_url);
                let backend = HttpSearchBackend::new(server_url)?;
                backend.export(&query)?
            } else {
                let dataset = Dataset::load(export_args.query.data.as_deref())?;
                Engine::new(dataset).export_all(&query)?
            };

            match &export_args.output {
                Some(path) => {
                    fs::write(path, &csv)
                        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
                    eprintln!("Wrote {} bytes of CSV to {}", csv.len(), path.display());
                }
                None => print!("{csv}"),
            }
            Ok(())
        }
        Some(Commands::Fields(mut fields_args)) => {
            if let Some(ref config) = cli_config {
                apply_fields_config_defaults(config, &mut fields_args);
            }

            let dataset = Dataset::load(fields_args.data.as_deref())?;
            let fields = dataset.registry().definitions();

            match fields_args.format {
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), fields)?;
                    println!();
                    Ok(())
                }
                OutputFormat::Text | OutputFormat::Table | OutputFormat::Csv => {
                    format::print_fields(fields)
                }
            }
        }
        Some(Commands::Serve(mut serve_args)) => {
            if let Some(ref config) = cli_config {
                apply_serve_config_defaults(config, &mut serve_args);
            }

            let addr: SocketAddr = serve_args.addr.parse()?;
            let dataset = Dataset::load(serve_args.data.as_deref())?;
            let engine = Arc::new(Engine::new(dataset));
            println!("Starting rowsift HTTP server on http://{addr}");

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            runtime.block_on(server::run(addr, engine))?;
            Ok(())
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

/// The server searches its own dataset, so a local `--data` path has
/// no effect once a request is delegated.
fn warn_if_data_ignored(data: Option<&Path>, server_url: &str) {
    if let Some(path) = data {
        tracing::warn!(
            data = %path.display(),
            server = server_url,
            "ignoring --data: the server searches its own dataset (pass --no-server to search the file locally)"
        );
    }
}

fn effective_server_url(server_flag: Option<&str>, no_server: bool) -> Option<String> {
    if no_server {
        None
    } else {
        server_flag.map(|s| s.to_string())
    }
}
