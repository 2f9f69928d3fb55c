//! `rowsift`: structured search, pagination, and CSV export over an
//! in-memory record collection.
//!
//! The engine (`search::engine::Engine`) is a pure function of its
//! dataset and a `models::Query`; the CLI and HTTP server are thin
//! layers around it.

pub mod cli;
pub mod dataset;
pub mod export;
pub mod models;
pub mod registry;
pub mod search;
pub mod server;
