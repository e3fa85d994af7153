use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use catalogd::graphql;
use catalogd::logging;
use catalogd::rest;
use catalogd::storage::{MemoryStore, SharedStore};

#[derive(Parser)]
#[command(
    name = "catalogd",
    version,
    about = "An in-memory product catalog served over GraphQL and REST"
)]
struct Cli {
    /// Port for the REST API and Swagger UI
    #[arg(long, env = "CATALOGD_REST_PORT", default_value_t = 3000)]
    rest_port: u16,

    /// Port for the GraphQL endpoint
    #[arg(long, env = "CATALOGD_GRAPHQL_PORT", default_value_t = 4000)]
    graphql_port: u16,

    /// Address both servers bind to
    #[arg(long, env = "CATALOGD_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    verbose: bool,

    /// Write structured JSON logs to this file in addition to stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    // One store instance for the process; both servers hold the same handle.
    let store: SharedStore = Arc::new(MemoryStore::with_seed_data());
    let schema = graphql::build_schema(Arc::clone(&store));

    info!("Starting catalogd with seeded in-memory store");

    tokio::try_join!(
        rest::run_server(store, &cli.bind, cli.rest_port),
        graphql::run_server(schema, &cli.bind, cli.graphql_port),
    )?;

    Ok(())
}
