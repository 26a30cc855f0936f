//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use keepmeaning_core::{Config, Linter};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP over stdin/stdout until the client disconnects.
///
/// The lint engine is built once from `[lint]` configuration; `[flow]`
/// provides the default models for `compute_flow`.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let linter = Linter::new(&config.lint).context("invalid [lint] configuration")?;
    let server = ProjectServer::new(linter, config.flow, max_input);

    info!("starting MCP server on stdio");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server stopped")?;
    info!("MCP client disconnected");

    Ok(())
}
