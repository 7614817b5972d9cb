//! MCP server initialization for stdio and streamable HTTP transports.
//!
//! Provides [`serve_stdio`] and [`serve_http`] entry points that wire the guide
//! and a shared session store into a running server.

use crate::config::GuideConfig;
use crate::guide::Guide;
use crate::knowledge;
use crate::session::SessionStore;
use crate::tools::GuideTools;
use anyhow::{bail, Result};
use rmcp::ServiceExt;

/// Shared setup: check the knowledge base and build the session store.
fn setup_shared_state(config: &GuideConfig) -> Result<SessionStore> {
    let kb = knowledge::binondo();
    if let Err(errors) = kb.validate() {
        for e in &errors {
            tracing::error!("{e}");
        }
        bail!("knowledge base failed validation ({} problems)", errors.len());
    }

    let guide = Guide::new(kb, config.matching.policy);
    tracing::info!(policy = %guide.policy(), aliases = kb.aliases.len(), "guide ready");
    Ok(SessionStore::new(guide))
}

/// Start the server on the configured transport.
pub async fn serve(config: GuideConfig) -> Result<()> {
    match config.server.transport.as_str() {
        "stdio" => serve_stdio(config).await,
        "http" | "sse" => serve_http(config).await,
        other => bail!("unknown transport: {other}. Supported: stdio, http"),
    }
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: GuideConfig) -> Result<()> {
    tracing::info!("starting Binondo guide MCP server on stdio");

    let sessions = setup_shared_state(&config)?;

    let tools = GuideTools::new(sessions);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport.
pub async fn serve_http(config: GuideConfig) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let bind_addr = format!("{host}:{port}");

    tracing::info!(addr = %bind_addr, "starting Binondo guide MCP server on HTTP");

    let sessions = setup_shared_state(&config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(GuideTools::new(sessions.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for ctrl-c: {e}");
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
