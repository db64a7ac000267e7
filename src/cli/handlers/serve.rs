use anyhow::Result;
use colored::Colorize;

use crate::config::ServerSettings;
use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let addr = listen_addr(&ctx.config.server, port, host);

    let schema = build_schema(ctx.library);

    let url = format!("http://{}{}", addr, GRAPHQL_PATH);
    println!("Starting GraphQL server on {}", url.cyan());
    println!("GraphiQL explorer on {}", url.cyan());

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &addr))?;
    Ok(())
}

/// Listen address with flag values (or `PORT` from the environment, which
/// clap feeds into the port flag) taking precedence over the config file.
fn listen_addr(settings: &ServerSettings, port: Option<u16>, host: Option<String>) -> String {
    let host = host.unwrap_or_else(|| settings.host.clone());
    let port = port.unwrap_or(settings.port);
    format!("{}:{}", host, port)
}
