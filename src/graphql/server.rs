use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;

use crate::error::Result;

use super::schema::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// The single-endpoint router.
///
/// GET serves the GraphiQL explorer, POST executes GraphQL requests. Both
/// live on the same path.
pub fn router(schema: BookshelfSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(schema)
}

/// Bind the address and serve requests until the process is stopped.
///
/// `addr` is a `host:port` string; hostnames are resolved at bind time.
pub async fn run_server(schema: BookshelfSchema, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema)).await?;
    Ok(())
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
