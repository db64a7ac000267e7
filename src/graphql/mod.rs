//! GraphQL schema, resolvers, and HTTP server for bookshelf.
//!
//! Exposes the library's authors and books through a single `/graphql`
//! endpoint, with the GraphiQL explorer served on the same path.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 3000
//!
//! # Execute a query from CLI
//! bookshelf query '{ books { id name author { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addBook(name: "Dune", authorId: 1) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
