//! # Bookshelf - A GraphQL API over an in-memory library
//!
//! Bookshelf serves two related record types, authors and books, from an
//! in-memory store through a single GraphQL endpoint. The same path also
//! serves the GraphiQL explorer for interactive use.
//!
//! ## Features
//!
//! - **One endpoint**: queries, mutations, and the explorer all live on `/graphql`
//! - **In-memory store**: records live for the lifetime of the process
//! - **CLI**: run the server, or execute queries and mutations one-shot
//! - **Seedable**: start from the built-in catalog or a YAML seed file
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port
//! bookshelf serve
//!
//! # Query from the command line
//! bookshelf query '{ authors { id name } }'
//!
//! # Add a record
//! bookshelf mutate 'addAuthor(name: "Ursula K. Le Guin") { id }'
//!
//! # Print the schema
//! bookshelf sdl
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Author, Book)
//! - [`storage`]: In-memory record store and seed data

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
///
/// Provides the async-graphql schema and the axum mount for it.
pub mod graphql;

/// Data models for the library.
///
/// Includes `Author` and `Book`.
pub mod model;

/// In-memory storage layer.
///
/// Holds the author and book sequences and the seed data they start from.
pub mod storage;

pub mod logging;
