//! Command-line interface for bookshelf.

mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{CommandContext, handle_mutate, handle_query, handle_sdl, handle_serve};
