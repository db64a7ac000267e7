use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::{
    Cli, CommandContext, Commands, handle_mutate, handle_query, handle_sdl, handle_serve,
};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    let (config, root) = load_config(cli.config.as_deref())?;
    let ctx = CommandContext::new(config, &root, cli.seed.map(PathBuf::from))?;

    match cli.command {
        Commands::Serve { port, host } => handle_serve(ctx, port, host),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Sdl => handle_sdl(ctx),
    }
}

fn load_config(explicit: Option<&str>) -> Result<(BookshelfConfig, PathBuf)> {
    match explicit {
        Some(path) => {
            let path = Path::new(path);
            let config = BookshelfConfig::load_file(path)
                .context("Failed to load bookshelf configuration")?;
            let root = path.parent().unwrap_or(Path::new("")).to_path_buf();
            Ok((config, root))
        }
        None => {
            let cwd = std::env::current_dir()?;
            BookshelfConfig::load(&cwd).context("Failed to load bookshelf configuration")
        }
    }
}
