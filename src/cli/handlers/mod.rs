mod mutate;
mod query;
mod sdl;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use sdl::handle_sdl;
pub use serve::handle_serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::BookshelfConfig;
use crate::error::Result;
use crate::storage::{Library, SeedData};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub library: Arc<Library>,
}

impl CommandContext {
    /// Build the context, seeding the library from the override path, the
    /// config's seed path, or the embedded fixture catalog in that order.
    ///
    /// `root` is the directory the config came from; relative seed paths in
    /// the config resolve against it. The override path is taken as typed.
    pub fn new(
        config: BookshelfConfig,
        root: &Path,
        seed_override: Option<PathBuf>,
    ) -> Result<Self> {
        let seed = match seed_override.or_else(|| config.seed_path(root)) {
            Some(path) => SeedData::load(&path)?,
            None => SeedData::default(),
        };

        Ok(Self {
            config,
            library: Arc::new(Library::new(seed)),
        })
    }
}
