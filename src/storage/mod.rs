//! In-memory storage layer for bookshelf.
//!
//! There is no persistence: the store is seeded once at process start and
//! mutated only by appends, so its content lives exactly as long as the
//! process. Seed records come from the built-in fixture catalog or from a
//! YAML file.
//!
//! ## Seed File Format
//!
//! ```yaml
//! authors:
//!   - id: 1
//!     name: J. K. Rowling
//! books:
//!   - id: 1
//!     name: Harry Potter and the Chamber of Secrets
//!     author_id: 1
//! ```
//!
//! ## Components
//!
//! - [`Library`]: the shared record store (lookups and appends)
//! - [`SeedData`]: initial record content, embedded or loaded from YAML

mod library;
mod seed;

pub use library::Library;
pub use seed::SeedData;
