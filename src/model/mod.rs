//! Data models for bookshelf.
//!
//! This module defines the two record types the API serves:
//!
//! - [`Author`]: a writer identified by an integer id
//! - [`Book`]: a title holding an unvalidated reference to its author
//!
//! Both are plain data; the derived relationships (an author's books, a
//! book's author) are computed per request in the GraphQL layer, never
//! stored.

mod author;
mod book;

pub use author::Author;
pub use book::Book;
