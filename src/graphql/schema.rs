use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::Library;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema over a shared library handle.
///
/// Callers keep their own clone of the `Arc`, so records added through the
/// schema stay visible to the rest of the process.
pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(super) fn get_library<'ctx>(ctx: &Context<'ctx>) -> &'ctx Library {
    ctx.data::<Arc<Library>>().unwrap()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        let library = get_library(ctx);
        id.and_then(|id| library.book(id)).map(Into::into)
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        get_library(ctx)
            .books()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        let library = get_library(ctx);
        id.and_then(|id| library.author(id)).map(Into::into)
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        get_library(ctx)
            .authors()
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Book {
        get_library(ctx).add_book(name, author_id).into()
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Author {
        get_library(ctx).add_author(name).into()
    }
}
