use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model;

use super::schema::get_library;

/// An author record with its derived book list.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// All books whose authorId references this author
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        get_library(ctx)
            .books_by_author(self.id)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// A book record with its derived author reference.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book references, or null when the reference dangles
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        get_library(ctx).author(self.author_id).map(Into::into)
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}
