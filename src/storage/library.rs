use parking_lot::RwLock;

use super::seed::SeedData;
use crate::model::{Author, Book};

/// The in-memory record store.
///
/// Holds the two append-only sequences behind per-sequence locks. Share it
/// with `Arc`; every holder observes appends made through any other handle.
/// Records are never updated or removed, so the store's content only grows
/// for the lifetime of the process.
pub struct Library {
    authors: RwLock<Vec<Author>>,
    books: RwLock<Vec<Book>>,
}

impl Library {
    pub fn new(seed: SeedData) -> Self {
        Self {
            authors: RwLock::new(seed.authors),
            books: RwLock::new(seed.books),
        }
    }

    /// A library pre-populated with the built-in fixture catalog.
    pub fn seeded() -> Self {
        Self::new(SeedData::default())
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.authors.read().clone()
    }

    /// All books in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// First author with a matching id, if any.
    pub fn author(&self, id: i32) -> Option<Author> {
        self.authors.read().iter().find(|a| a.id == id).cloned()
    }

    /// First book with a matching id, if any.
    pub fn book(&self, id: i32) -> Option<Book> {
        self.books.read().iter().find(|b| b.id == id).cloned()
    }

    /// All books referencing the given author, insertion order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.books
            .read()
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn author_count(&self) -> usize {
        self.authors.read().len()
    }

    pub fn book_count(&self) -> usize {
        self.books.read().len()
    }

    /// Append a new author, assigning the next id.
    ///
    /// The id is the current sequence length plus one; the assignment and
    /// the append happen under one write lock so concurrent calls cannot
    /// observe the same length.
    pub fn add_author(&self, name: impl Into<String>) -> Author {
        let mut authors = self.authors.write();
        let author = Author::new(authors.len() as i32 + 1, name);
        tracing::info!(id = author.id, name = %author.name, "Adding author");
        authors.push(author.clone());
        author
    }

    /// Append a new book, assigning the next id.
    ///
    /// `author_id` is stored as given; nothing checks that it names an
    /// existing author.
    pub fn add_book(&self, name: impl Into<String>, author_id: i32) -> Book {
        let mut books = self.books.write();
        let book = Book::new(books.len() as i32 + 1, name, author_id);
        tracing::info!(id = book.id, name = %book.name, author_id = book.author_id, "Adding book");
        books.push(book.clone());
        book
    }
}
