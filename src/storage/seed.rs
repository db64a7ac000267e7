use std::path::Path;

use serde::Deserialize;

use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book};

/// Initial record content for a [`Library`](super::Library).
///
/// The default value carries the built-in fixture catalog; alternatively a
/// YAML file with the same shape can be loaded. Seed data is read once at
/// startup and never written back.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            authors: vec![
                Author::new(1, "J. K. Rowling"),
                Author::new(2, "J. R. R. Tolkien"),
                Author::new(3, "Brent Weeks"),
            ],
            books: vec![
                Book::new(1, "Harry Potter and the Chamber of Secrets", 1),
                Book::new(2, "Harry Potter and the Prisoner of Azkaban", 1),
                Book::new(3, "Harry Potter and the Goblet of Fire", 1),
                Book::new(4, "The Fellowship of the Ring", 2),
                Book::new(5, "The Two Towers", 2),
                Book::new(6, "The Return of the King", 2),
                Book::new(7, "The Way of Shadows", 3),
                Book::new(8, "Beyond the Shadows", 3),
            ],
        }
    }
}

impl SeedData {
    /// Load seed records from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BookshelfError::Seed(format!("Failed to read {}: {}", path.display(), e)))?;
        let seed: SeedData = serde_yaml::from_str(&content).map_err(|e| {
            BookshelfError::Seed(format!("Invalid seed file {}: {}", path.display(), e))
        })?;
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_fixture_shape() {
        let seed = SeedData::default();

        assert_eq!(seed.authors.len(), 3);
        assert_eq!(seed.books.len(), 8);

        // Ids are sequential from 1, matching the len+1 assignment scheme
        for (i, author) in seed.authors.iter().enumerate() {
            assert_eq!(author.id, i as i32 + 1);
        }
        for (i, book) in seed.books.iter().enumerate() {
            assert_eq!(book.id, i as i32 + 1);
        }

        // Every fixture book points at a fixture author
        for book in &seed.books {
            assert!(seed.authors.iter().any(|a| a.id == book.author_id));
        }
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
authors:
  - id: 1
    name: Ursula K. Le Guin
books:
  - id: 1
    name: A Wizard of Earthsea
    author_id: 1
  - id: 2
    name: The Tombs of Atuan
    author_id: 1
"#
        )
        .unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.authors.len(), 1);
        assert_eq!(seed.books.len(), 2);
        assert_eq!(seed.authors[0].name, "Ursula K. Le Guin");
        assert_eq!(seed.books[1].author_id, 1);
    }

    #[test]
    fn test_load_partial_yaml_defaults_missing_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
authors:
  - id: 1
    name: Octavia E. Butler
"#
        )
        .unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.authors.len(), 1);
        assert!(seed.books.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_seed_error() {
        let err = SeedData::load(Path::new("/nonexistent/library.yml")).unwrap_err();
        assert!(err.to_string().contains("Seed error"));
        assert!(err.to_string().contains("/nonexistent/library.yml"));
    }

    #[test]
    fn test_load_invalid_yaml_is_seed_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "authors: {{ not a list").unwrap();

        let err = SeedData::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid seed file"));
    }
}
