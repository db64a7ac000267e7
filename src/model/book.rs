use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Reference to [`Author::id`]; never checked against the author list,
    /// so a dangling value is representable.
    ///
    /// [`Author::id`]: crate::model::Author
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}
