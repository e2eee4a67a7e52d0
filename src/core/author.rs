//! Author data shared by collections and levels
//!
//! Author fields arrive on separate metadata lines ("Author:", "Email:",
//! "Homepage:", "Author comment:"), so the value is accumulated through a
//! builder and only frozen when the surrounding level or collection is
//! finalized.

use serde::{Deserialize, Serialize};

/// Sentinel name for an author that was never stated.
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Author of a collection or of a single level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub website_url: String,
    pub comment: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: UNKNOWN_AUTHOR.to_string(),
            email: String::new(),
            website_url: String::new(),
            comment: String::new(),
        }
    }
}

/// Accumulating builder for [`Author`]
///
/// Tracks per field whether it was explicitly set, which is what the
/// wholesale collection-author inheritance rule keys on: a level author
/// with no field ever set is replaced entirely by the collection author,
/// never merged field by field.
#[derive(Debug, Clone, Default)]
pub struct AuthorBuilder {
    name: Option<String>,
    email: Option<String>,
    website_url: Option<String>,
    comment: Option<String>,
}

impl AuthorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = Some(email.to_string());
    }

    pub fn set_website_url(&mut self, url: &str) {
        self.website_url = Some(url.to_string());
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = Some(comment.to_string());
    }

    /// True if no field was ever explicitly set.
    pub fn is_untouched(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.website_url.is_none()
            && self.comment.is_none()
    }

    pub fn build(&self) -> Author {
        Author {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            email: self.email.clone().unwrap_or_default(),
            website_url: self.website_url.clone().unwrap_or_default(),
            comment: self.comment.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_author_is_unknown() {
        let author = Author::default();
        assert_eq!(author.name, UNKNOWN_AUTHOR);
        assert!(author.email.is_empty());
        assert!(author.website_url.is_empty());
        assert!(author.comment.is_empty());
    }

    #[test]
    fn test_builder_accumulates_fields() {
        let mut builder = AuthorBuilder::new();
        builder.set_name("Thinking Rabbit");
        builder.set_email("rabbit@example.com");

        let author = builder.build();
        assert_eq!(author.name, "Thinking Rabbit");
        assert_eq!(author.email, "rabbit@example.com");
        assert!(author.website_url.is_empty());
    }

    #[test]
    fn test_untouched_tracking() {
        let mut builder = AuthorBuilder::new();
        assert!(builder.is_untouched());

        // Even setting a field to the sentinel value counts as touched.
        builder.set_name(UNKNOWN_AUTHOR);
        assert!(!builder.is_untouched());
    }
}
