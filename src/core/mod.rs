//! Core level-collection data model

pub mod author;
pub mod collection;
pub mod level;
pub mod snapshot;
pub mod solution;

pub use author::{Author, AuthorBuilder, UNKNOWN_AUTHOR};
pub use collection::{Collection, CollectionBuilder};
pub use level::Level;
pub use snapshot::Snapshot;
pub use solution::Solution;
