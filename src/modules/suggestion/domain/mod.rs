pub mod catalog;
pub mod matcher;

pub use catalog::{builtin_catalog, TitleSuggestion};
pub use matcher::{rank_titles, MIN_QUERY_CHARS};
