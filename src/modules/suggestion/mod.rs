pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{SuggestionConfig, SuggestionService};
pub use domain::{builtin_catalog, TitleSuggestion};
