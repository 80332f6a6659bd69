pub mod service;

pub use service::{SuggestionConfig, SuggestionService};
