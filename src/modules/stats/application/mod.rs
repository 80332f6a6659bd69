pub mod service;

pub use service::{StatsOverview, StatsService};
