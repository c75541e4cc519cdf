//! Statistics module - descriptive aggregates for the dashboard

mod summary;

pub use summary::{BoxStats, DashboardStats};
