pub mod aggregation_service;
pub mod chart_service;
pub mod insight_service;
pub mod loader_service;
