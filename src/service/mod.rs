pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod insight_service_impl;
pub mod loader_service_impl;
