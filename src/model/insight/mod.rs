pub mod insight;
pub mod insight_registry;
