pub mod chart_registry;
pub mod chart_spec;
pub mod color_scheme;
