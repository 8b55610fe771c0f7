pub mod chart_output_config;
pub mod data_source_config;
pub mod system_config;
pub mod total_config;
