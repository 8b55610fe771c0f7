use crate::common::*;

use crate::model::configs::{chart_output_config::*, data_source_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub data_source: DataSourceConfig,
    pub chart_output: ChartOutputConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl TotalConfig {
    #[doc = "Reads the TOML configuration file into a `TotalConfig` instance"]
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        info!("[TotalConfig->load] Reading configuration from {}", config_path);

        read_toml_from_file::<TotalConfig>(config_path).with_context(|| {
            format!(
                "[TotalConfig->load] Failed to convert the data from '{}' into the TotalConfig structure.",
                config_path
            )
        })
    }
}
