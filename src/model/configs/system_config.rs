use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub max_parallel_charts: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            max_parallel_charts: 4,
        }
    }
}
