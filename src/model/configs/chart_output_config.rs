use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone, new)]
#[getset(get = "pub")]
pub struct ChartOutputConfig {
    pub output_dir: PathBuf,
}
