use crate::common::*;

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Deserialize, Serialize, Getters, Clone, new)]
#[getset(get = "pub")]
pub struct DataSourceConfig {
    pub input_path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl DataSourceConfig {
    #[doc = "Delimiter as the single byte expected by the csv reader"]
    pub fn delimiter_byte(&self) -> anyhow::Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(anyhow!(
                "[DataSourceConfig->delimiter_byte] Delimiter must be a single ASCII character: {:?}",
                self.delimiter
            ))
        }
    }
}
