use crate::common::*;

use crate::dto::raw_title_row::*;
use crate::enums::pipeline_error::*;

#[doc = "Everything the repository read from one source file"]
#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct RawTitleBatch {
    pub rows: Vec<RawTitleRow>,
    /// Rows the csv reader could not decode
    pub decode_errors: Vec<PipelineError>,
}

impl RawTitleBatch {
    #[doc = "Number of data rows in the source, decodable or not"]
    pub fn rows_read(&self) -> usize {
        self.rows.len() + self.decode_errors.len()
    }
}
