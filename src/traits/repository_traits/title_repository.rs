use crate::common::*;

use crate::dto::raw_title_batch::*;
use crate::enums::pipeline_error::*;

pub trait TitleRepository: Send + Sync {
    #[doc = "
        Reads every data row of the title table at `path`.
        # Errors
        * `PipelineError::DataSource` - unreadable file or missing required columns
    "]
    fn read_raw_rows(&self, path: &Path) -> Result<RawTitleBatch, PipelineError>;

    #[doc = "Same as `read_raw_rows` for an already opened source"]
    fn read_raw_rows_from_reader(
        &self,
        reader: Box<dyn Read + '_>,
    ) -> Result<RawTitleBatch, PipelineError>;
}
