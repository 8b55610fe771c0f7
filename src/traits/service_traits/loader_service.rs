use crate::common::*;

use crate::dto::raw_title_batch::*;
use crate::enums::pipeline_error::*;
use crate::model::title::cleaned_table::*;

pub trait LoaderService: Send + Sync {
    #[doc = "
        Reads the table at `path` and returns the cleaned table.
        # Errors
        * `PipelineError::DataSource` - the table cannot be read at all
    "]
    fn load(&self, path: &Path) -> Result<CleanedTable, PipelineError>;

    #[doc = "Applies the required-field invariant and computes derived fields"]
    fn clean_rows(&self, batch: RawTitleBatch) -> CleanedTable;
}
