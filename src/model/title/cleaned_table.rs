use crate::common::*;

use crate::enums::pipeline_error::*;
use crate::model::title::title_record::*;

#[doc = r#"
    Immutable, row-oriented result of the loader.

    Chart operations only ever borrow the records; anything that needs a
    filtered or transformed view builds its own private collection.

    # Fields
    * `records` - cleaned rows in source order
    * `rows_read` - data rows seen in the source file
    * `rows_dropped` - rows excluded because a required field was missing or invalid
    * `field_errors` - per-row derived-field failures, recovered locally
"#]
#[derive(Debug, Getters, CopyGetters)]
pub struct CleanedTable {
    #[getset(get = "pub")]
    records: Vec<TitleRecord>,
    #[getset(get_copy = "pub")]
    rows_read: usize,
    #[getset(get_copy = "pub")]
    rows_dropped: usize,
    #[getset(get = "pub")]
    field_errors: Vec<PipelineError>,
}

impl CleanedTable {
    pub fn new(
        records: Vec<TitleRecord>,
        rows_read: usize,
        rows_dropped: usize,
        field_errors: Vec<PipelineError>,
    ) -> Self {
        Self {
            records,
            rows_read,
            rows_dropped,
            field_errors,
        }
    }

    pub fn rows_kept(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[doc = "Movie rows carrying a parsed duration"]
    pub fn movies_with_minutes(&self) -> impl Iterator<Item = (&TitleRecord, u32)> {
        self.records
            .iter()
            .filter_map(|record| record.movie_minutes().map(|minutes| (record, minutes)))
    }
}
