use crate::common::*;

use crate::dto::header_index::*;

/* csv record → raw row conversion shared by every tabular source */
pub trait FromCsvRecord
where
    Self: Sized,
{
    fn from_csv_record(line: usize, record: &StringRecord, header_index: &HeaderIndex) -> Self;
}
