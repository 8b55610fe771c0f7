use crate::common::*;

use crate::dto::{raw_title_batch::*, raw_title_row::*};
use crate::enums::{content_type::*, pipeline_error::*, title_column::*};
use crate::model::title::{cleaned_table::*, title_record::*};
use crate::traits::{repository_traits::title_repository::*, service_traits::loader_service::*};
use crate::utils_modules::{text_utils::*, time_utils::*};

const REQUIRED_COLUMNS: [TitleColumn; 5] = [
    TitleColumn::ContentType,
    TitleColumn::ReleaseYear,
    TitleColumn::Rating,
    TitleColumn::Country,
    TitleColumn::Duration,
];

#[derive(Debug, new)]
pub struct LoaderServiceImpl<R: TitleRepository> {
    title_repository: R,
}

#[cfg(test)]
impl<R: TitleRepository> LoaderServiceImpl<R> {
    #[doc = "Reads an already opened source, used for in-memory fixtures"]
    pub fn load_from_reader(
        &self,
        reader: Box<dyn Read + '_>,
    ) -> Result<CleanedTable, PipelineError> {
        let batch: RawTitleBatch = self.title_repository.read_raw_rows_from_reader(reader)?;
        Ok(self.clean_rows(batch))
    }
}

impl<R: TitleRepository> LoaderServiceImpl<R> {
    #[doc = r#"
        Turns one raw row into a cleaned record.

        1. All five required cells must be present, otherwise the row is dropped
        2. `type` and `release_year` must parse, otherwise the row is dropped and
           the failure is recorded
        3. Movie durations are parsed into minutes; a malformed duration is
           recorded but the row is kept without minutes
        4. `date_added` is parsed into a month when possible

        # Returns
        * `Ok(record)` together with recovered field errors, or
        * `Err(errors)` when the row has to leave the table (possibly empty when
          a required cell is simply missing)
    "#]
    fn clean_row(
        &self,
        raw: RawTitleRow,
    ) -> Result<(TitleRecord, Option<PipelineError>), Option<PipelineError>> {
        if REQUIRED_COLUMNS.iter().any(|column| raw.cell(*column).is_none()) {
            return Err(None);
        }

        let line: usize = raw.line;
        let field_error = |column: TitleColumn, message: String| PipelineError::FieldParse {
            line,
            column: column.header_name().to_string(),
            message,
        };

        let RawTitleRow {
            content_type,
            release_year,
            rating,
            country,
            duration,
            listed_in,
            cast,
            director,
            date_added,
            title,
            ..
        } = raw;

        let content_type: ContentType = content_type
            .unwrap_or_default()
            .parse::<ContentType>()
            .map_err(|e| Some(field_error(TitleColumn::ContentType, format!("{:#}", e))))?;

        let release_year: i32 = parse_release_year(&release_year.unwrap_or_default())
            .map_err(|e| Some(field_error(TitleColumn::ReleaseYear, format!("{:#}", e))))?;

        let duration: String = duration.unwrap_or_default();

        let (duration_minutes, duration_error) = match content_type {
            ContentType::Movie => match parse_duration_minutes(&duration) {
                Ok(minutes) => (Some(minutes), None),
                Err(e) => (
                    None,
                    Some(field_error(TitleColumn::Duration, format!("{:#}", e))),
                ),
            },
            ContentType::TvShow => (None, None),
        };

        let month_added: Option<u32> = date_added.as_deref().and_then(parse_month_added);

        let record: TitleRecord = TitleRecord::new(
            line,
            content_type,
            release_year,
            rating.unwrap_or_default(),
            country.unwrap_or_default(),
            duration,
            listed_in,
            cast,
            director,
            date_added,
            title,
            duration_minutes,
            month_added,
        );

        Ok((record, duration_error))
    }
}

impl<R: TitleRepository> LoaderService for LoaderServiceImpl<R> {
    fn load(&self, path: &Path) -> Result<CleanedTable, PipelineError> {
        let batch: RawTitleBatch = self.title_repository.read_raw_rows(path)?;
        Ok(self.clean_rows(batch))
    }

    fn clean_rows(&self, batch: RawTitleBatch) -> CleanedTable {
        let rows_read: usize = batch.rows_read();
        let RawTitleBatch {
            rows,
            decode_errors,
        } = batch;

        let mut field_errors: Vec<PipelineError> = decode_errors;
        let mut records: Vec<TitleRecord> = Vec::with_capacity(rows.len());
        let mut rows_dropped: usize = field_errors.len();

        for raw in rows {
            match self.clean_row(raw) {
                Ok((record, recovered)) => {
                    if let Some(err) = recovered {
                        warn!("[LoaderServiceImpl->clean_rows] {}", err);
                        field_errors.push(err);
                    }
                    records.push(record);
                }
                Err(dropped) => {
                    rows_dropped += 1;
                    if let Some(err) = dropped {
                        warn!("[LoaderServiceImpl->clean_rows] row dropped: {}", err);
                        field_errors.push(err);
                    }
                }
            }
        }

        info!(
            "[LoaderServiceImpl->clean_rows] rows read: {}, kept: {}, dropped: {}, field errors: {}",
            rows_read,
            records.len(),
            rows_dropped,
            field_errors.len()
        );

        CleanedTable::new(records, rows_read, rows_dropped, field_errors)
    }
}
