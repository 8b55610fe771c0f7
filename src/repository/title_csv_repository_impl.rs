use crate::common::*;

use crate::dto::{header_index::*, raw_title_batch::*, raw_title_row::*};
use crate::enums::pipeline_error::*;
use crate::model::configs::data_source_config::*;
use crate::traits::repository_traits::title_repository::*;
use crate::utils_modules::traits::*;

#[derive(Debug, Clone, new)]
pub struct TitleCsvRepositoryImpl {
    delimiter: u8,
}

impl TitleCsvRepositoryImpl {
    #[doc = "Builds the repository from the `[data_source]` configuration section"]
    pub fn from_config(data_source_config: &DataSourceConfig) -> anyhow::Result<Self> {
        Ok(TitleCsvRepositoryImpl::new(
            data_source_config.delimiter_byte()?,
        ))
    }
}

impl TitleRepository for TitleCsvRepositoryImpl {
    fn read_raw_rows(&self, path: &Path) -> Result<RawTitleBatch, PipelineError> {
        let file: fs::File = fs::File::open(path).map_err(|e| {
            PipelineError::DataSource(format!("failed to open '{}': {}", path.display(), e))
        })?;

        info!(
            "[TitleCsvRepositoryImpl->read_raw_rows] Reading title table from {}",
            path.display()
        );

        self.read_raw_rows_from_reader(Box::new(file))
    }

    fn read_raw_rows_from_reader(
        &self,
        reader: Box<dyn Read + '_>,
    ) -> Result<RawTitleBatch, PipelineError> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: StringRecord = csv_reader
            .headers()
            .map_err(|e| PipelineError::DataSource(format!("failed to read header: {}", e)))?
            .clone();

        let header_index: HeaderIndex = HeaderIndex::from_headers(&headers)?;

        let mut rows: Vec<RawTitleRow> = Vec::new();
        let mut decode_errors: Vec<PipelineError> = Vec::new();

        for (idx, result) in csv_reader.records().enumerate() {
            /* records() starts right after the header, which is line 1 */
            let line: usize = idx + 2;

            match result {
                Ok(record) => rows.push(RawTitleRow::from_csv_record(line, &record, &header_index)),
                Err(e) => {
                    let err: PipelineError = PipelineError::FieldParse {
                        line,
                        column: "*".to_string(),
                        message: format!("undecodable row: {}", e),
                    };
                    warn!("[TitleCsvRepositoryImpl->read_raw_rows_from_reader] {}", err);
                    decode_errors.push(err);
                }
            }
        }

        Ok(RawTitleBatch::new(rows, decode_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

    fn read(content: &str) -> Result<RawTitleBatch, PipelineError> {
        TitleCsvRepositoryImpl::new(b',').read_raw_rows_from_reader(Box::new(content.as_bytes()))
    }

    #[test]
    fn reads_rows_with_quoted_multi_value_cells() {
        let content: String = format!(
            "{}\ns1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,desc\n\
             s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas\",desc\n",
            HEADER
        );

        let batch: RawTitleBatch = read(&content).unwrap();
        assert_eq!(batch.rows().len(), 2);
        assert_eq!(batch.rows_read(), 2);

        let first: &RawTitleRow = &batch.rows()[0];
        assert_eq!(*first.line(), 2);
        assert_eq!(first.content_type().as_deref(), Some("Movie"));
        assert_eq!(first.cast(), &None);
        assert_eq!(first.date_added().as_deref(), Some("September 25, 2021"));

        let second: &RawTitleRow = &batch.rows()[1];
        assert_eq!(second.cast().as_deref(), Some("Ama Qamata, Khosi Ngema"));
        assert_eq!(second.listed_in().as_deref(), Some("International TV Shows, TV Dramas"));
    }

    #[test]
    fn missing_required_column_is_a_data_source_error() {
        let content: &str = "type,title,release_year\nMovie,Example,2020\n";
        assert!(matches!(read(content), Err(PipelineError::DataSource(_))));
    }

    #[test]
    fn missing_file_is_a_data_source_error() {
        let repository: TitleCsvRepositoryImpl = TitleCsvRepositoryImpl::new(b',');
        let result = repository.read_raw_rows(Path::new("./no/such/titles.csv"));
        assert!(matches!(result, Err(PipelineError::DataSource(_))));
    }

    #[test]
    fn honours_the_configured_delimiter() {
        let content: String = format!(
            "{}\ns1\tMovie\tExample\t\t\tIndia\t\t2019\tTV-14\t120 min\tDramas\tdesc\n",
            HEADER.replace(',', "\t")
        );
        let batch: RawTitleBatch = TitleCsvRepositoryImpl::new(b'\t')
            .read_raw_rows_from_reader(Box::new(content.as_bytes()))
            .unwrap();

        assert_eq!(batch.rows()[0].duration().as_deref(), Some("120 min"));
        assert_eq!(batch.rows()[0].director(), &None);
    }
}
