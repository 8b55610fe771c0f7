use crate::common::*;

use crate::enums::{pipeline_error::*, title_column::*};

#[doc = r#"
    Position of every required column inside the source header.

    Column order in the file is free and unknown columns are ignored. Building
    the index fails with `PipelineError::DataSource` naming every required column
    that is absent, so a broken file is rejected before any row is read.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: Vec<usize>,
}

impl HeaderIndex {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, PipelineError> {
        let names: Vec<String> = headers
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        let mut positions: Vec<usize> = vec![0; TitleColumn::ALL.len()];
        let mut missing: Vec<&'static str> = Vec::new();

        for (slot, column) in TitleColumn::ALL.iter().enumerate() {
            match names.iter().position(|name| name == column.header_name()) {
                Some(pos) => positions[slot] = pos,
                None => missing.push(column.header_name()),
            }
        }

        if !missing.is_empty() {
            return Err(PipelineError::DataSource(format!(
                "required column(s) missing from header: {}",
                missing.join(", ")
            )));
        }

        Ok(HeaderIndex { positions })
    }

    #[doc = "Field position of a column in each record"]
    pub fn position(&self, column: TitleColumn) -> Option<usize> {
        TitleColumn::ALL
            .iter()
            .position(|candidate| *candidate == column)
            .map(|slot| self.positions[slot])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_columns_in_any_order() {
        let headers: StringRecord = StringRecord::from(vec![
            "show_id", "title", "type", "director", "cast", "country", "date_added",
            "release_year", "rating", "duration", "listed_in", "description",
        ]);
        let index: HeaderIndex = HeaderIndex::from_headers(&headers).unwrap();

        assert_eq!(index.position(TitleColumn::Title), Some(1));
        assert_eq!(index.position(TitleColumn::ContentType), Some(2));
        assert_eq!(index.position(TitleColumn::ListedIn), Some(10));
    }

    #[test]
    fn reports_every_missing_column() {
        let headers: StringRecord =
            StringRecord::from(vec!["type", "release_year", "rating", "country", "title"]);

        match HeaderIndex::from_headers(&headers) {
            Err(PipelineError::DataSource(message)) => {
                assert!(message.contains("duration"));
                assert!(message.contains("listed_in"));
                assert!(message.contains("date_added"));
                assert!(!message.contains("rating"));
            }
            other => panic!("expected a data source error, got {:?}", other),
        }
    }
}
