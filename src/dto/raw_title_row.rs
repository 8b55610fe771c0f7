use crate::common::*;

use crate::dto::header_index::*;
use crate::enums::title_column::*;
use crate::utils_modules::traits::*;

#[doc = r#"
    A data row exactly as read from the source file, before cleaning.

    Every field is optional: an empty or whitespace-only cell is `None`.

    # Fields
    * `line` - 1-based line number in the source file (header is line 1)
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct RawTitleRow {
    pub line: usize,
    pub content_type: Option<String>,
    pub release_year: Option<String>,
    pub rating: Option<String>,
    pub country: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub cast: Option<String>,
    pub director: Option<String>,
    pub date_added: Option<String>,
    pub title: Option<String>,
}

impl RawTitleRow {
    #[doc = "Raw cell of one column"]
    pub fn cell(&self, column: TitleColumn) -> Option<&str> {
        match column {
            TitleColumn::ContentType => self.content_type.as_deref(),
            TitleColumn::ReleaseYear => self.release_year.as_deref(),
            TitleColumn::Rating => self.rating.as_deref(),
            TitleColumn::Country => self.country.as_deref(),
            TitleColumn::Duration => self.duration.as_deref(),
            TitleColumn::ListedIn => self.listed_in.as_deref(),
            TitleColumn::Cast => self.cast.as_deref(),
            TitleColumn::Director => self.director.as_deref(),
            TitleColumn::DateAdded => self.date_added.as_deref(),
            TitleColumn::Title => self.title.as_deref(),
        }
    }
}

impl FromCsvRecord for RawTitleRow {
    fn from_csv_record(line: usize, record: &StringRecord, header_index: &HeaderIndex) -> Self {
        /* Empty and whitespace-only cells are treated as missing */
        let cell = |column: TitleColumn| -> Option<String> {
            header_index
                .position(column)
                .and_then(|pos| record.get(pos))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        RawTitleRow {
            line,
            content_type: cell(TitleColumn::ContentType),
            release_year: cell(TitleColumn::ReleaseYear),
            rating: cell(TitleColumn::Rating),
            country: cell(TitleColumn::Country),
            duration: cell(TitleColumn::Duration),
            listed_in: cell(TitleColumn::ListedIn),
            cast: cell(TitleColumn::Cast),
            director: cell(TitleColumn::Director),
            date_added: cell(TitleColumn::DateAdded),
            title: cell(TitleColumn::Title),
        }
    }
}
