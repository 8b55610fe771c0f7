use crate::common::*;

#[doc = "Columns of the source title table that the pipeline reads"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TitleColumn {
    ContentType,
    ReleaseYear,
    Rating,
    Country,
    Duration,
    ListedIn,
    Cast,
    Director,
    DateAdded,
    Title,
}

impl TitleColumn {
    pub const ALL: [TitleColumn; 10] = [
        TitleColumn::ContentType,
        TitleColumn::ReleaseYear,
        TitleColumn::Rating,
        TitleColumn::Country,
        TitleColumn::Duration,
        TitleColumn::ListedIn,
        TitleColumn::Cast,
        TitleColumn::Director,
        TitleColumn::DateAdded,
        TitleColumn::Title,
    ];

    #[doc = "Header name in the delimited input file"]
    pub fn header_name(&self) -> &'static str {
        match self {
            TitleColumn::ContentType => "type",
            TitleColumn::ReleaseYear => "release_year",
            TitleColumn::Rating => "rating",
            TitleColumn::Country => "country",
            TitleColumn::Duration => "duration",
            TitleColumn::ListedIn => "listed_in",
            TitleColumn::Cast => "cast",
            TitleColumn::Director => "director",
            TitleColumn::DateAdded => "date_added",
            TitleColumn::Title => "title",
        }
    }
}

impl fmt::Display for TitleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}
