use crate::common::*;

use crate::enums::{content_type::*, title_column::*};

#[doc = r#"
    One row of the cleaned title table.

    The five required fields (`content_type`, `release_year`, `rating`,
    `country`, `duration`) are guaranteed to be present; the loader drops any row
    that misses one of them. `duration_minutes` and `month_added` are derived
    once at load time and stay `None` when they cannot be computed.

    # Fields
    * `line` - 1-based line number in the source file, used as encounter order
    * `duration_minutes` - only ever set for movies
    * `month_added` - 1..=12 when `date_added` parses
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters, new)]
pub struct TitleRecord {
    #[getset(get_copy = "pub")]
    pub line: usize,
    #[getset(get_copy = "pub")]
    pub content_type: ContentType,
    #[getset(get_copy = "pub")]
    pub release_year: i32,
    #[getset(get = "pub")]
    pub rating: String,
    #[getset(get = "pub")]
    pub country: String,
    #[getset(get = "pub")]
    pub duration: String,
    #[getset(get = "pub")]
    pub listed_in: Option<String>,
    #[getset(get = "pub")]
    pub cast: Option<String>,
    #[getset(get = "pub")]
    pub director: Option<String>,
    #[getset(get = "pub")]
    pub date_added: Option<String>,
    #[getset(get = "pub")]
    pub title: Option<String>,
    #[getset(get_copy = "pub")]
    pub duration_minutes: Option<u32>,
    #[getset(get_copy = "pub")]
    pub month_added: Option<u32>,
}

impl TitleRecord {
    #[doc = "Value of a column as text, `None` for an empty optional cell"]
    pub fn column_value(&self, column: TitleColumn) -> Option<Cow<'_, str>> {
        match column {
            TitleColumn::ContentType => Some(Cow::Borrowed(self.content_type.label())),
            TitleColumn::ReleaseYear => Some(Cow::Owned(self.release_year.to_string())),
            TitleColumn::Rating => Some(Cow::Borrowed(self.rating.as_str())),
            TitleColumn::Country => Some(Cow::Borrowed(self.country.as_str())),
            TitleColumn::Duration => Some(Cow::Borrowed(self.duration.as_str())),
            TitleColumn::ListedIn => self.listed_in.as_deref().map(Cow::Borrowed),
            TitleColumn::Cast => self.cast.as_deref().map(Cow::Borrowed),
            TitleColumn::Director => self.director.as_deref().map(Cow::Borrowed),
            TitleColumn::DateAdded => self.date_added.as_deref().map(Cow::Borrowed),
            TitleColumn::Title => self.title.as_deref().map(Cow::Borrowed),
        }
    }

    pub fn is_movie(&self) -> bool {
        self.content_type == ContentType::Movie
    }

    #[doc = "Minutes of a movie with a valid duration, `None` otherwise"]
    pub fn movie_minutes(&self) -> Option<u32> {
        if self.is_movie() {
            self.duration_minutes
        } else {
            None
        }
    }
}
