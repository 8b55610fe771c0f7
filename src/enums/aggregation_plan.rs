use crate::common::*;

use crate::enums::{sort_order::*, title_column::*};

#[doc = r#"
    Tagged description of the aggregation a chart needs.

    Every chart in the registry carries one of these values instead of its own
    grouping code. The aggregation service interprets the plan against the
    cleaned table, so two charts that differ only by column or truncation share
    the same primitive.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AggregationPlan {
    /// Rows per category of one column, descending by count.
    CategoricalCount {
        column: TitleColumn,
        top_k: Option<usize>,
    },
    /// Rows per (row category, series category), missing cells are zero.
    CrossTabCount {
        row_column: TitleColumn,
        series_column: TitleColumn,
        sort_by: SortKey,
        top_k: Option<usize>,
    },
    /// Rows per release year, optionally split by a second column.
    TimeSeriesCount {
        series_column: Option<TitleColumn>,
        series_filter: Option<&'static [&'static str]>,
    },
    /// Mean movie minutes per group.
    NumericMeanByGroup {
        group_column: TitleColumn,
        sort_by: SortKey,
        top_k: Option<usize>,
    },
    /// Frequency of comma-separated tokens of one column.
    TokenFrequency {
        column: TitleColumn,
        top_k: Option<usize>,
    },
    /// Rows per month of addition, all twelve months.
    MonthOfYearCount,
    /// Movie minutes binned into fixed-width buckets.
    NumericHistogram { bin_width: u32 },
    /// (release year, minutes) pairs of movies.
    YearDurationPoints,
    /// Word frequency over a free-text column.
    TextCorpusFrequency {
        column: TitleColumn,
        max_words: usize,
    },
}
