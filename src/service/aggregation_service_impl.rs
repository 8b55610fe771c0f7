use crate::common::*;

use crate::dto::{category_count::*, chart_data::*};
use crate::enums::{
    aggregation_plan::*, chart_precondition::*, content_type::*, sort_order::*, title_column::*,
};
use crate::model::title::cleaned_table::*;
use crate::traits::service_traits::aggregation_service::*;
use crate::utils_modules::{text_utils::*, time_utils::*};

/* Upper bound on histogram bars, whatever the spread of durations */
const MAX_HISTOGRAM_BINS: u32 = 60;

#[doc = r#"
    Parametrized aggregation primitives over the cleaned title table.

    Every primitive walks the records in source order and groups with an
    insertion-ordered map, then ranks with a stable sort. Equal counts therefore
    keep the order in which their categories were first encountered, and the
    same table always produces the same values.
"#]
#[derive(Debug, Clone, Default, new)]
pub struct AggregationServiceImpl;

impl AggregationServiceImpl {
    #[doc = "Rows per category of `column`, descending by count, optionally top-K"]
    pub fn count_by_category(
        &self,
        table: &CleanedTable,
        column: TitleColumn,
        top_k: Option<usize>,
    ) -> Vec<CategoryCount> {
        let mut counts: IndexMap<String, u64> = IndexMap::new();

        for record in table.records() {
            if let Some(value) = record.column_value(column) {
                *counts.entry(value.into_owned()).or_insert(0) += 1;
            }
        }

        rank_counts(counts, top_k)
    }

    #[doc = r#"
        Cross tabulation of `row_column` × `series_column`.

        Series are the observed values of `series_column` in encounter order.
        Rows start in encounter order and are then ranked by `sort_by`; cells
        that never occur are zero.
    "#]
    pub fn cross_tab_count(
        &self,
        table: &CleanedTable,
        row_column: TitleColumn,
        series_column: TitleColumn,
        sort_by: SortKey,
        top_k: Option<usize>,
    ) -> CrossTab {
        let mut series_names: IndexMap<String, ()> = IndexMap::new();
        let mut cells: IndexMap<String, IndexMap<String, u64>> = IndexMap::new();

        for record in table.records() {
            let (Some(row), Some(series)) =
                (record.column_value(row_column), record.column_value(series_column))
            else {
                continue;
            };

            series_names.entry(series.to_string()).or_insert(());
            *cells
                .entry(row.into_owned())
                .or_default()
                .entry(series.into_owned())
                .or_insert(0) += 1;
        }

        let mut rows: Vec<(String, IndexMap<String, u64>)> = cells.into_iter().collect();

        rows.sort_by(|(left_key, left), (right_key, right)| match sort_by {
            SortKey::Key(order) => order.apply(compare_group_keys(left_key, right_key)),
            SortKey::Value(order) => {
                let left_total: u64 = left.values().sum();
                let right_total: u64 = right.values().sum();
                order.apply(left_total.cmp(&right_total))
            }
            SortKey::Series(name, order) => {
                let left_cnt: u64 = left.get(name).copied().unwrap_or(0);
                let right_cnt: u64 = right.get(name).copied().unwrap_or(0);
                order.apply(left_cnt.cmp(&right_cnt))
            }
        });

        if let Some(k) = top_k {
            rows.truncate(k);
        }

        let row_labels: Vec<String> = rows.iter().map(|(label, _)| label.clone()).collect();

        let series: Vec<NamedSeries> = series_names
            .keys()
            .map(|name| {
                let values: Vec<u64> = rows
                    .iter()
                    .map(|(_, row)| row.get(name).copied().unwrap_or(0))
                    .collect();
                NamedSeries::new(name.clone(), values)
            })
            .collect();

        CrossTab::new(row_labels, series)
    }

    #[doc = r#"
        Rows per release year in ascending year order.

        Without `series_column` the table has a single `Titles` series. With it,
        every observed value becomes a series and missing years read zero. A
        `series_filter` keeps only the listed values, in the listed order, that
        were actually observed.
    "#]
    pub fn time_series_count(
        &self,
        table: &CleanedTable,
        series_column: Option<TitleColumn>,
        series_filter: Option<&[&str]>,
    ) -> CrossTab {
        let Some(series_column) = series_column else {
            let mut per_year: BTreeMap<i32, u64> = BTreeMap::new();
            for record in table.records() {
                *per_year.entry(record.release_year()).or_insert(0) += 1;
            }

            let (row_labels, values): (Vec<String>, Vec<u64>) = per_year
                .into_iter()
                .map(|(year, cnt)| (year.to_string(), cnt))
                .unzip();

            return CrossTab::new(row_labels, vec![NamedSeries::new("Titles".to_string(), values)]);
        };

        let mut cross_tab: CrossTab = self.cross_tab_count(
            table,
            TitleColumn::ReleaseYear,
            series_column,
            SortKey::Key(SortOrder::Asc),
            None,
        );

        if let Some(filter) = series_filter {
            let mut observed: Vec<NamedSeries> = std::mem::take(&mut cross_tab.series);
            cross_tab.series = filter
                .iter()
                .filter_map(|wanted| {
                    observed
                        .iter()
                        .position(|series| series.name == *wanted)
                        .map(|pos| observed.swap_remove(pos))
                })
                .collect();
        }

        cross_tab
    }

    #[doc = r#"
        Mean movie minutes per group of `group_column`.

        Only movies with a parsed duration contribute; TV shows and movies with
        a malformed duration are left out of both the sum and the count.
    "#]
    pub fn mean_minutes_by_group(
        &self,
        table: &CleanedTable,
        group_column: TitleColumn,
        sort_by: SortKey,
        top_k: Option<usize>,
    ) -> Vec<GroupMean> {
        let mut sums: IndexMap<String, (u64, u64)> = IndexMap::new();

        for (record, minutes) in table.movies_with_minutes() {
            if let Some(group) = record.column_value(group_column) {
                let entry: &mut (u64, u64) = sums.entry(group.into_owned()).or_insert((0, 0));
                entry.0 += u64::from(minutes);
                entry.1 += 1;
            }
        }

        let mut means: Vec<GroupMean> = sums
            .into_iter()
            .map(|(name, (sum, samples))| GroupMean::new(name, sum as f64 / samples as f64, samples))
            .collect();

        means.sort_by(|left, right| match sort_by {
            SortKey::Key(order) => order.apply(compare_group_keys(&left.name, &right.name)),
            SortKey::Value(order) | SortKey::Series(_, order) => {
                order.apply(left.mean.total_cmp(&right.mean))
            }
        });

        if let Some(k) = top_k {
            means.truncate(k);
        }

        means
    }

    #[doc = "Frequency of the comma-separated tokens of `column`, descending, optionally top-K"]
    pub fn token_frequency(
        &self,
        table: &CleanedTable,
        column: TitleColumn,
        top_k: Option<usize>,
    ) -> Vec<CategoryCount> {
        let mut counts: IndexMap<String, u64> = IndexMap::new();

        for record in table.records() {
            if let Some(value) = record.column_value(column) {
                for token in split_tokens(&value) {
                    *counts.entry(token.to_string()).or_insert(0) += 1;
                }
            }
        }

        rank_counts(counts, top_k)
    }

    #[doc = "Rows per month of addition, January to December, absent months are zero"]
    pub fn month_of_year_count(&self, table: &CleanedTable) -> Vec<CategoryCount> {
        let mut months: [u64; 12] = [0; 12];

        for month in table.records().iter().filter_map(|record| record.month_added()) {
            if (1..=12).contains(&month) {
                months[(month - 1) as usize] += 1;
            }
        }

        months
            .iter()
            .enumerate()
            .map(|(idx, cnt)| CategoryCount::new(month_abbreviation(idx as u32 + 1).to_string(), *cnt))
            .collect()
    }

    #[doc = r#"
        Movie minutes in fixed-width buckets from the lowest to the highest occupied bucket.

        The bucket width starts at `bin_width` and is widened in multiples of it
        until the span fits in `MAX_HISTOGRAM_BINS` buckets, so a single extreme
        duration cannot blow up the number of bars.
    "#]
    pub fn minutes_histogram(&self, table: &CleanedTable, bin_width: u32) -> Vec<HistogramBin> {
        let (Some(min_minutes), Some(max_minutes)) = (
            table.movies_with_minutes().map(|(_, minutes)| minutes).min(),
            table.movies_with_minutes().map(|(_, minutes)| minutes).max(),
        ) else {
            return Vec::new();
        };

        let step: u32 = bin_width.max(1);
        let span = |width: u32| max_minutes / width - min_minutes / width + 1;

        let mut width: u32 = step;
        if span(width) > MAX_HISTOGRAM_BINS {
            width = step.saturating_mul(span(width).div_ceil(MAX_HISTOGRAM_BINS));
            while span(width) > MAX_HISTOGRAM_BINS {
                width = width.saturating_add(step);
            }
        }

        let mut bins: BTreeMap<u32, u64> = BTreeMap::new();
        for (_, minutes) in table.movies_with_minutes() {
            *bins.entry(minutes / width).or_insert(0) += 1;
        }

        (min_minutes / width..=max_minutes / width)
            .map(|bin| {
                let lower: u32 = bin.saturating_mul(width);
                HistogramBin::new(
                    lower,
                    lower.saturating_add(width),
                    bins.get(&bin).copied().unwrap_or(0),
                )
            })
            .collect()
    }

    #[doc = "(release year, minutes) of every movie with a parsed duration, in source order"]
    pub fn year_duration_points(&self, table: &CleanedTable) -> Vec<YearDuration> {
        table
            .movies_with_minutes()
            .map(|(record, minutes)| YearDuration::new(record.release_year(), minutes))
            .collect()
    }

    #[doc = "Most frequent words of a free-text column, descending, at most `max_words`"]
    pub fn corpus_word_frequency(
        &self,
        table: &CleanedTable,
        column: TitleColumn,
        max_words: usize,
    ) -> Vec<CategoryCount> {
        let mut counts: IndexMap<String, u64> = IndexMap::new();

        for record in table.records() {
            if let Some(text) = record.column_value(column) {
                for word in corpus_words(&text) {
                    *counts.entry(word).or_insert(0) += 1;
                }
            }
        }

        rank_counts(counts, Some(max_words))
    }
}

impl AggregationService for AggregationServiceImpl {
    fn check_precondition(
        &self,
        table: &CleanedTable,
        precondition: &ChartPrecondition,
    ) -> Option<String> {
        let satisfied: bool = match precondition {
            ChartPrecondition::AnyMonthAdded => table
                .records()
                .iter()
                .any(|record| record.month_added().is_some()),
            ChartPrecondition::AnyRatingOf(ratings) => table
                .records()
                .iter()
                .any(|record| ratings.iter().any(|rating| *rating == record.rating())),
            ChartPrecondition::AnyMovieMinutes => table.movies_with_minutes().next().is_some(),
        };

        if satisfied {
            return None;
        }

        Some(match precondition {
            ChartPrecondition::AnyMonthAdded => {
                "no row has a parseable date_added value".to_string()
            }
            ChartPrecondition::AnyRatingOf(ratings) => {
                format!("none of the ratings [{}] occur", ratings.join(", "))
            }
            ChartPrecondition::AnyMovieMinutes => {
                format!("no {} row has a parseable duration", ContentType::Movie)
            }
        })
    }

    fn aggregate(&self, table: &CleanedTable, plan: &AggregationPlan) -> anyhow::Result<ChartData> {
        let data: ChartData = match *plan {
            AggregationPlan::CategoricalCount { column, top_k } => {
                ChartData::Counts(self.count_by_category(table, column, top_k))
            }
            AggregationPlan::CrossTabCount {
                row_column,
                series_column,
                sort_by,
                top_k,
            } => ChartData::Table(self.cross_tab_count(
                table,
                row_column,
                series_column,
                sort_by,
                top_k,
            )),
            AggregationPlan::TimeSeriesCount {
                series_column,
                series_filter,
            } => ChartData::Table(self.time_series_count(table, series_column, series_filter)),
            AggregationPlan::NumericMeanByGroup {
                group_column,
                sort_by,
                top_k,
            } => ChartData::Means(self.mean_minutes_by_group(table, group_column, sort_by, top_k)),
            AggregationPlan::TokenFrequency { column, top_k } => {
                ChartData::Counts(self.token_frequency(table, column, top_k))
            }
            AggregationPlan::MonthOfYearCount => ChartData::Counts(self.month_of_year_count(table)),
            AggregationPlan::NumericHistogram { bin_width } => {
                if bin_width == 0 {
                    return Err(anyhow!(
                        "[AggregationServiceImpl->aggregate] Histogram bin width must be positive"
                    ));
                }
                ChartData::Bins(self.minutes_histogram(table, bin_width))
            }
            AggregationPlan::YearDurationPoints => ChartData::Points(self.year_duration_points(table)),
            AggregationPlan::TextCorpusFrequency { column, max_words } => {
                ChartData::Words(self.corpus_word_frequency(table, column, max_words))
            }
        };

        Ok(data)
    }
}

#[doc = "Stable descending ranking of an encounter-ordered count map"]
fn rank_counts(counts: IndexMap<String, u64>, top_k: Option<usize>) -> Vec<CategoryCount> {
    let mut ranked: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount::new(name, count))
        .collect();

    /* sort_by is stable: ties keep encounter order */
    ranked.sort_by(|left, right| right.count.cmp(&left.count));

    if let Some(k) = top_k {
        ranked.truncate(k);
    }

    ranked
}

#[doc = "Orders group keys numerically when both are integers, lexically otherwise"]
fn compare_group_keys(left: &str, right: &str) -> Ordering {
    match (left.parse::<i64>(), right.parse::<i64>()) {
        (Ok(left_num), Ok(right_num)) => left_num.cmp(&right_num),
        _ => left.cmp(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_id::*;
    use crate::model::chart::chart_registry::*;
    use crate::model::title::title_record::*;

    fn movie(line: usize, year: i32, rating: &str, country: &str, minutes: Option<u32>) -> TitleRecord {
        TitleRecord::new(
            line,
            ContentType::Movie,
            year,
            rating.to_string(),
            country.to_string(),
            minutes.map_or("n/a".to_string(), |m| format!("{} min", m)),
            Some("Dramas, International Movies".to_string()),
            None,
            None,
            None,
            Some("The Night Train".to_string()),
            minutes,
            None,
        )
    }

    fn show(line: usize, year: i32, rating: &str, country: &str) -> TitleRecord {
        TitleRecord::new(
            line,
            ContentType::TvShow,
            year,
            rating.to_string(),
            country.to_string(),
            "2 Seasons".to_string(),
            Some("Dramas, TV Comedies".to_string()),
            None,
            None,
            Some("March 3, 2020".to_string()),
            Some("The Night Shift".to_string()),
            None,
            Some(3),
        )
    }

    fn table(records: Vec<TitleRecord>) -> CleanedTable {
        let rows: usize = records.len();
        CleanedTable::new(records, rows, 0, Vec::new())
    }

    #[test]
    fn counts_types_in_descending_order() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            show(2, 2019, "TV-MA", "India"),
            movie(3, 2019, "R", "India", Some(90)),
            movie(4, 2020, "PG", "Japan", Some(100)),
        ]);

        let counts: Vec<CategoryCount> =
            service.count_by_category(&table, TitleColumn::ContentType, None);

        assert_eq!(
            counts,
            vec![
                CategoryCount::new("Movie".to_string(), 2),
                CategoryCount::new("TV Show".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ties_keep_encounter_order() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "Spain", Some(90)),
            movie(3, 2019, "R", "Brazil", Some(90)),
            movie(4, 2019, "R", "Korea", Some(90)),
            movie(5, 2019, "R", "Brazil", Some(90)),
            movie(6, 2019, "R", "Korea", Some(90)),
        ]);

        let names: Vec<String> = service
            .count_by_category(&table, TitleColumn::Country, Some(2))
            .into_iter()
            .map(|count| count.name)
            .collect();

        assert_eq!(names, vec!["Brazil".to_string(), "Korea".to_string()]);
    }

    #[test]
    fn time_series_fills_missing_years_with_zero() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "India", Some(90)),
            show(3, 2018, "TV-MA", "India"),
            movie(4, 2019, "R", "India", Some(95)),
        ]);

        let cross_tab: CrossTab =
            service.time_series_count(&table, Some(TitleColumn::ContentType), None);

        assert_eq!(cross_tab.row_labels, vec!["2018".to_string(), "2019".to_string()]);
        assert_eq!(cross_tab.value("2018", "Movie"), Some(0));
        assert_eq!(cross_tab.value("2018", "TV Show"), Some(1));
        assert_eq!(cross_tab.value("2019", "Movie"), Some(2));
        assert_eq!(cross_tab.value("2019", "TV Show"), Some(0));
    }

    #[test]
    fn release_years_sort_numerically() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2001, "R", "India", Some(90)),
            movie(3, 999, "R", "India", Some(90)),
            movie(4, 2010, "R", "India", Some(90)),
        ]);

        let cross_tab: CrossTab =
            service.time_series_count(&table, Some(TitleColumn::ContentType), None);

        assert_eq!(
            cross_tab.row_labels,
            vec!["999".to_string(), "2001".to_string(), "2010".to_string()]
        );
    }

    #[test]
    fn rating_filter_keeps_only_observed_tracked_ratings() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "PG", "India", Some(90)),
            movie(3, 2019, "TV-Y", "India", Some(90)),
            movie(4, 2020, "R", "India", Some(90)),
        ]);

        let cross_tab: CrossTab = service.time_series_count(
            &table,
            Some(TitleColumn::Rating),
            Some(TRACKED_RATINGS),
        );

        let names: Vec<&str> = cross_tab
            .series
            .iter()
            .map(|series| series.name.as_str())
            .collect();
        assert_eq!(names, vec!["R", "PG"]);
        assert_eq!(cross_tab.value("2020", "PG"), Some(0));
    }

    #[test]
    fn mean_minutes_ignore_tv_shows_and_malformed_durations() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "India", Some(100)),
            movie(3, 2019, "R", "India", None),
            show(4, 2019, "TV-MA", "India"),
            movie(5, 2019, "R", "India", Some(120)),
        ]);

        let means: Vec<GroupMean> = service.mean_minutes_by_group(
            &table,
            TitleColumn::ReleaseYear,
            SortKey::Key(SortOrder::Asc),
            None,
        );

        assert_eq!(means.len(), 1);
        assert_eq!(means[0].samples, 2);
        assert!((means[0].mean - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn top_countries_rank_by_movie_series() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            show(2, 2019, "TV-MA", "Japan"),
            show(3, 2019, "TV-MA", "Japan"),
            show(4, 2019, "TV-MA", "Japan"),
            movie(5, 2019, "R", "India", Some(90)),
        ]);

        let cross_tab: CrossTab = service.cross_tab_count(
            &table,
            TitleColumn::Country,
            TitleColumn::ContentType,
            SortKey::Series("Movie", SortOrder::Desc),
            None,
        );

        assert_eq!(cross_tab.row_labels, vec!["India".to_string(), "Japan".to_string()]);
        assert_eq!(cross_tab.value("Japan", "Movie"), Some(0));
    }

    #[test]
    fn genre_tokens_are_split_and_trimmed() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "India", Some(90)),
            show(3, 2019, "TV-MA", "India"),
        ]);

        let counts: Vec<CategoryCount> =
            service.token_frequency(&table, TitleColumn::ListedIn, None);

        assert_eq!(counts[0], CategoryCount::new("Dramas".to_string(), 2));
        assert!(counts.iter().any(|count| count.name == "TV Comedies"));
    }

    #[test]
    fn months_always_cover_the_whole_year() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![show(2, 2019, "TV-MA", "India")]);

        let months: Vec<CategoryCount> = service.month_of_year_count(&table);

        assert_eq!(months.len(), 12);
        assert_eq!(months[2], CategoryCount::new("Mar".to_string(), 1));
        assert_eq!(months.iter().map(|month| month.count).sum::<u64>(), 1);
    }

    #[test]
    fn histogram_spans_occupied_bins() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "India", Some(61)),
            movie(3, 2019, "R", "India", Some(95)),
            movie(4, 2019, "R", "India", Some(99)),
        ]);

        let bins: Vec<HistogramBin> = service.minutes_histogram(&table, 15);

        assert_eq!(bins.first().map(|bin| bin.lower), Some(60));
        assert_eq!(bins.last().map(|bin| bin.lower), Some(90));
        assert_eq!(bins.iter().map(|bin| bin.count).collect::<Vec<u64>>(), vec![1, 0, 2]);
    }

    #[test]
    fn extreme_duration_widens_bins_instead_of_multiplying_them() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "India", Some(90)),
            movie(3, 2019, "R", "India", Some(20_000_000)),
        ]);

        let bins: Vec<HistogramBin> = service.minutes_histogram(&table, 10);

        assert!(!bins.is_empty());
        assert!(bins.len() as u32 <= MAX_HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|bin| bin.count).sum::<u64>(), 2);

        let width: u32 = bins[0].upper - bins[0].lower;
        assert_eq!(width % 10, 0);
        assert!(bins[0].lower <= 90 && 90 < bins[0].upper);
        assert!(bins.iter().all(|bin| bin.upper - bin.lower == width));

        let last: &HistogramBin = &bins[bins.len() - 1];
        assert!(last.lower <= 20_000_000 && 20_000_000 < last.upper);
        assert_eq!(last.count, 1);
    }

    #[test]
    fn preconditions_report_missing_data() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let no_dates: CleanedTable = table(vec![movie(2, 2019, "TV-Y", "India", None)]);

        assert!(service
            .check_precondition(&no_dates, &ChartPrecondition::AnyMonthAdded)
            .is_some());
        assert!(service
            .check_precondition(&no_dates, &ChartPrecondition::AnyRatingOf(TRACKED_RATINGS))
            .is_some());
        assert!(service
            .check_precondition(&no_dates, &ChartPrecondition::AnyMovieMinutes)
            .is_some());

        let with_dates: CleanedTable = table(vec![show(2, 2019, "PG", "India")]);
        assert!(service
            .check_precondition(&with_dates, &ChartPrecondition::AnyMonthAdded)
            .is_none());
        assert!(service
            .check_precondition(&with_dates, &ChartPrecondition::AnyRatingOf(TRACKED_RATINGS))
            .is_none());
    }

    #[test]
    fn every_registered_plan_is_deterministic() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let table: CleanedTable = table(vec![
            movie(2, 2019, "R", "India", Some(90)),
            show(3, 2018, "TV-MA", "Japan"),
            movie(4, 2020, "PG", "Japan", Some(120)),
            movie(5, 2020, "PG-13", "Spain", None),
        ]);

        for spec in get_chart_registry() {
            let first: ChartData = service.aggregate(&table, spec.aggregation()).unwrap();
            let second: ChartData = service.aggregate(&table, spec.aggregation()).unwrap();
            assert_eq!(first, second, "{} is not deterministic", spec.id);
        }

        let months: ChartData = service
            .aggregate(
                &table,
                find_chart_spec(ChartId::ReleasesByMonth)
                    .unwrap()
                    .aggregation(),
            )
            .unwrap();
        assert!(matches!(months, ChartData::Counts(ref counts) if counts.len() == 12));
    }
}
