use crate::common::*;

use crate::enums::{
    aggregation_plan::*, chart_id::*, chart_precondition::*, plot_kind::*, sort_order::*,
    title_column::*,
};
use crate::model::chart::{chart_spec::*, color_scheme::*};

const SMALL: (u32, u32) = (720, 480);
const MEDIUM: (u32, u32) = (1200, 720);
const WIDE: (u32, u32) = (1440, 720);

const SKY_BLUE: Rgb = (135, 206, 235);
const ORANGE: Rgb = (255, 165, 0);
const TEAL: Rgb = (0, 170, 170);
const ROYAL_BLUE: Rgb = (65, 125, 245);
const PURPLE: Rgb = (170, 90, 210);
const MAGENTA: Rgb = (199, 49, 179);
const VIOLET: Rgb = (125, 40, 148);
const MINT: Rgb = (59, 235, 112);
const CORAL: Rgb = (250, 128, 114);
const GOLD: Rgb = (240, 200, 60);

const TYPE_COLORS: &[Rgb] = &[SKY_BLUE, ORANGE];
const RATING_TREND_COLORS: &[Rgb] = &[CORAL, ROYAL_BLUE, MINT, GOLD];
const WORD_COLORS: &[Rgb] = &[SKY_BLUE, ORANGE, MINT, CORAL, GOLD, PURPLE, TEAL];

const COOLWARM: ColorScheme = ColorScheme::Gradient {
    from: (59, 76, 192),
    to: (180, 4, 38),
};
const VIRIDIS: ColorScheme = ColorScheme::Gradient {
    from: (68, 1, 84),
    to: (253, 231, 37),
};

#[doc = "Ratings whose yearly counts are tracked by the rating trend chart"]
pub const TRACKED_RATINGS: &[&str] = &["TV-MA", "R", "PG-13", "PG"];

static CHART_REGISTRY: once_lazy<Vec<ChartSpec>> = once_lazy::new(build_chart_registry);

#[doc = "Immutable list of every chart the pipeline renders, in render order"]
pub fn get_chart_registry() -> &'static [ChartSpec] {
    &CHART_REGISTRY
}

#[doc = "Chart specification by id"]
pub fn find_chart_spec(id: ChartId) -> Option<&'static ChartSpec> {
    get_chart_registry().iter().find(|spec| spec.id == id)
}

fn build_chart_registry() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            id: ChartId::MoviesVsTvShows,
            output_file: "1_movies_vs_tvshows.png",
            title: "Movies vs TV Shows on Netflix",
            x_desc: "Type",
            y_desc: "Count",
            size: SMALL,
            plot: PlotKind::Bar,
            colors: ColorScheme::Solid(TYPE_COLORS),
            aggregation: AggregationPlan::CategoricalCount {
                column: TitleColumn::ContentType,
                top_k: None,
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::TitlesPerYear,
            output_file: "2_titles_per_year.png",
            title: "Number of Titles Released Per Year",
            x_desc: "Year",
            y_desc: "Number of Titles",
            size: MEDIUM,
            plot: PlotKind::Line { markers: true },
            colors: ColorScheme::Solid(&[TEAL]),
            aggregation: AggregationPlan::TimeSeriesCount {
                series_column: None,
                series_filter: None,
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::MoviesVsTvShowsOverYears,
            output_file: "3_movies_vs_tvshows_over_years.png",
            title: "Movies vs TV Shows Released Over Years",
            x_desc: "Year",
            y_desc: "Number of Titles",
            size: MEDIUM,
            plot: PlotKind::MultiLine,
            colors: ColorScheme::Solid(&[ROYAL_BLUE, ORANGE]),
            aggregation: AggregationPlan::TimeSeriesCount {
                series_column: Some(TitleColumn::ContentType),
                series_filter: Some(&["Movie", "TV Show"]),
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::ContentRatingsByType,
            output_file: "4_content_ratings_by_type.png",
            title: "Content Ratings by Type",
            x_desc: "Rating",
            y_desc: "Number of Titles",
            size: MEDIUM,
            plot: PlotKind::GroupedBar,
            colors: ColorScheme::Solid(TYPE_COLORS),
            aggregation: AggregationPlan::CrossTabCount {
                row_column: TitleColumn::Rating,
                series_column: TitleColumn::ContentType,
                sort_by: SortKey::Value(SortOrder::Desc),
                top_k: None,
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::TopCountriesMoviesVsTvShows,
            output_file: "5_top_countries_movies_vs_tvshows.png",
            title: "Top 10 Countries by Movies vs TV Shows",
            x_desc: "Country",
            y_desc: "Number of Titles",
            size: MEDIUM,
            plot: PlotKind::GroupedBar,
            colors: ColorScheme::Solid(TYPE_COLORS),
            aggregation: AggregationPlan::CrossTabCount {
                row_column: TitleColumn::Country,
                series_column: TitleColumn::ContentType,
                sort_by: SortKey::Series("Movie", SortOrder::Desc),
                top_k: Some(10),
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::TopGenres,
            output_file: "6_top_genres.png",
            title: "Top 15 Genres on Netflix",
            x_desc: "Number of Titles",
            y_desc: "",
            size: MEDIUM,
            plot: PlotKind::HorizontalBar,
            colors: COOLWARM,
            aggregation: AggregationPlan::TokenFrequency {
                column: TitleColumn::ListedIn,
                top_k: Some(15),
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::AvgMovieDurationOverYears,
            output_file: "7_avg_movie_duration_over_years.png",
            title: "Average Movie Duration Over the Years",
            x_desc: "Year",
            y_desc: "Average Duration (minutes)",
            size: MEDIUM,
            plot: PlotKind::Line { markers: false },
            colors: ColorScheme::Solid(&[PURPLE]),
            aggregation: AggregationPlan::NumericMeanByGroup {
                group_column: TitleColumn::ReleaseYear,
                sort_by: SortKey::Key(SortOrder::Asc),
                top_k: None,
            },
            precondition: Some(ChartPrecondition::AnyMovieMinutes),
        },
        ChartSpec {
            id: ChartId::TopDirectors,
            output_file: "8_top_directors.png",
            title: "Top 10 Directors on Netflix",
            x_desc: "Number of Titles",
            y_desc: "",
            size: MEDIUM,
            plot: PlotKind::HorizontalBar,
            colors: ColorScheme::Solid(&[MAGENTA]),
            aggregation: AggregationPlan::CategoricalCount {
                column: TitleColumn::Director,
                top_k: Some(10),
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::TopActors,
            output_file: "9_top_actors.png",
            title: "Top 10 Most Featured Actors on Netflix",
            x_desc: "Number of Titles",
            y_desc: "",
            size: MEDIUM,
            plot: PlotKind::HorizontalBar,
            colors: ColorScheme::Solid(&[VIOLET]),
            aggregation: AggregationPlan::TokenFrequency {
                column: TitleColumn::Cast,
                top_k: Some(10),
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::ReleasesByMonth,
            output_file: "10_releases_by_month.png",
            title: "Netflix Releases by Month",
            x_desc: "Month",
            y_desc: "Number of Titles Added",
            size: MEDIUM,
            plot: PlotKind::Bar,
            colors: ColorScheme::Solid(&[MINT]),
            aggregation: AggregationPlan::MonthOfYearCount,
            precondition: Some(ChartPrecondition::AnyMonthAdded),
        },
        ChartSpec {
            id: ChartId::RatingTrendsOverTime,
            output_file: "11_rating_trends_over_time.png",
            title: "Content Ratings Trends Over the Years",
            x_desc: "Year",
            y_desc: "Number of Titles",
            size: WIDE,
            plot: PlotKind::MultiLine,
            colors: ColorScheme::Solid(RATING_TREND_COLORS),
            aggregation: AggregationPlan::TimeSeriesCount {
                series_column: Some(TitleColumn::Rating),
                series_filter: Some(TRACKED_RATINGS),
            },
            precondition: Some(ChartPrecondition::AnyRatingOf(TRACKED_RATINGS)),
        },
        ChartSpec {
            id: ChartId::AvgDurationByCountry,
            output_file: "12_avg_duration_by_country.png",
            title: "Average Movie Duration by Country",
            x_desc: "Duration (minutes)",
            y_desc: "",
            size: MEDIUM,
            plot: PlotKind::HorizontalBar,
            colors: VIRIDIS,
            aggregation: AggregationPlan::NumericMeanByGroup {
                group_column: TitleColumn::Country,
                sort_by: SortKey::Value(SortOrder::Desc),
                top_k: Some(10),
            },
            precondition: Some(ChartPrecondition::AnyMovieMinutes),
        },
        ChartSpec {
            id: ChartId::WordcloudTitles,
            output_file: "13_wordcloud_titles.png",
            title: "Most Frequent Words in Netflix Titles",
            x_desc: "",
            y_desc: "",
            size: MEDIUM,
            plot: PlotKind::WordCloud,
            colors: ColorScheme::Solid(WORD_COLORS),
            aggregation: AggregationPlan::TextCorpusFrequency {
                column: TitleColumn::Title,
                max_words: 100,
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::RatingsDistribution,
            output_file: "14_ratings_distribution.png",
            title: "Distribution of Content Ratings",
            x_desc: "Rating",
            y_desc: "Number of Titles",
            size: MEDIUM,
            plot: PlotKind::Bar,
            colors: ColorScheme::Solid(&[CORAL]),
            aggregation: AggregationPlan::CategoricalCount {
                column: TitleColumn::Rating,
                top_k: None,
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::TypeShare,
            output_file: "15_type_share.png",
            title: "Share of Movies and TV Shows",
            x_desc: "",
            y_desc: "",
            size: SMALL,
            plot: PlotKind::Pie,
            colors: ColorScheme::Solid(TYPE_COLORS),
            aggregation: AggregationPlan::CategoricalCount {
                column: TitleColumn::ContentType,
                top_k: None,
            },
            precondition: None,
        },
        ChartSpec {
            id: ChartId::MovieDurationDistribution,
            output_file: "16_movie_duration_distribution.png",
            title: "Distribution of Movie Durations",
            x_desc: "Duration (minutes)",
            y_desc: "Number of Movies",
            size: MEDIUM,
            plot: PlotKind::Histogram,
            colors: ColorScheme::Solid(&[GOLD]),
            aggregation: AggregationPlan::NumericHistogram { bin_width: 10 },
            precondition: Some(ChartPrecondition::AnyMovieMinutes),
        },
        ChartSpec {
            id: ChartId::ReleaseYearVsDuration,
            output_file: "17_release_year_vs_duration.png",
            title: "Movie Duration by Release Year",
            x_desc: "Release Year",
            y_desc: "Duration (minutes)",
            size: MEDIUM,
            plot: PlotKind::Scatter,
            colors: ColorScheme::Solid(&[SKY_BLUE]),
            aggregation: AggregationPlan::YearDurationPoints,
            precondition: Some(ChartPrecondition::AnyMovieMinutes),
        },
    ]
}
