use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    MoviesVsTvShows,
    TitlesPerYear,
    MoviesVsTvShowsOverYears,
    ContentRatingsByType,
    TopCountriesMoviesVsTvShows,
    TopGenres,
    AvgMovieDurationOverYears,
    TopDirectors,
    TopActors,
    ReleasesByMonth,
    RatingTrendsOverTime,
    AvgDurationByCountry,
    WordcloudTitles,
    RatingsDistribution,
    TypeShare,
    MovieDurationDistribution,
    ReleaseYearVsDuration,
}

impl ChartId {
    pub const ALL: [ChartId; 17] = [
        ChartId::MoviesVsTvShows,
        ChartId::TitlesPerYear,
        ChartId::MoviesVsTvShowsOverYears,
        ChartId::ContentRatingsByType,
        ChartId::TopCountriesMoviesVsTvShows,
        ChartId::TopGenres,
        ChartId::AvgMovieDurationOverYears,
        ChartId::TopDirectors,
        ChartId::TopActors,
        ChartId::ReleasesByMonth,
        ChartId::RatingTrendsOverTime,
        ChartId::AvgDurationByCountry,
        ChartId::WordcloudTitles,
        ChartId::RatingsDistribution,
        ChartId::TypeShare,
        ChartId::MovieDurationDistribution,
        ChartId::ReleaseYearVsDuration,
    ];

    #[doc = "Stable short name used in logs and reports"]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::MoviesVsTvShows => "movies_vs_tvshows",
            ChartId::TitlesPerYear => "titles_per_year",
            ChartId::MoviesVsTvShowsOverYears => "movies_vs_tvshows_over_years",
            ChartId::ContentRatingsByType => "content_ratings_by_type",
            ChartId::TopCountriesMoviesVsTvShows => "top_countries_movies_vs_tvshows",
            ChartId::TopGenres => "top_genres",
            ChartId::AvgMovieDurationOverYears => "avg_movie_duration_over_years",
            ChartId::TopDirectors => "top_directors",
            ChartId::TopActors => "top_actors",
            ChartId::ReleasesByMonth => "releases_by_month",
            ChartId::RatingTrendsOverTime => "rating_trends_over_time",
            ChartId::AvgDurationByCountry => "avg_duration_by_country",
            ChartId::WordcloudTitles => "wordcloud_titles",
            ChartId::RatingsDistribution => "ratings_distribution",
            ChartId::TypeShare => "type_share",
            ChartId::MovieDurationDistribution => "movie_duration_distribution",
            ChartId::ReleaseYearVsDuration => "release_year_vs_duration",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
