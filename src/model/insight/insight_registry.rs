use crate::enums::chart_id::*;
use crate::model::insight::insight::*;

static INSIGHTS: [Insight; 17] = [
    Insight {
        chart_id: ChartId::MoviesVsTvShows,
        file: "1_movies_vs_tvshows.png",
        title: "Movies vs TV Shows: Who rules the Netflix library?",
        caption: "Movies still outnumber TV shows on Netflix, but each year the fight gets closer. Netflix's shift toward binge-worthy series is clear.",
    },
    Insight {
        chart_id: ChartId::TitlesPerYear,
        file: "2_titles_per_year.png",
        title: "Growth Over Time: The Netflix Explosion",
        caption: "Since 2015, Netflix's catalog exploded. Hits like 'Stranger Things' and 'Narcos' marked a bold new focus on originals.",
    },
    Insight {
        chart_id: ChartId::MoviesVsTvShowsOverYears,
        file: "3_movies_vs_tvshows_over_years.png",
        title: "Content Evolution: Movies vs Series Year over Year",
        caption: "Post-2018, TV Show releases surged, as series keep viewers hooked episode after episode.",
    },
    Insight {
        chart_id: ChartId::ContentRatingsByType,
        file: "4_content_ratings_by_type.png",
        title: "Who's Watching What? Ratings by Type",
        caption: "TV Shows on Netflix lean mature (TV-MA) while movies cluster around PG and PG-13.",
    },
    Insight {
        chart_id: ChartId::TopCountriesMoviesVsTvShows,
        file: "5_top_countries_movies_vs_tvshows.png",
        title: "Top Countries: Netflix's Global Playbook",
        caption: "The US leads, followed by India, showcasing Netflix's international expansion strategy.",
    },
    Insight {
        chart_id: ChartId::TopGenres,
        file: "6_top_genres.png",
        title: "What Genres Captivate Viewers?",
        caption: "Drama, International Movies, and Documentaries dominate Netflix's global audience.",
    },
    Insight {
        chart_id: ChartId::AvgMovieDurationOverYears,
        file: "7_avg_movie_duration_over_years.png",
        title: "Now Streaming Quicker: Movie Durations Shrink",
        caption: "Average movie lengths have declined, catering to modern viewers' shorter attention spans.",
    },
    Insight {
        chart_id: ChartId::TopDirectors,
        file: "8_top_directors.png",
        title: "Directors Behind the Magic",
        caption: "Frequent collaborators highlight Netflix's trusted creative partnerships.",
    },
    Insight {
        chart_id: ChartId::TopActors,
        file: "9_top_actors.png",
        title: "Star Power: Netflix's Most-Featured Talent",
        caption: "Popular actors from Bollywood and Hollywood appear repeatedly, driving viewership.",
    },
    Insight {
        chart_id: ChartId::ReleasesByMonth,
        file: "10_releases_by_month.png",
        title: "Seasonal Strategy",
        caption: "Release peaks in July and December align with holidays and viewer habits.",
    },
    Insight {
        chart_id: ChartId::RatingTrendsOverTime,
        file: "11_rating_trends_over_time.png",
        title: "Mature Content on the Rise",
        caption: "A strong rise in TV-MA content reflects Netflix's bold shift toward mature themes.",
    },
    Insight {
        chart_id: ChartId::AvgDurationByCountry,
        file: "12_avg_duration_by_country.png",
        title: "Around the World in 120 Minutes",
        caption: "Longer movies from India and Egypt reveal cultural storytelling traditions.",
    },
    Insight {
        chart_id: ChartId::WordcloudTitles,
        file: "13_wordcloud_titles.png",
        title: "Netflix Titles: A World of Words",
        caption: "Frequently used words in titles give a snapshot of popular themes globally.",
    },
    Insight {
        chart_id: ChartId::RatingsDistribution,
        file: "14_ratings_distribution.png",
        title: "Ratings at a Glance",
        caption: "A handful of mature and teen ratings account for most of the catalog, while family ratings form a long tail.",
    },
    Insight {
        chart_id: ChartId::TypeShare,
        file: "15_type_share.png",
        title: "The Catalog Split",
        caption: "Roughly two out of every three titles are movies, leaving series a large and growing minority.",
    },
    Insight {
        chart_id: ChartId::MovieDurationDistribution,
        file: "16_movie_duration_distribution.png",
        title: "The 90-Minute Sweet Spot",
        caption: "Most movies run between 80 and 120 minutes, with short films and epics at the fringes.",
    },
    Insight {
        chart_id: ChartId::ReleaseYearVsDuration,
        file: "17_release_year_vs_duration.png",
        title: "Runtimes Across the Decades",
        caption: "Recent years bring a far wider spread of runtimes, from short specials to long features.",
    },
];

#[doc = "Every insight, in the same order as the chart registry"]
pub fn get_insights() -> &'static [Insight] {
    &INSIGHTS
}

#[doc = "Insight attached to a chart id"]
pub fn find_insight(chart_id: ChartId) -> Option<&'static Insight> {
    INSIGHTS.iter().find(|insight| insight.chart_id == chart_id)
}

#[doc = "Insight attached to an image file name"]
pub fn find_insight_by_file(file: &str) -> Option<&'static Insight> {
    INSIGHTS.iter().find(|insight| insight.file == file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chart::{chart_registry::*, chart_spec::*};

    #[test]
    fn every_chart_has_an_insight_with_the_same_file() {
        for spec in get_chart_registry() {
            let insight: &Insight = find_insight(spec.id())
                .unwrap_or_else(|| panic!("missing insight for {}", spec.id()));
            assert_eq!(insight.file(), spec.output_file());
        }
    }

    #[test]
    fn no_orphan_insights() {
        for insight in get_insights() {
            let spec: Option<&ChartSpec> = find_chart_spec(insight.chart_id());
            assert!(spec.is_some(), "orphan insight for {}", insight.file());
        }
        assert_eq!(get_insights().len(), get_chart_registry().len());
    }

    #[test]
    fn insights_follow_registry_order() {
        let insight_ids: Vec<ChartId> = get_insights().iter().map(|i| i.chart_id()).collect();
        let spec_ids: Vec<ChartId> = get_chart_registry().iter().map(|s| s.id()).collect();
        assert_eq!(insight_ids, spec_ids);
    }

    #[test]
    fn lookup_by_file() {
        let insight: &Insight = find_insight_by_file("10_releases_by_month.png").unwrap();
        assert_eq!(insight.title(), "Seasonal Strategy");
        assert!(find_insight_by_file("unknown.png").is_none());
    }
}
