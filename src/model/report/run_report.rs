use crate::common::*;

use crate::dto::chart_outcome::*;
use crate::enums::chart_id::*;
use crate::model::title::cleaned_table::*;

#[doc = "Summary of one pipeline run, logged at the end"]
#[derive(Debug, Clone, Serialize, Getters, CopyGetters)]
pub struct RunReport {
    #[getset(get_copy = "pub")]
    rows_read: usize,
    #[getset(get_copy = "pub")]
    rows_kept: usize,
    #[getset(get_copy = "pub")]
    rows_dropped: usize,
    #[getset(get_copy = "pub")]
    field_error_cnt: usize,
    #[getset(get_copy = "pub")]
    rendered_cnt: usize,
    #[getset(get_copy = "pub")]
    skipped_cnt: usize,
    #[getset(get = "pub")]
    charts: Vec<ChartReportEntry>,
}

impl RunReport {
    pub fn calculate(table: &CleanedTable, charts: Vec<ChartReportEntry>) -> Self {
        let rendered_cnt: usize = charts
            .iter()
            .filter(|entry| entry.outcome.is_rendered())
            .count();
        let skipped_cnt: usize = charts.len() - rendered_cnt;

        Self {
            rows_read: table.rows_read(),
            rows_kept: table.rows_kept(),
            rows_dropped: table.rows_dropped(),
            field_error_cnt: table.field_errors().len(),
            rendered_cnt,
            skipped_cnt,
            charts,
        }
    }
}

#[cfg(test)]
impl RunReport {
    #[doc = "Outcome recorded for one chart, `None` when it was not scheduled"]
    pub fn outcome_of(&self, chart_id: ChartId) -> Option<&ChartOutcome> {
        self.charts
            .iter()
            .find(|entry| entry.chart_id == chart_id)
            .map(|entry| &entry.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_rendered_and_skipped_charts() {
        let table: CleanedTable = CleanedTable::new(Vec::new(), 3, 3, Vec::new());
        let report: RunReport = RunReport::calculate(
            &table,
            vec![
                ChartReportEntry::new(
                    ChartId::MoviesVsTvShows,
                    ChartOutcome::Rendered {
                        path: PathBuf::from("1_movies_vs_tvshows.png"),
                    },
                ),
                ChartReportEntry::new(
                    ChartId::ReleasesByMonth,
                    ChartOutcome::Skipped {
                        reason: SkipReason::PreconditionUnmet("no dates".to_string()),
                    },
                ),
            ],
        );

        assert_eq!(report.rows_read(), 3);
        assert_eq!(report.rows_dropped(), 3);
        assert_eq!(report.rendered_cnt(), 1);
        assert_eq!(report.skipped_cnt(), 1);
        assert!(report.outcome_of(ChartId::TopGenres).is_none());
    }
}
