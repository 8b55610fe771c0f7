use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::{
    chart::{chart_registry::*, chart_spec::*},
    configs::total_config::*,
    report::run_report::*,
    title::cleaned_table::*,
};

use crate::dto::{chart_data::*, chart_outcome::*};

use crate::enums::pipeline_error::*;

use crate::traits::service_traits::{aggregation_service::*, chart_service::*, loader_service::*};

#[derive(Debug, new)]
pub struct MainController<L: LoaderService, A: AggregationService, C: ChartService> {
    loader_service: L,
    aggregation_service: A,
    chart_service: C,
    input_path: PathBuf,
    output_dir: PathBuf,
    max_parallel_charts: usize,
}

impl<L: LoaderService, A: AggregationService, C: ChartService> MainController<L, A, C> {
    pub fn from_config(
        loader_service: L,
        aggregation_service: A,
        chart_service: C,
        config: &TotalConfig,
    ) -> Self {
        Self::new(
            loader_service,
            aggregation_service,
            chart_service,
            config.data_source().input_path().clone(),
            config.chart_output().output_dir().clone(),
            *config.system().max_parallel_charts(),
        )
    }

    #[doc = r#"
        Runs the whole batch once.

        1. Loads and cleans the title table (`loader_service`). A data source
           error aborts the run before any chart is attempted
        2. Generates every registered chart, at most `max_parallel_charts` at a time
        3. Logs the run report as text and as JSON

        # Returns
        * `anyhow::Result<RunReport>` - Err only when the table cannot be loaded
    "#]
    pub async fn main_task(&self) -> anyhow::Result<RunReport> {
        let table: CleanedTable = self.loader_service.load(&self.input_path).with_context(|| {
            format!(
                "[MainController->main_task] Failed to load {:?}",
                self.input_path
            )
        })?;

        info!(
            "Loaded {} rows: {} kept, {} dropped, {} field errors",
            table.rows_read(),
            table.rows_kept(),
            table.rows_dropped(),
            table.field_errors().len()
        );

        for field_error in table.field_errors() {
            warn!("[MainController->main_task] {}", field_error);
        }

        if table.is_empty() {
            warn!(
                "[MainController->main_task] No rows kept from {:?}, charts will have nothing to plot",
                self.input_path
            );
        }

        let charts: Vec<ChartReportEntry> = self.generate_charts(&table).await;
        let report: RunReport = RunReport::calculate(&table, charts);

        self.log_report(&report);

        Ok(report)
    }

    #[doc = "Schedules every registered chart and keeps the registry order in the result"]
    async fn generate_charts(&self, table: &CleanedTable) -> Vec<ChartReportEntry> {
        /* Creating it per chart as well keeps a failure here local to each chart */
        if let Err(e) = tokio::fs::create_dir_all(&self.output_dir).await {
            error!(
                "[MainController->generate_charts] Failed to create {:?}: {:?}",
                self.output_dir, e
            );
        }

        stream::iter(get_chart_registry().iter())
            .map(|spec| self.generate_chart(table, spec))
            .buffered(self.max_parallel_charts.max(1))
            .collect::<Vec<ChartReportEntry>>()
            .await
    }

    #[doc = "Precondition check, aggregation and render of a single chart"]
    async fn generate_chart(&self, table: &CleanedTable, spec: &ChartSpec) -> ChartReportEntry {
        if let Some(precondition) = spec.precondition() {
            if let Some(reason) = self
                .aggregation_service
                .check_precondition(table, precondition)
            {
                info!("Skipping {}: {}", spec.id, reason);
                return ChartReportEntry::new(
                    spec.id,
                    ChartOutcome::Skipped {
                        reason: SkipReason::PreconditionUnmet(reason),
                    },
                );
            }
        }

        let output_path: PathBuf = self.output_dir.join(spec.output_file);

        match self.render_one(table, spec, &output_path).await {
            Ok(()) => ChartReportEntry::new(spec.id, ChartOutcome::Rendered { path: output_path }),
            Err(e) => {
                error!("[MainController->generate_chart] {}", e);
                ChartReportEntry::new(
                    spec.id,
                    ChartOutcome::Skipped {
                        reason: SkipReason::Failed(e.to_string()),
                    },
                )
            }
        }
    }

    async fn render_one(
        &self,
        table: &CleanedTable,
        spec: &ChartSpec,
        output_path: &Path,
    ) -> Result<(), PipelineError> {
        let chart_render_error = |message: String| PipelineError::ChartRender {
            chart_id: spec.id,
            message,
        };

        let data: ChartData = self
            .aggregation_service
            .aggregate(table, spec.aggregation())
            .map_err(|e| chart_render_error(format!("{:#}", e)))?;

        if data.is_empty() {
            return Err(chart_render_error(format!(
                "aggregation produced no {} to plot",
                data.kind_name()
            )));
        }

        self.chart_service
            .render_chart(spec, data, output_path)
            .await
            .map_err(|e| chart_render_error(format!("{:#}", e)))
    }

    fn log_report(&self, report: &RunReport) {
        info!(
            "Run finished: {} charts rendered, {} skipped",
            report.rendered_cnt(),
            report.skipped_cnt()
        );

        for entry in report.charts() {
            match &entry.outcome {
                ChartOutcome::Rendered { path } => info!("  {} -> {:?}", entry.chart_id, path),
                ChartOutcome::Skipped { reason } => warn!("  {} skipped, {}", entry.chart_id, reason),
            }
        }

        match convert_json_from_struct(report) {
            Ok(json) => info!("{}", json),
            Err(e) => error!("[MainController->log_report] {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_id::*;
    use crate::repository::title_csv_repository_impl::*;
    use crate::service::{aggregation_service_impl::*, loader_service_impl::*};
    use std::sync::Mutex;

    const FIXTURE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,The Long Road Home,Ana Lima,\"Ana Lima, Joao Dias\",Brazil,,2019,PG,95 min,\"Dramas, Independent Movies\",d
s2,TV Show,Night Harbor,,Kenji Sato,Japan,,2020,TV-MA,2 Seasons,\"Crime TV Shows, TV Dramas\",d
s3,Movie,Winter Harbor,Ana Lima,Joao Dias,Brazil,,2020,R,unknown,Dramas,d
s4,Movie,Summer Road,Lee Park,Kenji Sato,South Korea,,2018,PG-13,110 min,Comedies,d
";

    #[derive(Default)]
    struct RecordingChartService {
        failing: Option<ChartId>,
        rendered: Mutex<Vec<ChartId>>,
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn render_chart(
            &self,
            spec: &ChartSpec,
            _data: ChartData,
            _output_path: &Path,
        ) -> anyhow::Result<()> {
            if self.failing == Some(spec.id) {
                return Err(anyhow!("renderer failed for {}", spec.id));
            }
            self.rendered.lock().unwrap().push(spec.id);
            Ok(())
        }
    }

    type TestController = MainController<
        LoaderServiceImpl<TitleCsvRepositoryImpl>,
        AggregationServiceImpl,
        RecordingChartService,
    >;

    fn controller(dir: &Path, content: &str, chart_service: RecordingChartService) -> TestController {
        let input_path: PathBuf = dir.join("titles.csv");
        fs::write(&input_path, content).unwrap();

        MainController::new(
            LoaderServiceImpl::new(TitleCsvRepositoryImpl::new(b',')),
            AggregationServiceImpl::new(),
            chart_service,
            input_path,
            dir.join("images"),
            3,
        )
    }

    #[tokio::test]
    async fn month_chart_is_skipped_when_no_date_parses() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let controller: TestController =
            controller(dir.path(), FIXTURE, RecordingChartService::default());

        let report: RunReport = controller.main_task().await.unwrap();

        assert!(matches!(
            report.outcome_of(ChartId::ReleasesByMonth),
            Some(ChartOutcome::Skipped {
                reason: SkipReason::PreconditionUnmet(_)
            })
        ));
        assert_eq!(report.charts().len(), get_chart_registry().len());
        assert_eq!(report.rendered_cnt(), get_chart_registry().len() - 1);
        assert_eq!(report.field_error_cnt(), 1);

        let ids: Vec<ChartId> = report.charts().iter().map(|entry| entry.chart_id).collect();
        let registry_ids: Vec<ChartId> = get_chart_registry().iter().map(|spec| spec.id).collect();
        assert_eq!(ids, registry_ids);
        assert!(dir.path().join("images").is_dir());
    }

    #[tokio::test]
    async fn one_failing_chart_does_not_stop_the_others() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let chart_service = RecordingChartService {
            failing: Some(ChartId::TopGenres),
            ..Default::default()
        };
        let controller: TestController = controller(dir.path(), FIXTURE, chart_service);

        let report: RunReport = controller.main_task().await.unwrap();

        assert!(matches!(
            report.outcome_of(ChartId::TopGenres),
            Some(ChartOutcome::Skipped {
                reason: SkipReason::Failed(_)
            })
        ));
        assert!(matches!(
            report.outcome_of(ChartId::AvgMovieDurationOverYears),
            Some(ChartOutcome::Rendered { .. })
        ));
        assert!(matches!(
            report.outcome_of(ChartId::WordcloudTitles),
            Some(ChartOutcome::Rendered { .. })
        ));
        assert_eq!(report.skipped_cnt(), 2);
    }

    #[tokio::test]
    async fn missing_column_aborts_before_any_chart() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let content: &str = "show_id,type,title\ns1,Movie,Only Title\n";
        let controller: TestController =
            controller(dir.path(), content, RecordingChartService::default());

        let err: anyhow::Error = controller.main_task().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::DataSource(_))
        ));
        assert!(controller.chart_service.rendered.lock().unwrap().is_empty());
    }
}
