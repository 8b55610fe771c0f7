/*
Description : Batch report that cleans a title catalog table and renders one
              PNG chart per registered analysis, with a static insight caption
              for each image.

History     : [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod dto;
mod enums;

mod repository;
use repository::title_csv_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;
use traits::service_traits::insight_service::*;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    aggregation_service_impl::*, chart_service_impl::*, insight_service_impl::*,
    loader_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and initial setup */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Chart report program start!");

    let total_config: TotalConfig = TotalConfig::load(&SERVER_CONFIG_PATH).unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while reading the configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    let title_repository: TitleCsvRepositoryImpl =
        TitleCsvRepositoryImpl::from_config(total_config.data_source()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing title_repository.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* Dependency injection */
    let loader_service: LoaderServiceImpl<TitleCsvRepositoryImpl> =
        LoaderServiceImpl::new(title_repository);
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let insight_service: InsightServiceImpl =
        InsightServiceImpl::from_config(total_config.chart_output());

    let main_controller: MainController<
        LoaderServiceImpl<TitleCsvRepositoryImpl>,
        AggregationServiceImpl,
        ChartServiceImpl,
    > = MainController::from_config(
        loader_service,
        aggregation_service,
        chart_service,
        &total_config,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    for entry in insight_service.dashboard_entries() {
        info!("[dashboard] {} | {} | {}", entry.file, entry.title, entry.caption);
    }
}
