use crate::common::*;

use crate::dto::chart_data::*;
use crate::enums::{aggregation_plan::*, chart_precondition::*};
use crate::model::title::cleaned_table::*;

pub trait AggregationService: Send + Sync {
    #[doc = "
        Checks that the data a chart depends on exists somewhere in the table.
        # Returns
        * `Some(reason)` when the precondition is not met, `None` otherwise
    "]
    fn check_precondition(
        &self,
        table: &CleanedTable,
        precondition: &ChartPrecondition,
    ) -> Option<String>;

    #[doc = "Runs the aggregation described by `plan` over the cleaned table"]
    fn aggregate(&self, table: &CleanedTable, plan: &AggregationPlan) -> anyhow::Result<ChartData>;
}
