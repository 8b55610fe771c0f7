use crate::common::*;

use crate::enums::{
    aggregation_plan::*, chart_id::*, chart_precondition::*, plot_kind::*,
};
use crate::model::chart::color_scheme::*;

#[doc = r#"
    Immutable description of one chart: what to aggregate, how to draw it and
    where the image goes. Captions are not stored here; they are looked up in
    the insight registry through `id`.
"#]
#[derive(Debug, Clone, Serialize, Getters, CopyGetters)]
pub struct ChartSpec {
    #[getset(get_copy = "pub")]
    pub id: ChartId,
    #[getset(get_copy = "pub")]
    pub output_file: &'static str,
    #[getset(get_copy = "pub")]
    pub title: &'static str,
    #[getset(get_copy = "pub")]
    pub x_desc: &'static str,
    #[getset(get_copy = "pub")]
    pub y_desc: &'static str,
    #[getset(get_copy = "pub")]
    pub size: (u32, u32),
    #[getset(get_copy = "pub")]
    pub plot: PlotKind,
    #[getset(get_copy = "pub")]
    pub colors: ColorScheme,
    #[getset(get = "pub")]
    pub aggregation: AggregationPlan,
    #[getset(get = "pub")]
    pub precondition: Option<ChartPrecondition>,
}
