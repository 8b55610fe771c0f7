pub mod aggregation_plan;
pub mod chart_id;
pub mod chart_precondition;
pub mod content_type;
pub mod pipeline_error;
pub mod plot_kind;
pub mod sort_order;
pub mod title_column;
