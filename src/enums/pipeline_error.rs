use crate::common::*;

use crate::enums::chart_id::*;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("data source error: {0}")]
    DataSource(String),

    #[error("field parse error at line {line}, column '{column}': {message}")]
    FieldParse {
        line: usize,
        column: String,
        message: String,
    },

    #[error("chart render error [{chart_id}]: {message}")]
    ChartRender { chart_id: ChartId, message: String },
}
