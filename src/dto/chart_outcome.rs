use crate::common::*;

use crate::enums::chart_id::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The chart's required data does not exist anywhere in the table.
    PreconditionUnmet(String),
    /// Aggregation or rendering failed for this chart only.
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::PreconditionUnmet(reason) => write!(f, "precondition unmet: {}", reason),
            SkipReason::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome {
    Rendered { path: PathBuf },
    Skipped { reason: SkipReason },
}

impl ChartOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, ChartOutcome::Rendered { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartReportEntry {
    pub chart_id: ChartId,
    pub outcome: ChartOutcome,
}
