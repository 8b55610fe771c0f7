use crate::common::*;

use crate::enums::chart_id::*;

#[doc = "Human-authored title and caption shown next to a chart image"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Insight {
    pub chart_id: ChartId,
    pub file: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}
