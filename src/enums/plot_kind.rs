use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Bar,
    GroupedBar,
    HorizontalBar,
    Line { markers: bool },
    MultiLine,
    Scatter,
    Histogram,
    Pie,
    WordCloud,
}
