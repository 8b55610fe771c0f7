use crate::common::*;

#[doc = "Data that must exist somewhere in the cleaned table before a chart is attempted"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartPrecondition {
    AnyMonthAdded,
    AnyRatingOf(&'static [&'static str]),
    AnyMovieMinutes,
}
