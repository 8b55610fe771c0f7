use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[doc = "Applies the direction to an ascending comparison result"]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

#[doc = "What a grouped aggregation is ranked by before top-K truncation"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKey {
    /// The group key itself (numeric when both keys parse as integers)
    Key(SortOrder),
    /// The aggregated value (row total for cross tabs, mean for numeric groups)
    Value(SortOrder),
    /// The count in one series of a cross tab
    Series(&'static str, SortOrder),
}
