use crate::common::*;

use crate::dto::category_count::*;

#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct GroupMean {
    pub name: String,
    pub mean: f64,
    pub samples: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<u64>,
}

#[doc = r#"
    Count table with one row per category and one column per series.

    `series[j].values[i]` is the count for `row_labels[i]`; every series has
    exactly `row_labels.len()` values, absent combinations are zero.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct CrossTab {
    pub row_labels: Vec<String>,
    pub series: Vec<NamedSeries>,
}

impl CrossTab {
    #[doc = "Count of one (row, series) cell, `None` when either label is unknown"]
    pub fn value(&self, row_label: &str, series_name: &str) -> Option<u64> {
        let row: usize = self.row_labels.iter().position(|label| label == row_label)?;
        self.series
            .iter()
            .find(|series| series.name == series_name)
            .and_then(|series| series.values.get(row).copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct HistogramBin {
    pub lower: u32,
    pub upper: u32,
    pub count: u64,
}

impl HistogramBin {
    pub fn label(&self) -> String {
        format!("{}-{}", self.lower, self.upper.saturating_sub(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct YearDuration {
    pub release_year: i32,
    pub minutes: u32,
}

#[doc = "Result of one aggregation, ready to be rendered"]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartData {
    Counts(Vec<CategoryCount>),
    Means(Vec<GroupMean>),
    Table(CrossTab),
    Bins(Vec<HistogramBin>),
    Points(Vec<YearDuration>),
    Words(Vec<CategoryCount>),
}

impl ChartData {
    #[doc = "True when there is nothing to draw"]
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Counts(counts) | ChartData::Words(counts) => {
                counts.iter().all(|count| count.count == 0)
            }
            ChartData::Means(means) => means.is_empty(),
            ChartData::Table(table) => {
                table.row_labels.is_empty() || table.series.is_empty()
            }
            ChartData::Bins(bins) => bins.iter().all(|bin| bin.count == 0),
            ChartData::Points(points) => points.is_empty(),
        }
    }

    #[doc = "Flattens one-dimensional results into parallel label/value vectors"]
    pub fn labeled_values(&self) -> Option<(Vec<String>, Vec<f64>)> {
        match self {
            ChartData::Counts(counts) | ChartData::Words(counts) => Some(
                counts
                    .iter()
                    .map(|count| (count.name.clone(), count.count as f64))
                    .unzip(),
            ),
            ChartData::Means(means) => Some(
                means
                    .iter()
                    .map(|mean| (mean.name.clone(), mean.mean))
                    .unzip(),
            ),
            ChartData::Bins(bins) => Some(
                bins.iter()
                    .map(|bin| (bin.label(), bin.count as f64))
                    .unzip(),
            ),
            ChartData::Table(_) | ChartData::Points(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ChartData::Counts(_) => "counts",
            ChartData::Means(_) => "means",
            ChartData::Table(_) => "table",
            ChartData::Bins(_) => "bins",
            ChartData::Points(_) => "points",
            ChartData::Words(_) => "words",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_of_zero_are_empty() {
        let data: ChartData = ChartData::Counts(vec![
            CategoryCount::new("Jan".to_string(), 0),
            CategoryCount::new("Feb".to_string(), 0),
        ]);
        assert!(data.is_empty());
        assert!(!ChartData::Counts(vec![CategoryCount::new("Jan".to_string(), 1)]).is_empty());
    }

    #[test]
    fn bins_are_labelled_inclusively() {
        let data: ChartData = ChartData::Bins(vec![HistogramBin::new(90, 100, 3)]);
        let (labels, values) = data.labeled_values().unwrap();
        assert_eq!(labels, vec!["90-99".to_string()]);
        assert_eq!(values, vec![3.0]);
    }
}
