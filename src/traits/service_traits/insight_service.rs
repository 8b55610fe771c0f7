use crate::common::*;

use crate::dto::dashboard_entry::*;
use crate::model::insight::insight::*;

pub trait InsightService: Send + Sync {
    fn insights(&self) -> &'static [Insight];

    fn find_insight_by_file(&self, file: &str) -> Option<&'static Insight>;

    #[doc = "
        Resolves a requested image name to a file under the output directory
        # Returns
        * `Some(path)` only for a registered file name that exists on disk
    "]
    fn resolve_chart_file(&self, file: &str) -> Option<PathBuf>;

    #[doc = "Insights in registry order whose image has been rendered"]
    fn dashboard_entries(&self) -> Vec<DashboardEntry>;
}
