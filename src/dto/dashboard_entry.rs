use crate::common::*;

use crate::enums::chart_id::*;

#[doc = "One thumbnail of the dashboard page: a rendered image and its insight"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardEntry {
    pub chart_id: ChartId,
    pub file: String,
    pub title: String,
    pub caption: String,
    pub image_path: PathBuf,
}
