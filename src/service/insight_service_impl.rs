use crate::common::*;

use crate::dto::dashboard_entry::*;
use crate::model::configs::chart_output_config::*;
use crate::model::insight::{insight::*, insight_registry::*};
use crate::traits::service_traits::insight_service::*;

#[doc = r#"
    Read-only view of the insight registry joined with the rendered images.

    Requested names are never joined onto the output directory directly. A
    name is only resolved when it is one of the registered file names, so
    separators, `..` and absolute paths cannot reach outside the directory.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct InsightServiceImpl {
    output_dir: PathBuf,
}

impl InsightServiceImpl {
    pub fn from_config(config: &ChartOutputConfig) -> Self {
        Self::new(config.output_dir().clone())
    }
}

impl InsightService for InsightServiceImpl {
    fn insights(&self) -> &'static [Insight] {
        get_insights()
    }

    fn find_insight_by_file(&self, file: &str) -> Option<&'static Insight> {
        find_insight_by_file(file)
    }

    fn resolve_chart_file(&self, file: &str) -> Option<PathBuf> {
        let insight: &Insight = self.find_insight_by_file(file)?;
        let path: PathBuf = self.output_dir.join(insight.file);

        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    fn dashboard_entries(&self) -> Vec<DashboardEntry> {
        self.insights()
            .iter()
            .filter_map(|insight| {
                let image_path: PathBuf = self.resolve_chart_file(insight.file)?;
                Some(DashboardEntry::new(
                    insight.chart_id,
                    insight.file.to_string(),
                    insight.title.to_string(),
                    insight.caption.to_string(),
                    image_path,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::chart_id::*;

    fn touch(dir: &Path, file: &str) {
        fs::write(dir.join(file), b"png").unwrap();
    }

    #[test]
    fn resolves_only_registered_files_that_exist() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let service: InsightServiceImpl = InsightServiceImpl::new(dir.path().to_path_buf());

        assert_eq!(service.resolve_chart_file("1_movies_vs_tvshows.png"), None);

        touch(dir.path(), "1_movies_vs_tvshows.png");
        touch(dir.path(), "notes.png");

        assert_eq!(
            service.resolve_chart_file("1_movies_vs_tvshows.png"),
            Some(dir.path().join("1_movies_vs_tvshows.png"))
        );
        assert_eq!(service.resolve_chart_file("notes.png"), None);
    }

    #[test]
    fn path_traversal_is_not_found() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let nested: PathBuf = dir.path().join("images");
        fs::create_dir_all(&nested).unwrap();
        touch(dir.path(), "1_movies_vs_tvshows.png");

        let service: InsightServiceImpl = InsightServiceImpl::new(nested);

        assert_eq!(service.resolve_chart_file("../1_movies_vs_tvshows.png"), None);
        assert_eq!(service.resolve_chart_file("/etc/passwd"), None);
        assert_eq!(service.resolve_chart_file(""), None);
    }

    #[test]
    fn dashboard_lists_rendered_charts_in_registry_order() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        touch(dir.path(), "13_wordcloud_titles.png");
        touch(dir.path(), "2_titles_per_year.png");

        let service: InsightServiceImpl = InsightServiceImpl::new(dir.path().to_path_buf());
        let ids: Vec<ChartId> = service
            .dashboard_entries()
            .iter()
            .map(|entry| entry.chart_id)
            .collect();

        assert_eq!(ids, vec![ChartId::TitlesPerYear, ChartId::WordcloudTitles]);
        assert!(service.find_insight_by_file("unknown.png").is_none());
        assert_eq!(service.insights().len(), 17);
    }
}
