use crate::common::*;

use crate::dto::chart_data::*;
use crate::model::chart::chart_spec::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Draws one chart and saves it as a PNG file
        # Arguments
        * `spec` - Chart description (title, axis labels, plot kind, colors, size)
        * `data` - Aggregated values, must match the plot kind of `spec`
        * `output_path` - Path where the chart image will be saved
    "]
    async fn render_chart(
        &self,
        spec: &ChartSpec,
        data: ChartData,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
