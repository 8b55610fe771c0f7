use crate::common::*;

use crate::dto::{category_count::*, chart_data::*};
use crate::enums::plot_kind::*;
use crate::model::chart::{chart_spec::*, color_scheme::*};
use crate::traits::service_traits::chart_service::*;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

const BACKGROUND_COLOR: RGBColor = RGBColor(20, 20, 20);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);
const TITLE_COLOR: RGBColor = RGBColor(240, 240, 240);

type ChartArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_chart(
        &self,
        spec: &ChartSpec,
        data: ChartData,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        if data.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_chart] Cannot generate {} with empty data",
                spec.id
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!(
                    "[ChartServiceImpl->render_chart] failed to create {:?}",
                    parent
                )
            })?;
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let spec: ChartSpec = spec.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || draw_chart(&spec, &data, &output_path_str));

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->render_chart] drawing/present failed")?;

        info!("Chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[doc = "Synchronous plotters part, runs on the blocking pool"]
fn draw_chart(spec: &ChartSpec, data: &ChartData, output_path: &str) -> anyhow::Result<()> {
    let root: ChartArea<'_> = BitMapBackend::new(output_path, spec.size).into_drawing_area();
    root.fill(&BACKGROUND_COLOR)?;

    let axis: ValueAxis = ValueAxis::of(data);

    match (spec.plot, data) {
        (PlotKind::Bar, _) => {
            let (labels, values) = one_dimensional(spec, data)?;
            draw_vertical_bars(&root, spec, &labels, &values, axis, 6)?;
        }
        (PlotKind::Histogram, _) => {
            let (labels, values) = one_dimensional(spec, data)?;
            draw_vertical_bars(&root, spec, &labels, &values, axis, 2)?;
        }
        (PlotKind::HorizontalBar, _) => {
            let (labels, values) = one_dimensional(spec, data)?;
            draw_horizontal_bars(&root, spec, &labels, &values, axis)?;
        }
        (PlotKind::Line { markers }, ChartData::Table(table)) => {
            let series: &NamedSeries = table.series.first().ok_or_else(|| {
                anyhow!("[ChartServiceImpl->draw_chart] {} has no series", spec.id)
            })?;
            let values: Vec<f64> = series.values.iter().map(|value| *value as f64).collect();
            draw_line(&root, spec, &table.row_labels, &values, axis, markers)?;
        }
        (PlotKind::Line { markers }, _) => {
            let (labels, values) = one_dimensional(spec, data)?;
            draw_line(&root, spec, &labels, &values, axis, markers)?;
        }
        (PlotKind::MultiLine, ChartData::Table(table)) => draw_multi_line(&root, spec, table)?,
        (PlotKind::GroupedBar, ChartData::Table(table)) => draw_grouped_bars(&root, spec, table)?,
        (PlotKind::Scatter, ChartData::Points(points)) => draw_scatter(&root, spec, points)?,
        (PlotKind::Pie, _) => {
            let (labels, values) = one_dimensional(spec, data)?;
            draw_pie(&root, spec, &labels, &values)?;
        }
        (PlotKind::WordCloud, ChartData::Words(words)) => draw_word_cloud(&root, spec, words)?,
        (plot, data) => {
            return Err(anyhow!(
                "[ChartServiceImpl->draw_chart] {:?} cannot draw {} data for {}",
                plot,
                data.kind_name(),
                spec.id
            ))
        }
    }

    root.present()?;
    Ok(())
}

fn one_dimensional(spec: &ChartSpec, data: &ChartData) -> anyhow::Result<(Vec<String>, Vec<f64>)> {
    data.labeled_values().ok_or_else(|| {
        anyhow!(
            "[ChartServiceImpl->one_dimensional] {:?} cannot draw {} data for {}",
            spec.plot,
            data.kind_name(),
            spec.id
        )
    })
}

fn text_style(size: u32, color: &RGBColor) -> TextStyle<'static> {
    ("sans-serif", size).into_font().color(color)
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

#[doc = "Helper function to determine Y-axis range with padding"]
fn calculate_y_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 100.0);
    }

    let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

    let y_min: f64 = (min_val - padding).max(0.0);
    let y_max: f64 = max_val + padding;

    (y_min, y_max)
}

#[doc = "Thousands separated integer label"]
fn format_number(value: f64) -> String {
    let rounded: i64 = value.round() as i64;
    let digits: String = rounded.abs().to_string();
    let mut result: String = String::new();

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if rounded < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

#[doc = "How the value axis of a chart is ticked and labelled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueAxis {
    /// Whole numbers only; fractional ticks stay unlabelled
    Count,
    /// Averages, one decimal place
    Mean,
}

impl ValueAxis {
    fn of(data: &ChartData) -> Self {
        match data {
            ChartData::Means(_) => ValueAxis::Mean,
            _ => ValueAxis::Count,
        }
    }

    #[doc = "Tick count hint; a count axis never asks for more ticks than whole numbers in range"]
    fn label_hint(&self, lower: f64, upper: f64) -> usize {
        match self {
            ValueAxis::Count => ((upper - lower).max(0.0).floor() as usize + 1).clamp(2, 10),
            ValueAxis::Mean => 10,
        }
    }

    fn format(&self, value: f64) -> String {
        match self {
            ValueAxis::Count if (value - value.round()).abs() < 1e-6 => format_number(value),
            ValueAxis::Count => String::new(),
            ValueAxis::Mean => format!("{:.1}", value),
        }
    }
}

#[doc = "Upper end of a segmented range holding exactly `slots` slots (at least two)"]
fn last_slot(slots: usize) -> usize {
    slots.max(2) - 1
}

fn draw_vertical_bars(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
    axis: ValueAxis,
    gap: u32,
) -> anyhow::Result<()> {
    let (_, y_max) = calculate_y_range(values);
    /* Long histograms keep roughly twenty readable x labels */
    let label_every: usize = labels.len().div_ceil(20).max(1);

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, text_style(40, &TITLE_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0..last_slot(labels.len())).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_labels(labels.len())
        .y_labels(axis.label_hint(0.0, y_max))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(text_style(22, &TEXT_COLOR))
        .x_label_style(text_style(16, &TEXT_COLOR))
        .y_label_style(text_style(18, &TEXT_COLOR))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) if *idx % label_every == 0 => {
                labels.get(*idx).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .y_label_formatter(&|y| axis.format(*y))
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(idx, value)| {
        let color: RGBColor = rgb(spec.colors.color_at(idx, values.len()));
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(idx), 0f64), (SegmentValue::Exact(idx + 1), *value)],
            color.filled(),
        );
        bar.set_margin(0, 0, gap, gap);
        bar
    }))?;

    Ok(())
}

#[doc = "Ranked bars, the first item is drawn at the top"]
fn draw_horizontal_bars(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
    axis: ValueAxis,
) -> anyhow::Result<()> {
    let (_, x_max) = calculate_y_range(values);
    let bar_cnt: usize = labels.len();

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, text_style(40, &TITLE_COLOR))
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(240)
        .build_cartesian_2d(0f64..x_max, (0..last_slot(bar_cnt)).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_labels(axis.label_hint(0.0, x_max))
        .y_labels(bar_cnt)
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(text_style(22, &TEXT_COLOR))
        .x_label_style(text_style(18, &TEXT_COLOR))
        .y_label_style(text_style(16, &TEXT_COLOR))
        .x_label_formatter(&|x| axis.format(*x))
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) if *idx < bar_cnt => {
                labels[bar_cnt - 1 - *idx].clone()
            }
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(rank, value)| {
        let color: RGBColor = rgb(spec.colors.color_at(rank, bar_cnt));
        let slot: usize = bar_cnt - 1 - rank;
        let mut bar = Rectangle::new(
            [(0f64, SegmentValue::Exact(slot)), (*value, SegmentValue::Exact(slot + 1))],
            color.filled(),
        );
        bar.set_margin(4, 4, 0, 0);
        bar
    }))?;

    Ok(())
}

#[doc = "Series of row counts, one cluster per row and one bar per series"]
fn draw_grouped_bars(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    table: &CrossTab,
) -> anyhow::Result<()> {
    let series_cnt: usize = table.series.len();
    /* one empty segment separates clusters */
    let stride: usize = series_cnt + 1;
    let segment_cnt: usize = table.row_labels.len() * stride;

    let all_values: Vec<f64> = table
        .series
        .iter()
        .flat_map(|series| series.values.iter().map(|value| *value as f64))
        .collect();
    let (_, y_max) = calculate_y_range(&all_values);

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, text_style(40, &TITLE_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0..last_slot(segment_cnt)).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_labels(segment_cnt)
        .y_labels(ValueAxis::Count.label_hint(0.0, y_max))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(text_style(22, &TEXT_COLOR))
        .x_label_style(text_style(15, &TEXT_COLOR))
        .y_label_style(text_style(18, &TEXT_COLOR))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) if *idx % stride == series_cnt / 2 => table
                .row_labels
                .get(*idx / stride)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| ValueAxis::Count.format(*y))
        .draw()?;

    for (series_idx, series) in table.series.iter().enumerate() {
        let color: RGBColor = rgb(spec.colors.color_at(series_idx, series_cnt));

        chart
            .draw_series(series.values.iter().enumerate().map(|(row_idx, value)| {
                let slot: usize = row_idx * stride + series_idx;
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(slot), 0f64),
                        (SegmentValue::Exact(slot + 1), *value as f64),
                    ],
                    color.filled(),
                );
                bar.set_margin(0, 0, 1, 1);
                bar
            }))?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(BACKGROUND_COLOR.mix(0.8))
        .border_style(AXIS_COLOR)
        .label_font(text_style(18, &TEXT_COLOR))
        .draw()?;

    Ok(())
}

#[doc = "Index based x axis, labels are mapped back through the formatter"]
fn draw_line(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
    axis: ValueAxis,
    markers: bool,
) -> anyhow::Result<()> {
    let (y_min, y_max) = calculate_y_range(values);
    let line_color: RGBColor = rgb(spec.colors.color_at(0, 1));

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, text_style(40, &TITLE_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0..labels.len().saturating_sub(1).max(1), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_labels(labels.len().min(12))
        .y_labels(axis.label_hint(y_min, y_max))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(text_style(22, &TEXT_COLOR))
        .x_label_style(text_style(18, &TEXT_COLOR))
        .y_label_style(text_style(18, &TEXT_COLOR))
        .x_label_formatter(&|x| labels.get(*x).cloned().unwrap_or_default())
        .y_label_formatter(&|y| axis.format(*y))
        .draw()?;

    chart.draw_series(LineSeries::new(
        values.iter().enumerate().map(|(idx, value)| (idx, *value)),
        line_color.stroke_width(3),
    ))?;

    if markers {
        chart.draw_series(
            values
                .iter()
                .enumerate()
                .map(|(idx, value)| Circle::new((idx, *value), 4, line_color.filled())),
        )?;
    }

    Ok(())
}

fn draw_multi_line(root: &ChartArea<'_>, spec: &ChartSpec, table: &CrossTab) -> anyhow::Result<()> {
    let labels: &[String] = &table.row_labels;
    let all_values: Vec<f64> = table
        .series
        .iter()
        .flat_map(|series| series.values.iter().map(|value| *value as f64))
        .collect();
    let (y_min, y_max) = calculate_y_range(&all_values);

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, text_style(40, &TITLE_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0..labels.len().saturating_sub(1).max(1), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_labels(labels.len().min(12))
        .y_labels(ValueAxis::Count.label_hint(y_min, y_max))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(text_style(22, &TEXT_COLOR))
        .x_label_style(text_style(18, &TEXT_COLOR))
        .y_label_style(text_style(18, &TEXT_COLOR))
        .x_label_formatter(&|x| labels.get(*x).cloned().unwrap_or_default())
        .y_label_formatter(&|y| ValueAxis::Count.format(*y))
        .draw()?;

    let series_cnt: usize = table.series.len();

    for (series_idx, series) in table.series.iter().enumerate() {
        let color: RGBColor = rgb(spec.colors.color_at(series_idx, series_cnt));

        chart
            .draw_series(LineSeries::new(
                series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| (idx, *value as f64)),
                color.stroke_width(3),
            ))?
            .label(series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(BACKGROUND_COLOR.mix(0.8))
        .border_style(AXIS_COLOR)
        .label_font(text_style(18, &TEXT_COLOR))
        .draw()?;

    Ok(())
}

fn draw_scatter(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    points: &[YearDuration],
) -> anyhow::Result<()> {
    let year_min: i32 = points.iter().map(|point| point.release_year).min().unwrap_or(2000);
    let year_max: i32 = points.iter().map(|point| point.release_year).max().unwrap_or(2020);
    let minutes: Vec<f64> = points.iter().map(|point| point.minutes as f64).collect();
    let (_, y_max) = calculate_y_range(&minutes);
    let point_color: RGBColor = rgb(spec.colors.color_at(0, 1));

    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, text_style(40, &TITLE_COLOR))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((year_min - 1)..(year_max + 1), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .x_labels(12)
        .y_labels(ValueAxis::Count.label_hint(0.0, y_max))
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(text_style(22, &TEXT_COLOR))
        .x_label_style(text_style(18, &TEXT_COLOR))
        .y_label_style(text_style(18, &TEXT_COLOR))
        .x_label_formatter(&|year| year.to_string())
        .y_label_formatter(&|y| ValueAxis::Count.format(*y))
        .draw()?;

    chart.draw_series(points.iter().map(|point| {
        Circle::new(
            (point.release_year, point.minutes as f64),
            3,
            point_color.mix(0.6).filled(),
        )
    }))?;

    Ok(())
}

fn draw_pie(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    labels: &[String],
    values: &[f64],
) -> anyhow::Result<()> {
    let area: ChartArea<'_> = root.titled(spec.title, text_style(40, &TITLE_COLOR))?;
    let (width, height) = area.dim_in_pixel();

    let center: (i32, i32) = ((width / 2) as i32, (height / 2) as i32);
    let radius: f64 = width.min(height) as f64 * 0.35;
    let colors: Vec<RGBColor> = (0..values.len())
        .map(|idx| rgb(spec.colors.color_at(idx, values.len())))
        .collect();

    let mut pie = Pie::new(&center, &radius, values, &colors, labels);
    pie.start_angle(90.0);
    pie.label_style(text_style(22, &TEXT_COLOR));
    pie.percentages(text_style(20, &BACKGROUND_COLOR));

    area.draw(&pie)?;

    Ok(())
}

#[doc = r#"
    Places words on an Archimedean spiral around the center, largest first.

    The font size grows with the square root of the relative frequency. Each
    word starts at a random angle from an RNG seeded with the chart id, so the
    layout is the same on every run. Words that do not fit anywhere are skipped.
"#]
fn draw_word_cloud(
    root: &ChartArea<'_>,
    spec: &ChartSpec,
    words: &[CategoryCount],
) -> anyhow::Result<()> {
    let area: ChartArea<'_> = root.titled(spec.title, text_style(40, &TITLE_COLOR))?;
    let (width, height) = area.dim_in_pixel();
    let (width, height): (i32, i32) = (width as i32, height as i32);

    let max_count: f64 = words.iter().map(|word| word.count).max().unwrap_or(1).max(1) as f64;
    let mut rng: StdRng = StdRng::seed_from_u64(spec.id as u64);
    let mut placed: Vec<(i32, i32, i32, i32)> = Vec::with_capacity(words.len());

    for (idx, word) in words.iter().enumerate() {
        let font_size: f64 = 14.0 + 70.0 * (word.count as f64 / max_count).sqrt();
        let color: RGBColor = rgb(spec.colors.color_at(idx, words.len()));
        let style: TextStyle<'_> = ("sans-serif", font_size).into_font().color(&color);

        let (text_w, text_h) = area.estimate_text_size(&word.name, &style)?;
        let (text_w, text_h): (i32, i32) = (text_w as i32, text_h as i32);

        let start_angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);

        for step in 0..3000 {
            let t: f64 = step as f64 * 0.1;
            let x: i32 = width / 2 + (2.0 * t * (t + start_angle).cos()) as i32 - text_w / 2;
            let y: i32 = height / 2 + (1.4 * t * (t + start_angle).sin()) as i32 - text_h / 2;

            if x < 0 || y < 0 || x + text_w > width || y + text_h > height {
                continue;
            }

            let rect: (i32, i32, i32, i32) = (x, y, x + text_w, y + text_h);
            let overlaps: bool = placed.iter().any(|other| {
                rect.0 < other.2 && other.0 < rect.2 && rect.1 < other.3 && other.1 < rect.3
            });

            if !overlaps {
                area.draw(&Text::new(word.name.as_str(), (x, y), style.clone()))?;
                placed.push(rect);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chart::chart_registry::*;
    use crate::model::title::cleaned_table::*;
    use crate::repository::title_csv_repository_impl::*;
    use crate::service::{aggregation_service_impl::*, loader_service_impl::*};
    use crate::traits::service_traits::aggregation_service::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG";

    const FIXTURE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,The Long Road Home,Ana Lima,\"Ana Lima, Joao Dias\",Brazil,\"September 25, 2021\",2019,PG,95 min,\"Dramas, Independent Movies\",d
s2,TV Show,Night Harbor,,Kenji Sato,Japan,\"March 3, 2020\",2020,TV-MA,2 Seasons,\"Crime TV Shows, TV Dramas\",d
s3,Movie,Winter Harbor,Ana Lima,Joao Dias,Brazil,2021-01-15,2020,R,102 min,Dramas,d
s4,Movie,Summer Road,Lee Park,Kenji Sato,South Korea,\"Jul 4, 2019\",2018,PG-13,110 min,Comedies,d
s5,Movie,Endless Night,Lee Park,Mina Choi,South Korea,,2017,R,20000000 min,\"Dramas, Thrillers\",d
s6,TV Show,Harbor Lights,,Mina Choi,Japan,\"March 9, 2021\",2021,TV-14,1 Season,\"TV Dramas\",d
";

    fn fixture_table() -> CleanedTable {
        let loader: LoaderServiceImpl<TitleCsvRepositoryImpl> =
            LoaderServiceImpl::new(TitleCsvRepositoryImpl::new(b','));
        loader
            .load_from_reader(Box::new(FIXTURE.as_bytes()))
            .unwrap()
    }

    async fn render_registry(table: &CleanedTable, dir: &Path) {
        let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
        let chart_service: ChartServiceImpl = ChartServiceImpl::new();

        for spec in get_chart_registry() {
            if let Some(precondition) = &spec.precondition {
                assert_eq!(aggregation_service.check_precondition(table, precondition), None);
            }

            let data: ChartData = aggregation_service
                .aggregate(table, &spec.aggregation)
                .unwrap();

            chart_service
                .render_chart(spec, data, &dir.join(spec.output_file))
                .await
                .unwrap_or_else(|e| panic!("{} failed to render: {:?}", spec.id, e));
        }
    }

    #[tokio::test]
    async fn every_registered_chart_renders_and_overwrites() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let output_dir: PathBuf = dir.path().join("images");
        let table: CleanedTable = fixture_table();

        render_registry(&table, &output_dir).await;

        for spec in get_chart_registry() {
            let path: PathBuf = output_dir.join(spec.output_file);
            let bytes: Vec<u8> = fs::read(&path).unwrap();
            assert!(bytes.starts_with(PNG_MAGIC), "{} is not a png", spec.id);
            fs::write(&path, b"stale").unwrap();
        }

        render_registry(&table, &output_dir).await;

        for spec in get_chart_registry() {
            let bytes: Vec<u8> = fs::read(output_dir.join(spec.output_file)).unwrap();
            assert!(bytes.starts_with(PNG_MAGIC), "{} was not overwritten", spec.id);
        }
    }

    #[test]
    fn count_axis_only_labels_whole_numbers() {
        assert_eq!(ValueAxis::Count.format(0.5), "");
        assert_eq!(ValueAxis::Count.format(2.0), "2");
        assert_eq!(ValueAxis::Count.format(1500.0), "1,500");
        assert_eq!(ValueAxis::Count.label_hint(0.0, 3.0), 4);
        assert_eq!(ValueAxis::Count.label_hint(0.0, 500.0), 10);
        assert_eq!(ValueAxis::Mean.format(97.26), "97.3");
    }

    #[test]
    fn value_axis_follows_the_data_kind() {
        assert_eq!(ValueAxis::of(&ChartData::Means(Vec::new())), ValueAxis::Mean);
        assert_eq!(ValueAxis::of(&ChartData::Bins(Vec::new())), ValueAxis::Count);
    }

    #[test]
    fn segmented_range_has_one_slot_per_bar() {
        assert_eq!(last_slot(5), 4);
        assert_eq!(last_slot(1), 1);
    }

    #[test]
    fn y_range_is_padded_and_never_negative() {
        let (y_min, y_max) = calculate_y_range(&[2.0, 50.0]);
        assert_eq!(y_min, 0.0);
        assert!(y_max > 50.0);

        assert_eq!(calculate_y_range(&[]), (0.0, 100.0));
    }

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(999.4), "999");
        assert_eq!(format_number(-1200.0), "-1,200");
    }

    #[tokio::test]
    async fn empty_data_is_rejected_before_drawing() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let spec: &ChartSpec = &crate::model::chart::chart_registry::get_chart_registry()[0];

        let result: anyhow::Result<()> = ChartServiceImpl::new()
            .render_chart(spec, ChartData::Counts(Vec::new()), &dir.path().join("x.png"))
            .await;

        assert!(result.is_err());
        assert!(!dir.path().join("x.png").exists());
    }
}
