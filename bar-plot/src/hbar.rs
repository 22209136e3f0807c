use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::Result;
use crate::table::Table;

const FONT_SIZE_TITLE: u32 = 16;
const FONT_SIZE_AXIS_LABEL: u32 = 14;
const FONT_SIZE_VALUE_LABEL: u32 = 12;
/// Vertical gap between a bar and its band edge, in pixels.
const BAR_MARGIN_PX: u32 = 3;

/// Options for [`hbar_plot`]. The font sizes default to the fixed values
/// the chart has always used.
#[derive(Debug, Clone)]
pub struct HbarOptions {
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub title: Option<String>,
    pub title_size: u32,
    pub value_label_size: u32,
}

impl Default for HbarOptions {
    fn default() -> Self {
        Self {
            xlabel: None,
            ylabel: None,
            title: None,
            title_size: FONT_SIZE_TITLE,
            value_label_size: FONT_SIZE_VALUE_LABEL,
        }
    }
}

/// Draw a horizontal bar chart of `measure` by `category` onto `area`,
/// labelling each bar with its own value, centered inside the bar.
///
/// One bar per table row, insertion order, first row at the top. Bar colors
/// come from a fixed qualitative palette. Column lookups fail before
/// anything is drawn.
pub fn hbar_plot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    category: &str,
    measure: &str,
    data: &Table,
    options: &HbarOptions,
) -> Result<()> {
    let labels = data.labels(category)?;
    let values = data.numbers(measure)?;
    let n = values.len() as i32;

    info!("drawing {} bars of '{}' by '{}'", n, measure, category);

    let bars = bar_layout(&values);
    let (x_min, x_max) = measure_range(&values);
    let seg_max = (n - 1).max(0);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(label_area_width(&labels));
    if let Some(title) = &options.title {
        builder.caption(title, ("sans-serif", options.title_size).into_font());
    }
    let mut chart = builder.build_cartesian_2d(x_min..x_max, (0..seg_max).into_segmented())?;

    let x_formatter = |v: &f64| format_axis_value(*v);
    let y_formatter = |seg: &SegmentValue<i32>| -> String {
        if let SegmentValue::CenterOf(j) = seg {
            let row = seg_max - *j;
            if (0..n).contains(&row) {
                return labels[row as usize].clone();
            }
        }
        String::new()
    };

    let mut mesh = chart.configure_mesh();
    mesh.disable_y_mesh()
        .y_labels(values.len().max(1))
        .axis_desc_style(("sans-serif", FONT_SIZE_AXIS_LABEL).into_font())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if let Some(xlabel) = &options.xlabel {
        mesh.x_desc(xlabel);
    }
    if let Some(ylabel) = &options.ylabel {
        mesh.y_desc(ylabel);
    }
    mesh.draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let seg = seg_max - i as i32;
        let mut rect = Rectangle::new(
            [
                (bar.x0, SegmentValue::Exact(seg)),
                (bar.x1, SegmentValue::Exact(seg + 1)),
            ],
            Palette99::pick(i).filled(),
        );
        rect.set_margin(BAR_MARGIN_PX, BAR_MARGIN_PX, 0, 0);
        rect
    }))?;

    let label_style = ("sans-serif", options.value_label_size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let seg = seg_max - i as i32;
        Text::new(
            format_axis_value(values[i]),
            (bar.label_x, SegmentValue::CenterOf(seg)),
            label_style.clone(),
        )
    }))?;

    area.present()?;
    Ok(())
}

pub(crate) struct BarSpan {
    x0: f64,
    x1: f64,
    label_x: f64,
}

/// Horizontal extent of each bar and the anchor of its centered label.
pub(crate) fn bar_layout(values: &[f64]) -> Vec<BarSpan> {
    values
        .iter()
        .map(|&v| {
            let (x0, x1) = if v < 0.0 { (v, 0.0) } else { (0.0, v) };
            BarSpan {
                x0,
                x1,
                label_x: v / 2.0,
            }
        })
        .collect()
}

/// Measure-axis range. Always includes zero; the far end is padded so bars
/// never touch the frame, and a degenerate range gets a fixed pad.
pub(crate) fn measure_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().cloned().fold(0.0f64, f64::min);
    let hi = values.iter().cloned().fold(0.0f64, f64::max);
    let span = hi - lo;
    let pad = if span < 1e-6 { 0.5 } else { span * 0.05 };
    let min = if lo < 0.0 { lo - pad } else { lo };
    (min, hi + pad)
}

/// Estimated pixel width needed for the category tick labels.
pub(crate) fn label_area_width(labels: &[String]) -> u32 {
    // Approximate character width relative to font size.
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let est = longest as f32 * FONT_SIZE_AXIS_LABEL as f32 * CHAR_WIDTH_RATIO;
    (est as u32).clamp(40, 240)
}

/// Format an axis or bar-label value: one decimal below ten, plain integers
/// up to a thousand, then k/M notation.
pub(crate) fn format_axis_value(v: f64) -> String {
    if v.abs() >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v.abs() >= 1000.0 {
        format!("{:.0}k", v / 1000.0)
    } else if v.abs() < 10.0 && v.fract() != 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.0}", v)
    }
}
