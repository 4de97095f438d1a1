/// Histogram chart rendering with `plotters`' bitmap backend.
///
/// One call draws one PNG on a fresh backend, so nothing (series, axes,
/// title) carries over from a previous chart. Bars are drawn from the
/// histogram's own bins; only the part of the x-range up to `view_max` is
/// shown, bins beyond it keep their counts but are not drawn.
use crate::error::{RenderError, Result};
use crate::font::{self, FONT_FAMILY};
use crate::theme::ChartTheme;
use plotters::prelude::*;
use sswage_core::analysis::Histogram;
use std::fmt::Display;
use std::path::Path;

pub const X_LABEL: &str = "Years since last mod";
pub const Y_LABEL: &str = "# files";

/// Everything drawn in one image.
pub struct HistogramChart<'a> {
    pub title: String,
    pub histogram: &'a Histogram,
    /// Right end of the visible x-axis, in the histogram's units.
    pub view_max: f64,
}

/// Top of the y-axis: a little headroom above the tallest visible bar, and
/// never zero so an empty histogram still gets a sensible axis.
pub fn y_axis_top(max_visible_count: u64) -> u64 {
    max_visible_count + max_visible_count / 20 + 1
}

/// Render `chart` and save it as a PNG at `path`.
///
/// The parent directory must exist; a missing or unwritable directory is
/// reported as [`RenderError::Draw`].
pub fn draw_histogram(path: &Path, chart: &HistogramChart<'_>, theme: &ChartTheme) -> Result<()> {
    font::ensure_registered()?;

    let hist = chart.histogram;
    let x_min = hist.bins.start;
    let x_max = if chart.view_max > x_min {
        chart.view_max
    } else {
        hist.bins.end
    };
    let y_top = y_axis_top(hist.max_count_below(x_max));

    let root = BitMapBackend::new(path, (theme.width, theme.height)).into_drawing_area();
    root.fill(&theme.background).map_err(draw_error(path))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT_FAMILY, theme.title_size))
        .margin(theme.margin)
        .x_label_area_size(theme.x_label_area)
        .y_label_area_size(theme.y_label_area)
        .build_cartesian_2d(x_min..x_max, 0u64..y_top)
        .map_err(draw_error(path))?;

    ctx.configure_mesh()
        .disable_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style((FONT_FAMILY, theme.axis_desc_size))
        .label_style((FONT_FAMILY, theme.tick_size))
        .x_labels(theme.x_ticks)
        .y_labels(theme.y_ticks)
        .draw()
        .map_err(draw_error(path))?;

    // Dotted gridlines at the tick positions, under the bars.
    let grid = theme.grid.stroke_width(1);
    let x_ticks = ctx.as_coord_spec().x_spec().key_points(theme.x_ticks);
    let y_ticks = ctx.as_coord_spec().y_spec().key_points(theme.y_ticks);
    for x in x_ticks {
        ctx.draw_series(DashedLineSeries::new(
            vec![(x, 0u64), (x, y_top)],
            theme.grid_dot,
            theme.grid_gap,
            grid,
        ))
        .map_err(draw_error(path))?;
    }
    for y in y_ticks {
        ctx.draw_series(DashedLineSeries::new(
            vec![(x_min, y), (x_max, y)],
            theme.grid_dot,
            theme.grid_gap,
            grid,
        ))
        .map_err(draw_error(path))?;
    }

    let visible: Vec<(f64, f64, u64)> = hist
        .iter_bins()
        .filter(|&(lo, _, count)| count > 0 && lo < x_max)
        .map(|(lo, hi, count)| (lo, hi.min(x_max), count))
        .collect();

    ctx.draw_series(
        visible
            .iter()
            .map(|&(lo, hi, count)| Rectangle::new([(lo, 0u64), (hi, count)], theme.bar.filled())),
    )
    .map_err(draw_error(path))?;
    ctx.draw_series(visible.iter().map(|&(lo, hi, count)| {
        Rectangle::new([(lo, 0u64), (hi, count)], theme.bar_edge.stroke_width(1))
    }))
    .map_err(draw_error(path))?;

    root.present().map_err(draw_error(path))?;
    Ok(())
}

fn draw_error<E: Display>(path: &Path) -> impl Fn(E) -> RenderError + '_ {
    move |err| RenderError::Draw {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
