/// Colours and dimensions for the histogram images.
///
/// All visual constants live here so the drawing code references
/// semantically-named values rather than raw numbers.
use plotters::style::RGBColor;

pub struct ChartTheme {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub bar: RGBColor,
    pub bar_edge: RGBColor,
    pub grid: RGBColor,
    pub title_size: u32,
    pub axis_desc_size: u32,
    pub tick_size: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    /// Approximate number of gridlines along each axis.
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Dot length and gap of the gridlines, in pixels.
    pub grid_dot: u32,
    pub grid_gap: u32,
}

impl Default for ChartTheme {
    /// 640x480, white background, blue bars.
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: RGBColor(0xff, 0xff, 0xff),
            bar: RGBColor(0x1f, 0x77, 0xb4),
            bar_edge: RGBColor(0x17, 0x5a, 0x88),
            grid: RGBColor(0xb0, 0xb0, 0xb0),
            title_size: 18,
            axis_desc_size: 15,
            tick_size: 12,
            margin: 12,
            x_label_area: 45,
            y_label_area: 60,
            x_ticks: 6,
            y_ticks: 8,
            grid_dot: 1,
            grid_gap: 3,
        }
    }
}
