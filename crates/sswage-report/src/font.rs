/// Bundled chart font.
///
/// `plotters` is built with its `ab_glyph` text backend, which never looks
/// at system fonts: every family used in a chart has to be registered first.
/// DejaVu Sans is embedded and registered under the `sans-serif` family, the
/// family `plotters` uses for axis labels by default.
use crate::error::{RenderError, Result};
use plotters::style::FontStyle;
use std::sync::OnceLock;

/// Family name every text element in a chart uses.
pub const FONT_FAMILY: &str = "sans-serif";

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Register the bundled font once per process.
pub fn ensure_registered() -> Result<()> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED.get_or_init(|| {
        plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, DEJAVU_SANS).is_ok()
    });
    if ok {
        Ok(())
    } else {
        Err(RenderError::Font)
    }
}
