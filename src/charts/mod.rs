//! Risk-factor and symptom charts rendered to temporary PNG files.
//!
//! Charts are drawn with `plotters` into an in-memory RGB buffer and encoded
//! as PNG. Each rendered chart is owned by a [`ChartImage`]; the backing
//! file is unique per render and is removed when the handle is dropped.

mod bar;
mod pie;

use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use plotters::style::{FontStyle, RGBColor, register_font};
use printpdf::image_crate::{DynamicImage, ImageFormat, RgbImage};
use tempfile::NamedTempFile;
use tracing::debug;

pub use bar::{BAR_HEIGHT, BAR_WIDTH, render_risk_factor_chart, risk_factor_values};
pub use pie::{PieSlice, render_symptom_chart, symptom_distribution};

pub(crate) const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[derive(Debug)]
pub struct ChartImage {
    file: NamedTempFile,
    width: u32,
    height: u32,
}

impl ChartImage {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copies the PNG to a stable location; the temporary file is untouched.
    pub fn persist_copy(&self, dest: &Path) -> Result<()> {
        std::fs::copy(self.path(), dest).with_context(|| {
            format!(
                "failed to copy chart {} to {}",
                self.path().display(),
                dest.display()
            )
        })?;
        Ok(())
    }
}

const CHART_FONT_FAMILY: &str = "sans-serif";
static CHART_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Registers the bundled chart font with plotters. Runs once per process.
pub(crate) fn ensure_font() -> Result<()> {
    let ok = *FONT_REGISTERED.get_or_init(|| {
        register_font(CHART_FONT_FAMILY, FontStyle::Normal, CHART_FONT).is_ok()
    });
    if !ok {
        anyhow::bail!("bundled chart font could not be loaded");
    }
    Ok(())
}

pub(crate) fn draw_err<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!("chart drawing failed: {}", err)
}

pub(crate) fn write_png(
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    prefix: &str,
) -> Result<ChartImage> {
    let img = RgbImage::from_raw(width, height, buffer)
        .context("chart buffer does not match its dimensions")?;

    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".png")
        .tempfile()
        .context("failed to create temporary chart file")?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut writer, ImageFormat::Png)
            .context("failed to encode chart PNG")?;
        writer.flush()?;
    }
    debug!(path = %file.path().display(), "chart_png_written");

    Ok(ChartImage {
        file,
        width,
        height,
    })
}
