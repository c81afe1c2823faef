//! PNG rendering of plot series
//!
//! Minimal raster plots: white canvas, framed plot area, zero line, and the
//! series drawn as a polyline or as stems. No text is rasterised; each
//! series' caption (title, axes, legend) is printed next to its file name.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

use harmonic_dft::report::{PlotSeries, PlotStyle};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 600;
const MARGIN: u32 = 40;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([0, 0, 0]);
const ZERO_LINE: Rgb<u8> = Rgb([190, 190, 190]);

/// Series colour by label, matching the usual blue/green/red scheme
fn series_color(label: &str) -> Rgb<u8> {
    match label {
        "X2 Signal" => Rgb([0, 128, 0]),
        "Combined Signal" => Rgb([220, 0, 0]),
        _ => Rgb([0, 0, 220]),
    }
}

/// Data-to-pixel mapping for the inner plot area
struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    fn fit(points: &[(f64, f64)], x_range: Option<(f64, f64)>, width: u32, height: u32) -> Self {
        let (mut x_min, mut x_max) = x_range.unwrap_or_else(|| extent(points.iter().map(|p| p.0)));
        let (mut y_min, mut y_max) = extent(points.iter().map(|p| p.1));

        // Keep the zero line in view and avoid a flat range
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
        if x_max <= x_min {
            x_min -= 1.0;
            x_max += 1.0;
        }
        if y_max <= y_min {
            y_min -= 1.0;
            y_max += 1.0;
        }
        let pad = 0.05 * (y_max - y_min);

        Self {
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
            width,
            height,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let inner_w = (self.width - 2 * MARGIN - 1) as f64;
        let inner_h = (self.height - 2 * MARGIN - 1) as f64;

        let px = MARGIN as f64 + (x - self.x_min) / (self.x_max - self.x_min) * inner_w;
        let py = (self.height - MARGIN - 1) as f64 - (y - self.y_min) / (self.y_max - self.y_min) * inner_h;
        (px.round() as i64, py.round() as i64)
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn put(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line
fn draw_line(image: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(image, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Render one series to an image of the given size
pub fn render_plot(series: &PlotSeries, width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(width, height, BACKGROUND);
    let points: Vec<(f64, f64)> = series.visible_points().collect();
    let view = Viewport::fit(&points, series.x_range, width, height);
    let color = series_color(series.label);

    let (left, top) = (MARGIN as i64, MARGIN as i64);
    let (right, bottom) = ((width - MARGIN - 1) as i64, (height - MARGIN - 1) as i64);

    let (_, zero_y) = view.to_pixel(view.x_min, 0.0);
    draw_line(&mut image, (left, zero_y), (right, zero_y), ZERO_LINE);

    match series.style {
        PlotStyle::Line => {
            for pair in points.windows(2) {
                let a = view.to_pixel(pair[0].0, pair[0].1);
                let b = view.to_pixel(pair[1].0, pair[1].1);
                draw_line(&mut image, a, b, color);
            }
            if let [only] = points.as_slice() {
                let p = view.to_pixel(only.0, only.1);
                put(&mut image, p.0, p.1, color);
            }
        }
        PlotStyle::Stem => {
            for &(x, y) in &points {
                let top_point = view.to_pixel(x, y);
                draw_line(&mut image, (top_point.0, zero_y), top_point, color);
            }
        }
    }

    draw_line(&mut image, (left, top), (right, top), FRAME);
    draw_line(&mut image, (right, top), (right, bottom), FRAME);
    draw_line(&mut image, (right, bottom), (left, bottom), FRAME);
    draw_line(&mut image, (left, bottom), (left, top), FRAME);

    image
}

/// Render every series into `dir` as `<slug>.png`
pub fn save_plots(plots: &[PlotSeries], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create plot directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(plots.len());
    for series in plots {
        let path = dir.join(format!("{}.png", series.slug()));
        render_plot(series, WIDTH, HEIGHT)
            .save(&path)
            .with_context(|| format!("Failed to save plot {}", path.display()))?;
        log::debug!("Saved {} to {}", series.label, path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(style: PlotStyle, label: &'static str) -> PlotSeries {
        PlotSeries {
            label,
            title: String::new(),
            legend: None,
            x_label: "x",
            y_label: "y",
            style,
            x: vec![0.0, 1.0, 2.0, 3.0],
            y: vec![0.0, 2.0, -1.0, 0.5],
            x_range: None,
        }
    }

    fn count_color(image: &RgbImage, color: Rgb<u8>) -> usize {
        image.pixels().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_line_plot_draws_series() {
        let image = render_plot(&series(PlotStyle::Line, "Combined Signal"), 200, 120);

        assert_eq!(image.dimensions(), (200, 120));
        assert!(count_color(&image, Rgb([220, 0, 0])) > 50);
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*image.get_pixel(MARGIN, MARGIN), FRAME);
    }

    #[test]
    fn test_stem_plot_respects_range() {
        let mut stems = series(PlotStyle::Stem, "DFT Spectrum");
        stems.x_range = Some((0.0, 1.5));
        let image = render_plot(&stems, 200, 120);

        assert!(count_color(&image, Rgb([0, 0, 220])) > 0);
    }

    #[test]
    fn test_flat_series_does_not_panic() {
        let mut flat = series(PlotStyle::Line, "X1 Signal");
        flat.x = vec![0.0];
        flat.y = vec![0.0];
        render_plot(&flat, 100, 100);
    }

    #[test]
    fn test_save_plots_writes_files() {
        let dir = std::env::temp_dir().join(format!("harmonic-dft-plots-{}", std::process::id()));
        let plots = vec![
            series(PlotStyle::Line, "X1 Signal"),
            series(PlotStyle::Stem, "DFT Spectrum"),
        ];

        let written = save_plots(&plots, &dir).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("x1_signal.png"));
        assert!(written.iter().all(|p| p.exists()));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
