// src/core/visualization/plot.rs
//
// ROC and SDT chart rendering

use anyhow::Result;
use image::{ImageBuffer, Rgb};
use log::debug;
use std::path::Path;

use crate::core::outcome::DetectionOutcome;
use crate::core::stats::normal_pdf;

/// Chart layout configuration
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border around the plot area, in pixels
    pub margin: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 48,
        }
    }
}

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([200, 200, 200]);
const ROC_CURVE: Rgb<u8> = Rgb([31, 119, 180]);
const NOISE_CURVE: Rgb<u8> = Rgb([214, 39, 40]);
const SIGNAL_CURVE: Rgb<u8> = Rgb([31, 119, 180]);
const THRESHOLD_MARK: Rgb<u8> = Rgb([218, 165, 32]);
const REFERENCE_MARK: Rgb<u8> = Rgb([44, 160, 44]);

// Density plot domain and fixed y-range; the unit-variance peak is ~0.399
const SDT_X_MIN: f64 = -5.0;
const SDT_X_MAX: f64 = 5.0;
const SDT_Y_MAX: f64 = 0.5;

/// Render the ROC plot for an outcome
///
/// Draws the three-point polyline (0,0) → (false-alarm rate, hit rate) →
/// (1,1) over the chance diagonal and writes a PNG to `output_path`.
pub fn render_roc(
    outcome: &DetectionOutcome,
    config: &PlotConfig,
    output_path: &Path,
) -> Result<()> {
    let hit_rate = outcome.hit_rate();
    let fa_rate = outcome.false_alarm_rate();
    if !hit_rate.is_finite() || !fa_rate.is_finite() {
        anyhow::bail!(
            "ROC plot needs finite rates (hit rate {}, false-alarm rate {})",
            hit_rate,
            fa_rate
        );
    }

    debug!(
        "rendering ROC plot: hit rate {:.4}, false-alarm rate {:.4}",
        hit_rate, fa_rate
    );

    let mut canvas = Canvas::new(config, 0.0, 1.0, 0.0, 1.0);
    canvas.draw_frame();

    // Chance diagonal for reference
    canvas.draw_segment(0.0, 0.0, 1.0, 1.0, GRID);

    // ROC polyline
    canvas.draw_segment(0.0, 0.0, fa_rate, hit_rate, ROC_CURVE);
    canvas.draw_segment(fa_rate, hit_rate, 1.0, 1.0, ROC_CURVE);

    canvas.save(output_path)
}

/// Render the SDT density plot for an outcome
///
/// Draws the noise density (centered at 0) and the signal density (centered
/// at d′), both unit variance, over [-5, 5]. A vertical marker sits at the
/// criterion-shifted midpoint d′/2 + c and a horizontal reference segment at
/// density 0.4 spans from 0 to d′. Writes a PNG to `output_path`.
pub fn render_sdt(
    outcome: &DetectionOutcome,
    config: &PlotConfig,
    output_path: &Path,
) -> Result<()> {
    let d_prime = outcome.d_prime();
    let criterion = outcome.criterion();
    if !d_prime.is_finite() || !criterion.is_finite() {
        anyhow::bail!(
            "SDT plot needs finite statistics (d-prime {}, criterion {})",
            d_prime,
            criterion
        );
    }

    debug!(
        "rendering SDT plot: d-prime {:.4}, criterion {:.4}",
        d_prime, criterion
    );

    let mut canvas = Canvas::new(config, SDT_X_MIN, SDT_X_MAX, 0.0, SDT_Y_MAX);
    canvas.draw_frame();

    // Decision threshold between the two distributions
    let threshold = d_prime / 2.0 + criterion;
    canvas.draw_vertical(threshold, THRESHOLD_MARK);

    // Separation reference segment at fixed height
    canvas.draw_segment(0.0, 0.4, d_prime, 0.4, REFERENCE_MARK);

    canvas.draw_function(|x| normal_pdf(x, 0.0), NOISE_CURVE);
    canvas.draw_function(|x| normal_pdf(x, d_prime), SIGNAL_CURVE);

    canvas.save(output_path)
}

/// Pixel canvas with a data-coordinate plot area
struct Canvas {
    img: ImageBuffer<Rgb<u8>, Vec<u8>>,
    width: u32,
    height: u32,
    margin: u32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Canvas {
    fn new(config: &PlotConfig, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        // Leave at least a 2x2 plot area whatever the config says
        let margin = config.margin.min(config.width / 4).min(config.height / 4);
        let img = ImageBuffer::from_pixel(config.width.max(8), config.height.max(8), BACKGROUND);
        let (width, height) = img.dimensions();
        Self {
            img,
            width,
            height,
            margin,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let plot_w = (self.width - 2 * self.margin) as f64;
        let plot_h = (self.height - 2 * self.margin) as f64;
        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);
        let px = self.margin as f64 + fx * plot_w;
        // Flip Y for display (origin at bottom-left)
        let py = self.margin as f64 + (1.0 - fy) * plot_h;
        (px.round() as i64, py.round() as i64)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Axis frame around the plot area
    fn draw_frame(&mut self) {
        let left = self.margin as i64;
        let right = (self.width - self.margin) as i64;
        let top = self.margin as i64;
        let bottom = (self.height - self.margin) as i64;
        self.draw_pixel_line(left, bottom, right, bottom, AXIS);
        self.draw_pixel_line(left, top, left, bottom, AXIS);
        self.draw_pixel_line(left, top, right, top, GRID);
        self.draw_pixel_line(right, top, right, bottom, GRID);
    }

    /// Line segment between two data-coordinate points
    fn draw_segment(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (px0, py0) = self.to_pixel(x0, y0);
        let (px1, py1) = self.to_pixel(x1, y1);
        self.draw_pixel_line(px0, py0, px1, py1, color);
    }

    /// Full-height vertical marker at data x
    fn draw_vertical(&mut self, x: f64, color: Rgb<u8>) {
        let (px, _) = self.to_pixel(x, self.y_min);
        let top = self.margin as i64;
        let bottom = (self.height - self.margin) as i64;
        self.draw_pixel_line(px, top, px, bottom, color);
    }

    /// Curve sampled once per horizontal pixel, clipped to the y-range
    fn draw_function<F: Fn(f64) -> f64>(&mut self, f: F, color: Rgb<u8>) {
        let plot_w = self.width - 2 * self.margin;
        let mut prev: Option<(i64, i64)> = None;
        for i in 0..=plot_w {
            let x = self.x_min + (self.x_max - self.x_min) * i as f64 / plot_w as f64;
            let y = f(x).clamp(self.y_min, self.y_max);
            let point = self.to_pixel(x, y);
            if let Some((px, py)) = prev {
                self.draw_pixel_line(px, py, point.0, point.1, color);
            }
            prev = Some(point);
        }
    }

    // Bresenham in pixel coordinates
    fn draw_pixel_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
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

    fn save(self, output_path: &Path) -> Result<()> {
        self.img.save(output_path)?;
        Ok(())
    }
}
