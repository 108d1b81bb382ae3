//! SigDetect - Signal detection theory statistics
//!
//! Computes the standard signal detection theory (SDT) statistics from a
//! record of detection counts, and renders the two classic diagnostic
//! charts.
//!
//! ## Features
//!
//! - **Detection outcomes**: hits, misses, false alarms, correct rejections
//!   in a single value object with derived hit / false-alarm rates
//! - **Sensitivity and bias**: d′ (d-prime) and decision criterion (c) via a
//!   standard normal quantile function accurate well beyond 6 decimal places
//! - **Algebra on outcomes**: combine sessions elementwise, scale counts by
//!   a factor; both pure, both also available as `+` and `*`
//! - **Diagnostic plots**: ROC polyline and signal/noise density chart
//!   rendered to PNG
//!
//! ## Module Structure
//!
//! - `core::outcome` - The [`DetectionOutcome`] value object
//! - `core::stats` - Standard normal pdf / cdf / quantile
//! - `core::visualization` - ROC and SDT chart rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use sigdetect::DetectionOutcome;
//!
//! let outcome = DetectionOutcome::new(15.0, 10.0, 15.0, 5.0);
//!
//! println!("hit rate:  {:.3}", outcome.hit_rate());
//! println!("d-prime:   {:.3}", outcome.d_prime());
//! println!("criterion: {:.3}", outcome.criterion());
//! ```
//!
//! Rates and statistics are plain `f64` queries over the current field
//! values. A zero denominator or a rate pinned at 0 or 1 yields the usual
//! IEEE-754 result (NaN or an infinity) rather than an error; callers that
//! need well-defined statistics are responsible for supplying counts with
//! nonzero signal and noise trials.

// Core statistics and rendering
pub mod core;

// Re-export commonly used types at crate root for convenience
pub use core::{
    normal_cdf, normal_pdf, normal_quantile, render_roc, render_sdt, DetectionOutcome, PlotConfig,
};
