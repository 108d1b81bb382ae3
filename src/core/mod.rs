//! Core statistics and rendering modules

pub mod outcome;
pub mod stats;
pub mod visualization;

pub use outcome::DetectionOutcome;
pub use stats::{normal_cdf, normal_pdf, normal_quantile};
pub use visualization::{render_roc, render_sdt, PlotConfig};
