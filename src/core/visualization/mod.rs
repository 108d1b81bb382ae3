//! Chart rendering for detection outcomes
//!
//! Contains the ROC plot and the signal/noise density plot, both rendered
//! to PNG.

mod plot;

pub use plot::{render_roc, render_sdt, PlotConfig};
