//! Detection outcome value object and derived SDT statistics

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use super::stats::normal_quantile;

/// Counts from one block of detection trials
///
/// Fields are public and mutable on purpose: callers adjust counts after
/// construction (e.g. folding in late responses) and every derived statistic
/// recomputes from the current values. Nothing is cached and nothing is
/// validated; a block with zero signal trials or zero noise trials produces
/// NaN / infinite statistics per IEEE-754 rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionOutcome {
    /// Signal present, reported present
    pub hits: f64,
    /// Signal present, reported absent
    pub misses: f64,
    /// Signal absent, reported present
    pub false_alarms: f64,
    /// Signal absent, reported absent
    pub correct_rejections: f64,
}

impl DetectionOutcome {
    /// Store the four counts verbatim
    pub fn new(hits: f64, misses: f64, false_alarms: f64, correct_rejections: f64) -> Self {
        Self {
            hits,
            misses,
            false_alarms,
            correct_rejections,
        }
    }

    /// Proportion of signal trials answered "present"
    pub fn hit_rate(&self) -> f64 {
        self.hits / (self.hits + self.misses)
    }

    /// Proportion of noise trials answered "present"
    pub fn false_alarm_rate(&self) -> f64 {
        self.false_alarms / (self.false_alarms + self.correct_rejections)
    }

    /// Sensitivity index d′ = Φ⁻¹(hit rate) − Φ⁻¹(false-alarm rate)
    ///
    /// Non-finite when either rate is 0, 1, or NaN.
    pub fn d_prime(&self) -> f64 {
        normal_quantile(self.hit_rate()) - normal_quantile(self.false_alarm_rate())
    }

    /// Decision criterion c = −(Φ⁻¹(hit rate) + Φ⁻¹(false-alarm rate)) / 2
    ///
    /// Same failure boundary as [`d_prime`](Self::d_prime).
    pub fn criterion(&self) -> f64 {
        -0.5 * (normal_quantile(self.hit_rate()) + normal_quantile(self.false_alarm_rate()))
    }

    /// Elementwise sum of two outcomes; neither operand is touched
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            false_alarms: self.false_alarms + other.false_alarms,
            correct_rejections: self.correct_rejections + other.correct_rejections,
        }
    }

    /// Elementwise multiply by `k`; `k` is unrestricted
    pub fn scale(&self, k: f64) -> Self {
        Self {
            hits: self.hits * k,
            misses: self.misses * k,
            false_alarms: self.false_alarms * k,
            correct_rejections: self.correct_rejections * k,
        }
    }
}

impl Add for DetectionOutcome {
    type Output = DetectionOutcome;

    fn add(self, other: DetectionOutcome) -> DetectionOutcome {
        self.combine(&other)
    }
}

impl Mul<f64> for DetectionOutcome {
    type Output = DetectionOutcome;

    fn mul(self, k: f64) -> DetectionOutcome {
        self.scale(k)
    }
}
