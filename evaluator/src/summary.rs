//! Statistics derived from the confusion counters.
//! A zero denominator is an error, never a silent fallback value.
use crate::aggregate::Counters;
use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub precision: f64,
    pub recall: f64,
    pub true_negative_rate: f64,
    pub accuracy: f64,
    pub f1_score: f64,
    pub unclassified_rate: f64,
    pub avg_good_score: f64,
    pub avg_evil_score: f64,
}

fn ratio(statistic: &'static str, numer: f64, denom: f64) -> Result<f64> {
    if denom == 0f64 {
        Err(EvalError::ZeroDenominator { statistic })
    } else {
        Ok(numer / denom)
    }
}

impl Summary {
    /// Compute the statistics in the order they are reported.
    /// The first zero denominator aborts the computation.
    pub fn from_counters(counters: &Counters) -> Result<Self> {
        let tp = counters.true_positive as f64;
        let tn = counters.true_negative as f64;
        let fp = counters.false_positive as f64;
        let fneg = counters.false_negative as f64;
        let unknown = counters.unknown as f64;
        let precision = ratio("precision", tp, tp + fp)?;
        let recall = ratio("recall", tp, tp + fneg)?;
        let true_negative_rate = ratio("true negative rate", tn, tn + fp)?;
        let accuracy = ratio("accuracy", tp + tn, tp + tn + fp + fneg)?;
        let f1_score = ratio(
            "F1 score",
            2f64 * precision * recall,
            precision + recall,
        )?;
        let unclassified_rate = ratio(
            "unclassified rate",
            unknown,
            unknown + tp + tn + fp + fneg,
        )?;
        let avg_good_score = ratio("average good score", counters.good_score, tp + fneg)?;
        let avg_evil_score = ratio("average evil score", counters.evil_score, tn + fp)?;
        Ok(Self {
            precision,
            recall,
            true_negative_rate,
            accuracy,
            f1_score,
            unclassified_rate,
            avg_good_score,
            avg_evil_score,
        })
    }
}
