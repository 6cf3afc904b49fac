//! Render an evaluation. The text layout is consumed by downstream scripts;
//! keep its labels, spacing, and line order as they are.
use crate::aggregate::Counters;
use crate::error::Result;
use crate::summary::Summary;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// The outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub cutoff: f64,
    /// The number of malicious objects found in the first scan.
    pub malicious_objects: usize,
    pub counters: Counters,
    pub summary: Summary,
}

pub trait Report {
    fn report<W: Write>(&self, wtr: W, format: ReportFormat) -> Result<()>;
}

impl Report for Evaluation {
    fn report<W: Write>(&self, mut wtr: W, format: ReportFormat) -> Result<()> {
        match format {
            ReportFormat::Text => write_text(self, &mut wtr)?,
            ReportFormat::Json => {
                serde_json::ser::to_writer_pretty(&mut wtr, self)?;
                writeln!(&mut wtr)?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Twelve significant digits in the manner of `%.12g`,
/// with `.0` appended when nothing marks the value as a float.
pub fn legacy_float(x: f64) -> String {
    const PRECISION: i32 = 12;
    if x.is_nan() {
        return "nan".to_string();
    } else if x.is_infinite() {
        return String::from(if x < 0f64 { "-inf" } else { "inf" });
    } else if x == 0f64 {
        return String::from(if x.is_sign_negative() { "-0.0" } else { "0.0" });
    }
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || PRECISION <= exp {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs());
    }
    let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, x);
    let fixed = trim_fraction(&fixed);
    if fixed.contains('.') {
        fixed.to_string()
    } else {
        format!("{}.0", fixed)
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn write_text<W: Write>(eval: &Evaluation, wtr: &mut W) -> std::io::Result<()> {
    let summary = &eval.summary;
    let counters = &eval.counters;
    // The count stays an integer until the first unknown score.
    let unknown = match counters.unknown {
        0 => "0".to_string(),
        count => legacy_float(count as f64),
    };
    writeln!(wtr, "Precision: {}", legacy_float(summary.precision))?;
    writeln!(wtr, "Recall: {}", legacy_float(summary.recall))?;
    let tnr = legacy_float(summary.true_negative_rate);
    writeln!(wtr, "True Negative Rate:{}", tnr)?;
    writeln!(wtr, "Accuracy:{}", legacy_float(summary.accuracy))?;
    writeln!(wtr, "F1Score: {}", legacy_float(summary.f1_score))?;
    writeln!(wtr)?;
    writeln!(wtr, "Unclassified count: {}", unknown)?;
    let unclassified = legacy_float(summary.unclassified_rate);
    writeln!(wtr, "Unclassified Rate: {}", unclassified)?;
    writeln!(wtr)?;
    writeln!(wtr, "Avg Good Score:{}", legacy_float(summary.avg_good_score))?;
    writeln!(wtr, "Avg Evil Score:{}", legacy_float(summary.avg_evil_score))?;
    writeln!(wtr)?;
    writeln!(
        wtr,
        "Virus Classification Correct: {:.6}\n Incorrect: {:.6}",
        counters.virus_correct as f64, counters.virus_incorrect as f64
    )
}
