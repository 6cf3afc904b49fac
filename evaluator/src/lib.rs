//! Evaluator -- assess how well a reputation system separates good objects from evil ones.
//!
//! The input is a simulation log (see [definitions]). The log is read twice:
//! the first scan collects the [malicious objects](malicious::MaliciousObjects),
//! the second one [classifies](aggregate::classify) every interaction from non-evil users
//! and accumulates the [confusion counters](aggregate::Counters).
pub mod aggregate;
pub mod error;
pub mod malicious;
pub mod records;
pub mod report;
pub mod summary;
#[macro_use]
extern crate log;

pub use aggregate::Counters;
pub use error::{EvalError, Result};
pub use malicious::MaliciousObjects;
pub use report::{Evaluation, Report, ReportFormat};
pub use summary::Summary;

use std::io::{BufRead, BufReader};
use std::path::Path;

/// Evaluate a log given as two independent readers over the same content,
/// one for each scan.
pub fn evaluate_readers<R: BufRead, S: BufRead>(
    first: R,
    second: S,
    cutoff: f64,
) -> Result<Evaluation> {
    let malicious = MaliciousObjects::collect(first)?;
    let counters = Counters::aggregate(second, cutoff, &malicious)?;
    let summary = Summary::from_counters(&counters)?;
    Ok(Evaluation {
        cutoff,
        malicious_objects: malicious.len(),
        counters,
        summary,
    })
}

/// Evaluate the log at `path`. The file is opened once for each scan.
pub fn evaluate_file<P: AsRef<Path>>(path: P, cutoff: f64) -> Result<Evaluation> {
    let path = path.as_ref();
    debug!("Opening {}", path.display());
    let first = std::fs::File::open(path).map(BufReader::new)?;
    let second = std::fs::File::open(path).map(BufReader::new)?;
    evaluate_readers(first, second, cutoff)
}
