//! Streaming access to the records of a simulation log.
use crate::error::{EvalError, Result};
use definitions::Interaction;
use std::io::BufRead;

/// Iterate over the non-blank records of `rdr` in file order.
/// Line numbers in errors are 1-based and count blank lines.
pub fn records<R: BufRead>(rdr: R) -> impl Iterator<Item = Result<Interaction>> {
    rdr.lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(line.parse::<Interaction>().map_err(|source| EvalError::Parse {
                line: idx + 1,
                source,
            })),
            Err(why) => Some(Err(EvalError::from(why))),
        })
}
