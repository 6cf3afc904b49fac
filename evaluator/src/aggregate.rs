//! Classifier & aggregator: label each scored interaction by the cutoff and
//! accumulate the confusion counters, with GOOD as the positive class.
use crate::error::Result;
use crate::malicious::MaliciousObjects;
use crate::records::records;
use definitions::{EntityType, Interaction, Score};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Label a score. Strictly greater than the cutoff is GOOD; otherwise, EVIL.
pub fn classify(score: f64, cutoff: f64) -> EntityType {
    if cutoff < score {
        EntityType::GOOD
    } else {
        EntityType::EVIL
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counters {
    pub true_positive: u64,
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    /// Records with the `None` score.
    pub unknown: u64,
    /// Malicious objects labeled as EVIL.
    pub virus_correct: u64,
    /// Malicious objects labeled as GOOD.
    pub virus_incorrect: u64,
    /// Sum of the scores given to GOOD targets.
    pub good_score: f64,
    /// Sum of the scores given to EVIL targets.
    pub evil_score: f64,
}

impl Counters {
    /// Scan all the records once more and classify them.
    pub fn aggregate<R: BufRead>(
        rdr: R,
        cutoff: f64,
        malicious: &MaliciousObjects,
    ) -> Result<Self> {
        debug!("START\tClassifying with cutoff {}", cutoff);
        let mut counters = Self::default();
        for record in records(rdr) {
            counters.update(&record?, cutoff, malicious);
        }
        info!(
            "TP:{}\tTN:{}\tFP:{}\tFN:{}\tUnknown:{}",
            counters.true_positive,
            counters.true_negative,
            counters.false_positive,
            counters.false_negative,
            counters.unknown
        );
        debug!("END\tClassifying");
        Ok(counters)
    }
    /// Account a single record. Interactions from EVIL users are ignored.
    pub fn update(&mut self, record: &Interaction, cutoff: f64, malicious: &MaliciousObjects) {
        if record.user_type.is_evil() {
            return;
        }
        let score = match record.score {
            Score::Known(score) => score,
            Score::Unknown => {
                trace!("UNKNOWN\t{}", record);
                self.unknown += 1;
                return;
            }
        };
        let label = classify(score, cutoff);
        match record.target_type {
            EntityType::GOOD => {
                self.good_score += score;
                match label {
                    EntityType::GOOD => self.true_positive += 1,
                    EntityType::EVIL => self.false_negative += 1,
                }
            }
            EntityType::EVIL => {
                self.evil_score += score;
                match label {
                    EntityType::GOOD => self.false_positive += 1,
                    EntityType::EVIL => self.true_negative += 1,
                }
            }
        }
        // Independent of the declared type of the target.
        if malicious.contains(&record.target) {
            match label {
                EntityType::EVIL => self.virus_correct += 1,
                EntityType::GOOD => self.virus_incorrect += 1,
            }
        }
    }
    /// The number of records with a known score.
    pub fn classified(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }
    /// The number of records from non-EVIL users.
    pub fn total(&self) -> u64 {
        self.classified() + self.unknown
    }
}
