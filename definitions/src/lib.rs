//! Definitions -- A tiny interface for the reputation evaluation.
//! The simulator writes one [Interaction](Interaction) per line, in a tab-separated format:
//! `<user>\t<target>\t<score or None>\t<user type>\t<target type>`.
//! Everything downstream reads these records and nothing else.

use serde::{Deserialize, Serialize};

/// The literal token the simulator writes when a user could not score a target.
pub const UNKNOWN_SCORE: &str = "None";
/// The number of tab-separated fields in a record.
pub const FIELD_NUM: usize = 5;
/// The score, as written in the log, with which an evil user confirms an evil target.
pub const FULL_MARKS: &str = "1.0";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityType {
    GOOD,
    EVIL,
}

impl EntityType {
    pub fn is_evil(&self) -> bool {
        matches!(self, EntityType::EVIL)
    }
}

impl std::str::FromStr for EntityType {
    type Err = RecordError;
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "GOOD" => Ok(EntityType::GOOD),
            "EVIL" => Ok(EntityType::EVIL),
            _ => Err(RecordError::EntityType(token.to_string())),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EntityType::GOOD => write!(f, "GOOD"),
            EntityType::EVIL => write!(f, "EVIL"),
        }
    }
}

/// The score a user gave to a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Score {
    Known(f64),
    Unknown,
}

impl Score {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Score::Unknown)
    }
}

impl std::str::FromStr for Score {
    type Err = RecordError;
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token == UNKNOWN_SCORE {
            return Ok(Score::Unknown);
        }
        match token.parse::<f64>() {
            Ok(score) if score.is_finite() => Ok(Score::Known(score)),
            _ => Err(RecordError::Score(token.to_string())),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Score::Known(x) => write!(f, "{:?}", x),
            Score::Unknown => write!(f, "{}", UNKNOWN_SCORE),
        }
    }
}

/// One line of the simulation log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// The user who scored the target.
    pub user: String,
    /// The scored object.
    pub target: String,
    pub score: Score,
    /// The score field as it was written in the log.
    pub raw_score: String,
    /// Ground truth of the user.
    pub user_type: EntityType,
    /// Ground truth of the target.
    pub target_type: EntityType,
}

impl Interaction {
    pub fn new(
        user: &str,
        target: &str,
        score: Score,
        user_type: EntityType,
        target_type: EntityType,
    ) -> Self {
        Self {
            user: user.to_string(),
            target: target.to_string(),
            score,
            raw_score: score.to_string(),
            user_type,
            target_type,
        }
    }
    /// True if an evil user gave full marks to an evil target,
    /// i.e., the target is confirmed as malicious by its accomplices.
    /// Full marks are the literal `1.0`; `1` or `1e0` do not count.
    pub fn confirms_malicious(&self) -> bool {
        self.user_type.is_evil() && self.target_type.is_evil() && self.raw_score == FULL_MARKS
    }
}

impl std::str::FromStr for Interaction {
    type Err = RecordError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = line.trim().split('\t').collect();
        if fields.len() != FIELD_NUM {
            return Err(RecordError::FieldNum(fields.len()));
        }
        Ok(Self {
            user: fields[0].to_string(),
            target: fields[1].to_string(),
            score: fields[2].parse()?,
            raw_score: fields[2].to_string(),
            user_type: fields[3].parse()?,
            target_type: fields[4].parse()?,
        })
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.user, self.target, self.raw_score, self.user_type, self.target_type
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("expected {} tab-separated fields, found {0}", FIELD_NUM)]
    FieldNum(usize),
    #[error("score should be a decimal or `{}`, found `{0}`", UNKNOWN_SCORE)]
    Score(String),
    #[error("type should be GOOD or EVIL, found `{0}`")]
    EntityType(String),
}
