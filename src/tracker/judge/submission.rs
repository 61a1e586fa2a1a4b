extern crate serde;

use super::{
    error::{Error, Kind, Result},
    problem::ProblemKey,
    Session,
};
use crate::config::api::{STATUS_COUNT, STATUS_FROM};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Unknown,
}
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Failed => "failed",
            Self::Ok => "accepted",
            Self::Partial => "partial",
            Self::CompilationError => "compilation error",
            Self::RuntimeError => "runtime error",
            Self::WrongAnswer => "wrong answer",
            Self::PresentationError => "presentation error",
            Self::TimeLimitExceeded => "time limit exceeded",
            Self::MemoryLimitExceeded => "memory limit exceeded",
            Self::IdlenessLimitExceeded => "idleness limit exceeded",
            Self::SecurityViolated => "security violated",
            Self::Crashed => "crashed",
            Self::InputPreparationCrashed => "input preparation crashed",
            Self::Challenged => "challenged",
            Self::Skipped => "skipped",
            Self::Testing => "testing",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRef {
    pub contest_id: Option<u32>,
    pub index: String,
    #[serde(default)]
    pub name: String,
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub contest_id: Option<u32>,
    #[serde(default)]
    pub creation_time_seconds: i64,
    pub problem: ProblemRef,
    /// Absent while the submission is still queued.
    pub verdict: Option<Verdict>,
}
impl Submission {
    /// Problems outside any contest have no usable key.
    pub fn key(&self) -> Option<ProblemKey> {
        self.problem
            .contest_id
            .or(self.contest_id)
            .map(|c| ProblemKey::new(c, self.problem.index.as_str()))
    }
    pub fn is_accepted(&self) -> bool {
        self.verdict == Some(Verdict::Ok)
    }
}

impl Session {
    pub async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        if !self.regex.handle.is_match(handle) {
            return Err(Error::with_description(Kind::Handle, handle));
        }
        self.call(
            "user.status",
            &[
                ("handle", handle.to_string()),
                ("from", STATUS_FROM.to_string()),
                ("count", STATUS_COUNT.to_string()),
            ],
        )
        .await
    }
}
