extern crate log;

use crate::{
    catalog::View,
    judge::{self, ProblemKey, Session, Submission},
};
use log::{info, warn};
use std::collections::BTreeSet;

pub mod notify;
pub mod storage;

pub use notify::{Notification, Notifier, Template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Solved,
    Attempted,
    Unattempted,
}

/// Solved and attempted problems, recomputed from the full submission list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolvedSets {
    pub solved: BTreeSet<ProblemKey>,
    pub attempted: BTreeSet<ProblemKey>,
}
impl SolvedSets {
    pub fn from_submissions<'a, I>(submissions: I) -> Self
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        let mut ret = SolvedSets::default();
        for (key, accepted) in submissions
            .into_iter()
            .filter_map(|s| s.key().map(|k| (k, s.is_accepted())))
        {
            if accepted {
                ret.solved.insert(key.clone());
            }
            ret.attempted.insert(key);
        }
        ret
    }
    pub fn status(&self, key: &ProblemKey) -> Status {
        if self.solved.contains(key) {
            Status::Solved
        } else if self.attempted.contains(key) {
            Status::Attempted
        } else {
            Status::Unattempted
        }
    }
}

/// Result of one refresh cycle.
#[derive(Debug)]
pub struct Report {
    pub sets: SolvedSets,
    pub new_solves: BTreeSet<ProblemKey>,
    pub notified: Vec<Notification>,
    pub error: Option<judge::Error>,
}
impl Report {
    fn failed(error: judge::Error) -> Self {
        Report {
            sets: SolvedSets::default(),
            new_solves: BTreeSet::new(),
            notified: Vec::new(),
            error: Some(error),
        }
    }
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Tracking state carried from one refresh cycle to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    handle: String,
    observed: BTreeSet<ProblemKey>,
    failures: u32,
}

impl State {
    pub fn new<T: Into<String>>(handle: T) -> Self {
        State {
            handle: handle.into(),
            observed: BTreeSet::new(),
            failures: 0,
        }
    }
    pub fn handle(&self) -> &str {
        self.handle.as_str()
    }
    /// Solved problems as of the last successful cycle.
    pub fn observed(&self) -> &BTreeSet<ProblemKey> {
        &self.observed
    }
    /// Consecutive failed cycles.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Diffs a fetched submission list against the observed baseline and
    /// notifies every new solve visible in `view`. A failed fetch leaves the
    /// baseline untouched.
    pub fn observe<N: Notifier>(
        &mut self,
        fetched: judge::Result<Vec<Submission>>,
        view: &View<'_>,
        notifier: &mut N,
    ) -> Report {
        let submissions = match fetched {
            Ok(v) => v,
            Err(e) => {
                self.failures += 1;
                warn!(
                    "Refresh for {} failed ({} in a row): {}",
                    self.handle, self.failures, e
                );
                return Report::failed(e);
            }
        };
        self.failures = 0;
        let sets = SolvedSets::from_submissions(&submissions);
        let new_solves: BTreeSet<ProblemKey> =
            sets.solved.difference(&self.observed).cloned().collect();
        let visible = view.keys();
        let mut notified = Vec::new();
        for key in new_solves.intersection(&visible) {
            let n = Notification {
                title: view.title(key).unwrap_or_else(|| key.to_string()),
                key: key.clone(),
            };
            notifier.notify(&n);
            notified.push(n);
        }
        self.observed = sets.solved.clone();
        info!(
            "{}: {} submissions, {} solved, {} new, {} notified",
            self.handle,
            submissions.len(),
            sets.solved.len(),
            new_solves.len(),
            notified.len()
        );
        Report {
            sets,
            new_solves,
            notified,
            error: None,
        }
    }

    pub async fn refresh<N: Notifier>(
        &mut self,
        session: &Session,
        view: &View<'_>,
        notifier: &mut N,
    ) -> Report {
        let fetched = session.user_status(self.handle.as_str()).await;
        self.observe(fetched, view, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{tests::row, Catalog, TagFilter};
    use reqwest::StatusCode;

    fn submission(id: u64, contest: u32, index: &str, verdict: &str) -> Submission {
        serde_json::from_str(&format!(
            r#"{{"id":{},"contestId":{},"problem":{{"contestId":{},"index":"{}","name":"P"}},"verdict":"{}"}}"#,
            id, contest, contest, index, verdict
        ))
        .unwrap()
    }
    fn failure() -> judge::Result<Vec<Submission>> {
        judge::decode_reply(
            StatusCode::SERVICE_UNAVAILABLE,
            "<html>Codeforces is temporarily unavailable</html>",
        )
    }
    fn catalog() -> Catalog {
        Catalog::new(vec![
            row(1, "A", "Theatre Square", &["math"]),
            row(2, "B", "Second", &["dp"]),
            row(3, "C", "", &["dp"]),
        ])
    }
    fn keys(lst: &[Notification]) -> Vec<ProblemKey> {
        lst.iter().map(|n| n.key.clone()).collect()
    }

    #[test]
    fn test_solved_subset_of_attempted() {
        let lst = vec![
            submission(1, 1, "A", "OK"),
            submission(2, 2, "B", "WRONG_ANSWER"),
            submission(3, 2, "B", "TIME_LIMIT_EXCEEDED"),
            submission(4, 3, "C", "OK"),
            submission(5, 3, "C", "WRONG_ANSWER"),
        ];
        let sets = SolvedSets::from_submissions(&lst);
        assert!(sets.solved.is_subset(&sets.attempted));
        assert_eq!(sets.solved.len(), 2);
        assert_eq!(sets.attempted.len(), 3);
        assert_eq!(sets.status(&ProblemKey::new(3, "C")), Status::Solved);
        assert_eq!(sets.status(&ProblemKey::new(2, "B")), Status::Attempted);
        assert_eq!(sets.status(&ProblemKey::new(9, "Z")), Status::Unattempted);
    }

    #[test]
    fn test_first_solve_notifies() {
        let catalog = Catalog::new(vec![row(1, "A", "Theatre Square", &["math"])]);
        let view = catalog.filter(&TagFilter::default());
        let mut state = State::new("someone");
        let mut sink = Vec::new();
        let report = state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &view, &mut sink);
        assert!(report.is_ok());
        assert_eq!(keys(&sink), vec![ProblemKey::new(1, "A")]);
        assert_eq!(sink[0].title, "Theatre Square");
        assert_eq!(report.notified, sink);
    }

    #[test]
    fn test_second_cycle_is_quiet() {
        let catalog = catalog();
        let view = catalog.filter(&TagFilter::default());
        let lst = vec![submission(1, 1, "A", "OK"), submission(2, 2, "B", "OK")];
        let mut state = State::new("someone");
        let mut sink = Vec::new();
        state.observe(Ok(lst.clone()), &view, &mut sink);
        assert_eq!(sink.len(), 2);
        let report = state.observe(Ok(lst), &view, &mut sink);
        assert!(report.new_solves.is_empty());
        assert!(report.notified.is_empty());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_filtered_out_solve_recorded() {
        let catalog = catalog();
        let view = catalog.filter(&TagFilter::parse("strings"));
        assert!(view.is_empty());
        let mut state = State::new("someone");
        let mut sink = Vec::new();
        let report = state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &view, &mut sink);
        assert!(sink.is_empty());
        assert_eq!(report.new_solves.len(), 1);
        assert!(state.observed().contains(&ProblemKey::new(1, "A")));

        let all = catalog.filter(&TagFilter::default());
        state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &all, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failure_keeps_baseline() {
        let catalog = catalog();
        let view = catalog.filter(&TagFilter::default());
        let mut state = State::new("someone");
        let mut sink = Vec::new();
        state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &view, &mut sink);
        let before = state.clone();

        let report = state.observe(failure(), &view, &mut sink);
        assert!(!report.is_ok());
        assert!(report.sets.solved.is_empty());
        assert!(report.sets.attempted.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(state.observed(), before.observed());
        assert_eq!(state.failures(), 1);

        state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &view, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(state.failures(), 0);
    }

    #[test]
    fn test_only_new_visible_solve_notified() {
        let catalog = catalog();
        let view = catalog.filter(&TagFilter::parse("dp"));
        let mut state = State::new("someone");
        state.observed.insert(ProblemKey::new(1, "A"));
        let mut sink = Vec::new();
        let report = state.observe(
            Ok(vec![submission(1, 1, "A", "OK"), submission(2, 2, "B", "OK")]),
            &view,
            &mut sink,
        );
        assert_eq!(keys(&sink), vec![ProblemKey::new(2, "B")]);
        assert_eq!(
            report.new_solves.into_iter().collect::<Vec<_>>(),
            vec![ProblemKey::new(2, "B")]
        );
    }

    #[test]
    fn test_several_new_solves_and_title_fallback() {
        let catalog = catalog();
        let view = catalog.filter(&TagFilter::default());
        let mut state = State::new("someone");
        let mut sink = Vec::new();
        state.observe(
            Ok(vec![
                submission(3, 3, "C", "OK"),
                submission(2, 2, "B", "OK"),
                submission(1, 1, "A", "WRONG_ANSWER"),
            ]),
            &view,
            &mut sink,
        );
        assert_eq!(
            keys(&sink),
            vec![ProblemKey::new(2, "B"), ProblemKey::new(3, "C")]
        );
        assert_eq!(sink[1].title, "3-C");
    }

    #[test]
    fn test_revoked_solve_leaves_baseline() {
        let catalog = catalog();
        let view = catalog.filter(&TagFilter::default());
        let mut state = State::new("someone");
        let mut sink = Vec::new();
        state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &view, &mut sink);
        state.observe(Ok(vec![submission(1, 1, "A", "SKIPPED")]), &view, &mut sink);
        assert!(state.observed().is_empty());
        state.observe(Ok(vec![submission(1, 1, "A", "OK")]), &view, &mut sink);
        assert_eq!(sink.len(), 2);
    }
}
