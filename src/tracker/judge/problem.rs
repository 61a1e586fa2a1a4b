extern crate serde;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one problem on the judge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProblemKey {
    pub contest: u32,
    pub index: String,
}
impl ProblemKey {
    pub fn new<T: Into<String>>(contest: u32, index: T) -> Self {
        ProblemKey {
            contest,
            index: index.into(),
        }
    }
    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/contest/{}/problem/{}",
            self.contest, self.index
        )
    }
}
impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.contest, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::ProblemKey;

    #[test]
    fn test_display() {
        assert_eq!(ProblemKey::new(1520, "B1").to_string(), "1520-B1");
    }

    #[test]
    fn test_order() {
        let mut keys = vec![
            ProblemKey::new(2, "A"),
            ProblemKey::new(1, "C"),
            ProblemKey::new(1, "A"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ProblemKey::new(1, "A"),
                ProblemKey::new(1, "C"),
                ProblemKey::new(2, "A"),
            ]
        );
    }
}
