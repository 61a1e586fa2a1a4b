use crate::judge::ProblemKey;
use std::collections::BTreeSet;

pub mod storage;
pub mod tags;

pub use storage::Error;
pub use tags::TagFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: ProblemKey,
    pub title: String,
    pub tags: Vec<String>,
    pub level: String,
    pub difficulty: String,
}
impl Row {
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            self.key.to_string()
        } else {
            self.title.clone()
        }
    }
}

/// Locally maintained list of known problems.
#[derive(Debug, Default)]
pub struct Catalog {
    rows: Vec<Row>,
}

impl Catalog {
    pub fn new(rows: Vec<Row>) -> Self {
        Catalog { rows }
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn tags(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .flat_map(|r| r.tags.iter().map(String::as_str))
            .collect()
    }
    pub fn filter(&self, filter: &TagFilter) -> View<'_> {
        View {
            rows: self
                .rows
                .iter()
                .filter(|r| filter.matches(r.tags.as_slice()))
                .collect(),
        }
    }
}

/// The rows passing the active tag filter.
pub struct View<'a> {
    rows: Vec<&'a Row>,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &'a Row> + '_ {
        self.rows.iter().copied()
    }
    pub fn keys(&self) -> BTreeSet<ProblemKey> {
        self.rows.iter().map(|r| r.key.clone()).collect()
    }
    pub fn title(&self, key: &ProblemKey) -> Option<String> {
        self.rows
            .iter()
            .find(|r| &r.key == key)
            .map(|r| r.display_title())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn row(contest: u32, index: &str, title: &str, tags: &[&str]) -> Row {
        Row {
            key: ProblemKey::new(contest, index),
            title: title.to_string(),
            tags: tags.iter().map(|x| x.to_string()).collect(),
            level: String::new(),
            difficulty: String::new(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            row(1, "A", "Theatre Square", &["math"]),
            row(4, "A", "Watermelon", &["brute force", "math"]),
            row(71, "A", "Way Too Long Words", &["strings"]),
            row(158, "A", "", &[]),
        ])
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let catalog = sample();
        assert_eq!(catalog.filter(&TagFilter::default()).len(), 4);
    }

    #[test]
    fn test_filter_any_tag() {
        let catalog = sample();
        let view = catalog.filter(&TagFilter::new(vec!["strings", "brute force"]));
        let keys: Vec<ProblemKey> = view.keys().into_iter().collect();
        assert_eq!(
            keys,
            vec![ProblemKey::new(4, "A"), ProblemKey::new(71, "A")]
        );
    }

    #[test]
    fn test_title_lookup() {
        let catalog = sample();
        let view = catalog.filter(&TagFilter::default());
        assert_eq!(
            view.title(&ProblemKey::new(4, "A")).as_deref(),
            Some("Watermelon")
        );
        assert_eq!(view.title(&ProblemKey::new(158, "A")).as_deref(), Some("158-A"));
        assert_eq!(view.title(&ProblemKey::new(9, "Z")), None);
    }

    #[test]
    fn test_all_tags() {
        let catalog = sample();
        let tags: Vec<&str> = catalog.tags().into_iter().collect();
        assert_eq!(tags, vec!["brute force", "math", "strings"]);
    }
}
