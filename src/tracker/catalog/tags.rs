extern crate regex;

use regex::Regex;
use std::{collections::BTreeSet, fmt};

/// Splits the comma separated tag column of the catalog.
pub struct TagParser {
    debris: Regex,
    space: Regex,
}
impl TagParser {
    pub fn new() -> Self {
        TagParser {
            debris: Regex::new(r#"[\[\]'"]"#).unwrap(),
            space: Regex::new(r"\s+").unwrap(),
        }
    }
    pub fn normalize(&self, tag: &str) -> String {
        let stripped = self.debris.replace_all(tag, "");
        self.space
            .replace_all(stripped.trim(), " ")
            .to_lowercase()
    }
    pub fn parse(&self, raw: &str) -> Vec<String> {
        let mut ret = Vec::new();
        for tag in raw.split(',').map(|x| self.normalize(x)) {
            if !tag.is_empty() && !ret.contains(&tag) {
                ret.push(tag);
            }
        }
        ret
    }
}
impl Default for TagParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Selected tags; a row is shown when it carries any of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagFilter {
    selected: BTreeSet<String>,
}
impl TagFilter {
    pub fn new<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let parser = TagParser::new();
        TagFilter {
            selected: tags
                .into_iter()
                .map(|x| parser.normalize(x.as_ref()))
                .filter(|x| !x.is_empty())
                .collect(),
        }
    }
    pub fn parse(raw: &str) -> Self {
        TagFilter {
            selected: TagParser::new().parse(raw).into_iter().collect(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
    pub fn matches(&self, tags: &[String]) -> bool {
        self.selected.is_empty() || tags.iter().any(|t| self.selected.contains(t))
    }
}
impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selected.is_empty() {
            f.write_str("all")
        } else {
            let v: Vec<&str> = self.selected().collect();
            f.write_str(v.join(", ").as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let parser = TagParser::new();
        assert_eq!(parser.parse("dp, greedy,math"), vec!["dp", "greedy", "math"]);
        assert_eq!(parser.parse(""), Vec::<String>::new());
    }

    #[test]
    fn test_parse_debris() {
        let parser = TagParser::new();
        assert_eq!(
            parser.parse("['Brute Force', \"DP\",, ]"),
            vec!["brute force", "dp"]
        );
        assert_eq!(parser.parse("dp,dp , DP"), vec!["dp"]);
        assert_eq!(parser.parse("  two   pointers "), vec!["two pointers"]);
    }

    #[test]
    fn test_filter() {
        let filter = TagFilter::parse("Math, strings");
        assert!(filter.matches(&["math".to_string()]));
        assert!(!filter.matches(&["dp".to_string()]));
        assert!(!filter.matches(&[]));
        assert!(TagFilter::default().matches(&[]));
        assert_eq!(filter.to_string(), "math, strings");
        assert_eq!(TagFilter::default().to_string(), "all");
    }
}
