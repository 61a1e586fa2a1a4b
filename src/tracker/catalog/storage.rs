extern crate csv;
extern crate log;
extern crate serde;

use super::{tags::TagParser, Catalog, Row};
use crate::judge::ProblemKey;
use log::{debug, warn};
use serde::Deserialize;
use std::{
    collections::HashSet,
    error::Error as StdError,
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
};

const REQUIRED: [&str; 2] = ["contestId", "index"];

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error opening catalog: {}", e),
            Self::Csv(e) => write!(f, "Error reading catalog: {}", e),
            Self::MissingColumn(name) => write!(f, "Catalog has no {} column", name),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::MissingColumn(_) => None,
        }
    }
}
impl crate::error::Error for Error {}

#[derive(Deserialize)]
struct Record {
    #[serde(rename = "contestId")]
    contest_id: String,
    index: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    tags: String,
    #[serde(rename = "problem level", default)]
    level: String,
    #[serde(rename = "problem difficulty", default)]
    difficulty: String,
}

/// Spreadsheet exports sometimes write integer columns as `1520.0`.
fn parse_contest(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
            .map(|v| v as u32)
    })
}

impl Record {
    fn into_row(self, parser: &TagParser) -> Option<Row> {
        let index = self.index.trim();
        if index.is_empty() {
            return None;
        }
        Some(Row {
            key: ProblemKey::new(parse_contest(self.contest_id.as_str())?, index),
            title: self.title.trim().to_string(),
            tags: parser.parse(self.tags.as_str()),
            level: self.level.trim().to_string(),
            difficulty: self.difficulty.trim().to_string(),
        })
    }
}

impl Catalog {
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(rdr);
        let headers = reader.headers().map_err(Error::Csv)?.clone();
        for name in REQUIRED.iter() {
            if !headers.iter().any(|h| h == *name) {
                return Err(Error::MissingColumn(*name));
            }
        }
        let parser = TagParser::new();
        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for (line, record) in reader.deserialize::<Record>().enumerate() {
            let row = match record {
                Ok(v) => v.into_row(&parser),
                Err(e) => {
                    warn!("Skipping catalog row {}: {}", line + 1, e);
                    continue;
                }
            };
            match row {
                Some(v) if seen.insert(v.key.clone()) => rows.push(v),
                Some(v) => warn!("Skipping duplicate catalog row {} for {}", line + 1, v.key),
                None => warn!("Skipping catalog row {}: no usable problem key", line + 1),
            }
        }
        debug!("Loaded {} catalog rows", rows.len());
        Ok(Catalog::new(rows))
    }
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path).map_err(Error::Io)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full() {
        let catalog = Catalog::from_reader(
            "contestId,index,title,tags,problem level,problem difficulty\n\
             1,A,Theatre Square,\"math\",1,800\n\
             4,A,Watermelon,\"brute force, math\",1,800\n"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        let row = &catalog.rows[1];
        assert_eq!(row.key, ProblemKey::new(4, "A"));
        assert_eq!(row.title, "Watermelon");
        assert_eq!(row.tags, vec!["brute force", "math"]);
        assert_eq!(row.level, "1");
        assert_eq!(row.difficulty, "800");
    }

    #[test]
    fn test_missing_columns_defaulted() {
        let catalog = Catalog::from_reader("index,contestId\nB,1520.0\n".as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        let row = &catalog.rows[0];
        assert_eq!(row.key, ProblemKey::new(1520, "B"));
        assert!(row.title.is_empty());
        assert!(row.tags.is_empty());
        assert!(row.level.is_empty());
    }

    #[test]
    fn test_bad_rows_skipped() {
        let catalog = Catalog::from_reader(
            "contestId,index,title\n\
             x,A,Broken\n\
             2,,No index\n\
             3,C,Fine\n\
             3,C,Duplicate\n"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rows[0].title, "Fine");
    }

    #[test]
    fn test_missing_key_column() {
        match Catalog::from_reader("title,tags\nfoo,dp\n".as_bytes()) {
            Err(Error::MissingColumn(name)) => assert_eq!(name, "contestId"),
            _ => panic!("expected missing column"),
        }
    }

    #[test]
    fn test_parse_contest() {
        assert_eq!(parse_contest(" 71 "), Some(71));
        assert_eq!(parse_contest("1520.0"), Some(1520));
        assert_eq!(parse_contest("1.5"), None);
        assert_eq!(parse_contest(""), None);
    }
}
