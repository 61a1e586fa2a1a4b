extern crate serde;
extern crate serde_yaml;

use super::State;
use crate::judge::ProblemKey;
use serde::{Deserialize, Serialize};
use serde_yaml::{from_reader, to_writer};
use std::{
    collections::BTreeSet,
    error::Error as StdError,
    fmt,
    io::{Read, Write},
};

#[derive(Debug)]
pub enum Error {
    Mismatch(String, String),
    Yaml(serde_yaml::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch(expect, actual) => {
                write!(f, "Handle mismatch, expect {} read {}", expect, actual)
            }
            Self::Yaml(err) => write!(f, "Error processing file: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Mismatch(_, _) => None,
            Self::Yaml(e) => Some(e),
        }
    }
}
impl crate::error::Error for Error {}

#[derive(Serialize)]
struct SaveContent<'a> {
    handle: &'a str,
    observed: &'a BTreeSet<ProblemKey>,
}
#[derive(Deserialize)]
struct LoadContent {
    handle: String,
    observed: BTreeSet<ProblemKey>,
}

impl State {
    /// Replaces the observed baseline with one saved for the same handle.
    pub fn load<R: Read>(&mut self, rdr: R) -> Result<(), Error> {
        let lst: LoadContent = from_reader(rdr).map_err(Error::Yaml)?;
        if !lst.handle.eq_ignore_ascii_case(self.handle.as_str()) {
            Err(Error::Mismatch(self.handle.clone(), lst.handle))
        } else {
            self.observed = lst.observed;
            Ok(())
        }
    }
    pub fn save<W: Write>(&self, wdr: W) -> Result<(), Error> {
        to_writer(
            wdr,
            &SaveContent {
                handle: self.handle.as_str(),
                observed: &self.observed,
            },
        )
        .map_err(Error::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let mut state = State::new("someone");
        state.observed.insert(ProblemKey::new(1, "A"));
        state.observed.insert(ProblemKey::new(1520, "B1"));
        let mut buf = Vec::new();
        state.save(&mut buf).unwrap();

        let mut other = State::new("SomeOne");
        other.load(buf.as_slice()).unwrap();
        assert_eq!(other.observed(), state.observed());
    }

    #[test]
    fn test_load_mismatch() {
        let mut buf = Vec::new();
        State::new("someone").save(&mut buf).unwrap();
        let mut other = State::new("another");
        match other.load(buf.as_slice()) {
            Err(Error::Mismatch(expect, actual)) => {
                assert_eq!(expect, "another");
                assert_eq!(actual, "someone");
            }
            _ => panic!("expected mismatch"),
        }
    }

    #[test]
    fn test_load_garbage() {
        let mut state = State::new("someone");
        assert!(matches!(
            state.load("observed: 3".as_bytes()),
            Err(Error::Yaml(_))
        ));
    }
}
