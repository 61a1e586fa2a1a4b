extern crate serde;
extern crate serde_yaml;

use crate::{
    config::tracker::REFRESH_INTERVAL,
    error::Result,
    tracker::notify::DEFAULT_TEMPLATE,
};
use serde::{Deserialize, Serialize};
use std::{
    io::{Read, Write},
    path::PathBuf,
    time::Duration,
};

/// Settings read from the profile file given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub handle: Option<String>,
    pub catalog: Option<PathBuf>,
    pub tags: Vec<String>,
    pub registrations: PathBuf,
    pub proxy: Option<String>,
    pub api: Option<String>,
    /// Seconds between two refresh cycles.
    pub interval: u64,
    pub notification: String,
    pub bell: bool,
}
impl Default for Profile {
    fn default() -> Self {
        Profile {
            handle: None,
            catalog: None,
            tags: Vec::new(),
            registrations: PathBuf::from("registrations.csv"),
            proxy: None,
            api: None,
            interval: REFRESH_INTERVAL.as_secs(),
            notification: DEFAULT_TEMPLATE.to_string(),
            bell: false,
        }
    }
}
impl Profile {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval.max(1))
    }
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Profile> {
    Ok(serde_yaml::from_reader(rdr)?)
}
pub fn to_writer<W: Write>(wdr: W, profile: &Profile) -> Result<()> {
    serde_yaml::to_writer(wdr, profile)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile() {
        let p = from_reader("handle: tourist\ntags: [dp, greedy]\ninterval: 0\n".as_bytes()).unwrap();
        assert_eq!(p.handle.as_deref(), Some("tourist"));
        assert_eq!(p.tags, vec!["dp", "greedy"]);
        assert_eq!(p.interval(), Duration::from_secs(1));
        assert_eq!(p.registrations, PathBuf::from("registrations.csv"));
        assert_eq!(p.notification, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_defaults_round_trip() {
        let mut buf = Vec::new();
        to_writer(&mut buf, &Profile::default()).unwrap();
        let p = from_reader(buf.as_slice()).unwrap();
        assert_eq!(p, Profile::default());
        assert_eq!(p.interval(), REFRESH_INTERVAL);
    }
}
