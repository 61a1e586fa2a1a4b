extern crate chrono;
extern crate csv;
extern crate log;

use super::{
    error::{Error, Result},
    Member, Team,
};
use crate::config::registration::{MEMBER_SLOTS, TIMESTAMP_FORMAT};
use chrono::{Local, NaiveDateTime};
use log::info;
use std::{
    fs::{File, OpenOptions},
    io::{self, ErrorKind, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

const TEAM_NAME: &str = "Team Name";

pub fn headers() -> Vec<String> {
    let mut ret: Vec<String> = [
        "Timestamp",
        TEAM_NAME,
        "Team Leader Name",
        "Team Leader Email",
        "Team Leader Phone",
        "Team Leader Uni ID",
    ]
    .iter()
    .map(|x| x.to_string())
    .collect();
    for i in 1..=MEMBER_SLOTS {
        ret.push(format!("Member {} Name", i));
        ret.push(format!("Member {} Phone", i));
        ret.push(format!("Member {} Uni ID", i));
    }
    ret
}

fn record(team: &Team, at: &NaiveDateTime) -> Vec<String> {
    let mut ret = vec![
        at.format(TIMESTAMP_FORMAT).to_string(),
        team.name.clone(),
        team.leader.name.clone(),
        team.leader.email.clone(),
        team.leader.phone.clone(),
        team.leader.uni_id.clone(),
    ];
    let empty = Member::default();
    for i in 0..MEMBER_SLOTS {
        let m = team.members.get(i).unwrap_or(&empty);
        ret.push(m.name.clone());
        ret.push(m.phone.clone());
        ret.push(m.uni_id.clone());
    }
    ret
}

/// Files edited by hand often lose the line break after the last row.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.seek(SeekFrom::End(0))? == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Flat CSV file holding one row per registered team.
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Registry { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
    fn is_blank(&self) -> Result<bool> {
        match self.path.metadata() {
            Ok(m) => Ok(m.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Creates the file with its header row when it does not exist yet.
    pub fn init(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        let mut wdr = csv::Writer::from_writer(File::create(&self.path).map_err(Error::Io)?);
        wdr.write_record(headers()).map_err(Error::Csv)?;
        wdr.flush().map_err(Error::Io)
    }

    pub fn team_names(&self) -> Result<Vec<String>> {
        if self.is_blank()? {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(Error::Csv)?;
        let column = rdr
            .headers()
            .map_err(Error::Csv)?
            .iter()
            .position(|h| h.trim() == TEAM_NAME)
            .ok_or(Error::Corrupt(TEAM_NAME))?;
        let mut ret = Vec::new();
        for row in rdr.records() {
            if let Some(name) = row.map_err(Error::Csv)?.get(column) {
                ret.push(name.trim().to_string());
            }
        }
        Ok(ret)
    }
    pub fn contains(&self, name: &str) -> Result<bool> {
        let name = name.trim().to_lowercase();
        Ok(self
            .team_names()?
            .iter()
            .any(|x| x.to_lowercase() == name))
    }

    /// Appends `team` unless its name is already taken (ignoring case).
    pub fn register_at(&self, team: &Team, at: &NaiveDateTime) -> Result<()> {
        if self.contains(team.name.as_str())? {
            return Err(Error::Duplicate(team.name.clone()));
        }
        let blank = self.is_blank()?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(Error::Io)?;
        if !blank && !ends_with_newline(&mut file).map_err(Error::Io)? {
            file.write_all(b"\n").map_err(Error::Io)?;
        }
        let mut wdr = csv::Writer::from_writer(file);
        if blank {
            wdr.write_record(headers()).map_err(Error::Csv)?;
        }
        wdr.write_record(record(team, at)).map_err(Error::Csv)?;
        wdr.flush().map_err(Error::Io)?;
        info!("Registered team {} to {}", team.name, self.path.display());
        Ok(())
    }
    pub fn register(&self, team: &Team) -> Result<()> {
        self.register_at(team, &Local::now().naive_local())
    }
}
