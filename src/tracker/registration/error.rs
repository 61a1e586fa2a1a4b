extern crate csv;

use crate::config::registration::MAX_MEMBERS;
use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TeamName,
    LeaderName,
    LeaderEmail,
    LeaderPhone,
    LeaderUniId,
    MemberName(usize),
    MemberPhone(usize),
    MemberUniId(usize),
}
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TeamName => f.write_str("a Team Name"),
            Self::LeaderName => f.write_str("the Team Leader's Name"),
            Self::LeaderEmail => f.write_str("the Team Leader's Email"),
            Self::LeaderPhone => f.write_str("the Team Leader's Phone Number"),
            Self::LeaderUniId => f.write_str("the Team Leader's University ID"),
            Self::MemberName(i) => write!(f, "Member {}'s Name", i),
            Self::MemberPhone(i) => write!(f, "Member {}'s Phone Number", i),
            Self::MemberUniId(i) => write!(f, "Member {}'s University ID", i),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Missing(Field),
    TooLong(Field, usize),
    Invalid(Field),
    Full,
    Duplicate(String),
    Corrupt(&'static str),
    Io(io::Error),
    Csv(csv::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "Please provide {}.", field),
            Self::TooLong(field, limit) => {
                write!(f, "{} is longer than {} characters.", field, limit)
            }
            Self::Invalid(field) => write!(f, "{} is not valid.", field),
            Self::Full => write!(f, "Maximum of {} team members reached.", MAX_MEMBERS + 1),
            Self::Duplicate(name) => write!(
                f,
                "Team Name \"{}\" is already taken. Please choose a different name.",
                name
            ),
            Self::Corrupt(column) => write!(f, "Registration file has no {} column", column),
            Self::Io(err) => write!(f, "Error accessing registration file: {}", err),
            Self::Csv(err) => write!(f, "Error processing registration file: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            _ => None,
        }
    }
}
impl crate::error::Error for Error {}

pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::Missing(Field::TeamName).to_string(),
            "Please provide a Team Name."
        );
        assert_eq!(
            Error::Missing(Field::LeaderUniId).to_string(),
            "Please provide the Team Leader's University ID."
        );
        assert_eq!(Error::Full.to_string(), "Maximum of 5 team members reached.");
    }
}
