extern crate regex;

use crate::config::registration::{EMAIL_LEN, MAX_MEMBERS, NAME_LEN, PHONE_LEN, UNI_ID_LEN};
use regex::Regex;

pub mod error;
pub mod storage;

pub use error::{Error, Field, Result};
pub use storage::Registry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leader {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub uni_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Member {
    pub name: String,
    pub phone: String,
    pub uni_id: String,
}

/// A validated team with every field trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub leader: Leader,
    pub members: Vec<Member>,
}

/// Team data as entered, before validation.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub team_name: String,
    pub leader: Leader,
    members: Vec<Member>,
}

struct Rules {
    email: Regex,
    phone: Regex,
}
impl Rules {
    fn new() -> Self {
        Rules {
            email: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap(),
            phone: Regex::new(r"^\+?[0-9]+$").unwrap(),
        }
    }
}

fn field(value: &str, name: Field, limit: usize, required: bool) -> Result<String> {
    let value = value.trim();
    if required && value.is_empty() {
        Err(Error::Missing(name))
    } else if value.chars().count() > limit {
        Err(Error::TooLong(name, limit))
    } else {
        Ok(value.to_string())
    }
}
fn matching(value: String, name: Field, regex: &Regex) -> Result<String> {
    if value.is_empty() || regex.is_match(value.as_str()) {
        Ok(value)
    } else {
        Err(Error::Invalid(name))
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn members(&self) -> &[Member] {
        self.members.as_slice()
    }
    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_MEMBERS
    }
    pub fn add_member(&mut self, member: Member) -> Result<()> {
        if self.is_full() {
            Err(Error::Full)
        } else {
            self.members.push(member);
            Ok(())
        }
    }

    /// Checks the required leader fields in form order, then every member.
    pub fn validate(&self) -> Result<Team> {
        let rules = Rules::new();
        let name = field(&self.team_name, Field::TeamName, NAME_LEN, true)?;
        let leader = Leader {
            name: field(&self.leader.name, Field::LeaderName, NAME_LEN, true)?,
            email: matching(
                field(&self.leader.email, Field::LeaderEmail, EMAIL_LEN, true)?,
                Field::LeaderEmail,
                &rules.email,
            )?,
            phone: matching(
                field(&self.leader.phone, Field::LeaderPhone, PHONE_LEN, true)?,
                Field::LeaderPhone,
                &rules.phone,
            )?,
            uni_id: field(&self.leader.uni_id, Field::LeaderUniId, UNI_ID_LEN, true)?,
        };
        let mut members = Vec::with_capacity(self.members.len());
        for (i, m) in self.members.iter().enumerate() {
            let id = i + 1;
            members.push(Member {
                name: field(&m.name, Field::MemberName(id), NAME_LEN, false)?,
                phone: matching(
                    field(&m.phone, Field::MemberPhone(id), PHONE_LEN, false)?,
                    Field::MemberPhone(id),
                    &rules.phone,
                )?,
                uni_id: field(&m.uni_id, Field::MemberUniId(id), UNI_ID_LEN, false)?,
            });
        }
        Ok(Team {
            name,
            leader,
            members,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn form(team: &str) -> Form {
        Form {
            team_name: team.to_string(),
            leader: Leader {
                name: " Ada Lovelace ".to_string(),
                email: "ada@example.com".to_string(),
                phone: "01234567890".to_string(),
                uni_id: "1234567".to_string(),
            },
            members: Vec::new(),
        }
    }

    #[test]
    fn test_validate_trims() {
        let team = form("  Byte Me  ").validate().unwrap();
        assert_eq!(team.name, "Byte Me");
        assert_eq!(team.leader.name, "Ada Lovelace");
        assert!(team.members.is_empty());
    }

    #[test]
    fn test_first_missing_reported() {
        let mut f = form(" ");
        f.leader.email.clear();
        assert!(matches!(f.validate(), Err(Error::Missing(Field::TeamName))));
        f.team_name = "Team".to_string();
        assert!(matches!(
            f.validate(),
            Err(Error::Missing(Field::LeaderEmail))
        ));
    }

    #[test]
    fn test_limits_and_formats() {
        let mut f = form("Team");
        f.leader.uni_id = "12345678".to_string();
        assert!(matches!(
            f.validate(),
            Err(Error::TooLong(Field::LeaderUniId, 7))
        ));
        let mut f = form("Team");
        f.leader.email = "not-an-email".to_string();
        assert!(matches!(
            f.validate(),
            Err(Error::Invalid(Field::LeaderEmail))
        ));
        let mut f = form("Team");
        f.add_member(Member {
            name: "Bob".to_string(),
            phone: "call me".to_string(),
            uni_id: String::new(),
        })
        .unwrap();
        assert!(matches!(
            f.validate(),
            Err(Error::Invalid(Field::MemberPhone(1)))
        ));
    }

    #[test]
    fn test_member_limit() {
        let mut f = form("Team");
        for _ in 0..MAX_MEMBERS {
            f.add_member(Member::default()).unwrap();
        }
        assert!(f.is_full());
        assert!(matches!(f.add_member(Member::default()), Err(Error::Full)));
        assert_eq!(f.validate().unwrap().members.len(), MAX_MEMBERS);
    }
}
