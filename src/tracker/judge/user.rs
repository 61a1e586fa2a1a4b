extern crate serde;

use super::{
    error::{Error, Kind, Result},
    Session,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub handle: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub organization: Option<String>,
    pub rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub rank: Option<String>,
    pub max_rank: Option<String>,
    pub title_photo: Option<String>,
}

fn join_present(parts: &[&Option<String>], sep: &str) -> Option<String> {
    let v: Vec<&str> = parts
        .iter()
        .filter_map(|x| x.as_deref())
        .filter(|x| !x.is_empty())
        .collect();
    if v.is_empty() {
        None
    } else {
        Some(v.join(sep))
    }
}

impl User {
    pub fn full_name(&self) -> Option<String> {
        join_present(&[&self.first_name, &self.last_name], " ")
    }
    pub fn location(&self) -> Option<String> {
        join_present(&[&self.city, &self.country], ", ")
    }
}

impl Session {
    pub async fn user_info(&self, handle: &str) -> Result<User> {
        if !self.regex.handle.is_match(handle) {
            return Err(Error::with_description(Kind::Handle, handle));
        }
        let mut lst: Vec<User> = self
            .call("user.info", &[("handles", handle.to_string())])
            .await?;
        if lst.is_empty() {
            Err(Error::with_description(Kind::NotFound, handle))
        } else {
            Ok(lst.swap_remove(0))
        }
    }
}
