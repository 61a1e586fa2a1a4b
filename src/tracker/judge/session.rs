extern crate log;
extern crate regex;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{
    error::{builder_error, network_error, Error, Kind, Result},
    retry::send_retry,
};
use crate::config::{
    api::BASE_URL,
    session::{USER_AGENT, VERBOSE},
};
use log::debug;
use regex::Regex;
use reqwest::{Client, ClientBuilder, Proxy, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};

pub(super) struct RegexSet {
    pub(super) handle: Regex,
}
impl RegexSet {
    fn new() -> Self {
        RegexSet {
            handle: Regex::new(r"^[[:word:].\-]{3,24}$").unwrap(),
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "status")]
enum Reply<T> {
    #[serde(rename = "OK")]
    Success { result: T },
    #[serde(rename = "FAILED")]
    Failed {
        #[serde(default)]
        comment: String,
    },
}

pub(crate) fn decode_reply<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    match serde_json::from_str::<Reply<T>>(body) {
        Ok(Reply::Success { result }) => Ok(result),
        Ok(Reply::Failed { comment }) => Err(Error::with_description(Kind::API, comment)),
        Err(e) if status.is_success() => Err(Error::with_kind(Kind::Decode(e))),
        Err(_) => Err(Error::with_kind(Kind::Status(status))),
    }
}

pub struct Session {
    client: Client,
    base: String,
    pub(super) regex: RegexSet,
}
impl Session {
    fn from_client(builder: ClientBuilder, base: &str) -> Result<Self> {
        Ok(Session {
            client: builder
                .user_agent(USER_AGENT)
                .connection_verbose(VERBOSE)
                .build()
                .map_err(builder_error)?,
            base: base.trim_end_matches('/').to_string(),
            regex: RegexSet::new(),
        })
    }
    pub fn new() -> Result<Self> {
        Self::from_client(Client::builder(), BASE_URL)
    }
    pub fn with_options(base: Option<&str>, proxy: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(p) = proxy {
            builder = builder.proxy(Proxy::https(p).map_err(builder_error)?);
        }
        Self::from_client(builder, base.unwrap_or(BASE_URL))
    }
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    pub(super) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base, method);
        debug!("GET {} {:?}", url, query);
        let response = send_retry(|| self.client.get(&url).query(query)).await?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        decode_reply(status, body.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ok() {
        let v: Vec<u32> = decode_reply(StatusCode::OK, r#"{"status":"OK","result":[1,2,3]}"#).unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_failed_keeps_comment() {
        let err = decode_reply::<Vec<u32>>(
            StatusCode::BAD_REQUEST,
            r#"{"status":"FAILED","comment":"handle: User with handle nobody not found"}"#,
        )
        .unwrap_err();
        assert!(err.is_api());
        assert_eq!(
            err.description(),
            Some("handle: User with handle nobody not found")
        );
        assert_eq!(
            err.to_string(),
            "API request failed: handle: User with handle nobody not found"
        );
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_reply::<Vec<u32>>(StatusCode::BAD_GATEWAY, "<html>502</html>").unwrap_err();
        assert!(!err.is_api());
        assert_eq!(err.to_string(), "Unexpected response status 502 Bad Gateway");

        let err = decode_reply::<Vec<u32>>(StatusCode::OK, "{}").unwrap_err();
        assert!(err.to_string().starts_with("Error decoding response"));
    }

    #[test]
    fn test_base_url_trimmed() {
        let session = Session::with_options(Some("http://localhost:8080/api/"), None).unwrap();
        assert_eq!(session.base(), "http://localhost:8080/api");
        assert_eq!(Session::new().unwrap().base(), BASE_URL);
    }
}
