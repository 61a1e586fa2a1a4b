extern crate reqwest;
extern crate serde_json;

use reqwest::StatusCode;
use std::{boxed::Box, convert::Into, error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub(super) enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Status(StatusCode),
    Decode(serde_json::Error),
    API,
    Handle,
    NotFound,
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Status(code) => write!(f, "Unexpected response status {}", code),
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err),
            Kind::API => {
                write!(f, "API request failed")?;
                self.write_description(f)
            }
            Kind::Handle => {
                write!(f, "Invalid handle")?;
                self.write_description(f)
            }
            Kind::NotFound => {
                write!(f, "No such user")?;
                self.write_description(f)
            }
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(x) | Kind::Network(x) => Some(x),
            Kind::Decode(x) => Some(x),
            Kind::Status(_) | Kind::API | Kind::Handle | Kind::NotFound => None,
        }
    }
}
impl crate::error::Error for Error {}

impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(super) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(super) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    /// The judge answered, but refused the request.
    pub fn is_api(&self) -> bool {
        matches!(self.0.kind, Kind::API | Kind::NotFound)
    }
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

pub(super) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(super) fn builder_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Builder(err))
}
