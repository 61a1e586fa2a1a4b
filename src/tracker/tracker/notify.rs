extern crate handlebars;
extern crate serde;

use crate::judge::ProblemKey;
use handlebars::{no_escape, Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::{error::Error as StdError, fmt, result::Result as StdResult};

pub const DEFAULT_TEMPLATE: &str = "🎉 {{handle}} solved {{title}} ({{key}})";

/// One newly solved, visible problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub key: ProblemKey,
    pub title: String,
}

pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

#[derive(Debug)]
pub enum Error {
    Template(TemplateError),
    Render(RenderError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Template(err) => write!(f, "Error parsing notification template: {}", err),
            Error::Render(err) => write!(f, "Error rendering notification: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Template(err) => Some(err),
            Error::Render(err) => Some(err),
        }
    }
}
impl crate::error::Error for Error {}

pub type Result<T> = StdResult<T, Error>;

#[derive(Serialize)]
struct Param<'a> {
    handle: &'a str,
    title: &'a str,
    key: String,
    url: String,
}

/// Renders notifications into the text shown to the user.
pub struct Template {
    engine: Handlebars<'static>,
}
impl Template {
    pub fn new(source: &str) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_escape_fn(no_escape);
        engine
            .register_template_string("notification", source)
            .map_err(Error::Template)?;
        Ok(Template { engine })
    }
    pub fn render(&self, handle: &str, notification: &Notification) -> Result<String> {
        self.engine
            .render(
                "notification",
                &Param {
                    handle,
                    title: notification.title.as_str(),
                    key: notification.key.to_string(),
                    url: notification.key.url(),
                },
            )
            .map_err(Error::Render)
    }
}
impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE).expect("default notification template is valid")
    }
}
