pub mod error;
pub mod problem;
mod retry;
pub mod session;
pub mod submission;
pub mod user;

pub use error::{Error, Result};
pub use problem::ProblemKey;
pub use session::Session;
pub use submission::{Submission, Verdict};
pub use user::User;

#[cfg(test)]
pub(crate) use session::decode_reply;
