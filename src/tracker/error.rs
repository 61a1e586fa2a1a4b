use std::{boxed::Box, error::Error as StdError, result::Result as StdResult};

/// Library errors the command loop can report uniformly.
pub trait Error: StdError + Send {}
pub type BoxedError = Box<dyn StdError + Send + Sync>;

pub type Result<T> = StdResult<T, BoxedError>;
