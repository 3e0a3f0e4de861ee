use thiserror::Error;

use crate::patterns::PropField;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required property had no match anywhere in the file.
    #[error("device {0} could not be found in build.prop")]
    MissingProperty(PropField),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid property pattern: {0}")]
    Pattern(#[from] regex::Error),
}
