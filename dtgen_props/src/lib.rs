#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod arch;
mod error;
mod patterns;
mod reader;

pub use arch::DeviceArch;
pub use error::{Error, Result};
pub use patterns::{AB_UPDATE_MARKER, PropField, PropQuery};
pub use reader::{BuildProp, DeviceInfo};
