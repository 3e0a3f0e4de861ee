//! Build.prop reader.
//!
//! Loads the file into memory once and answers the fixed set of device
//! queries against it. Extraction is eager and atomic: construction
//! either yields a fully populated record or fails naming the first
//! required property that is absent.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::arch::DeviceArch;
use crate::error::{Error, Result};
use crate::patterns::{AB_UPDATE_MARKER, PropQuery};

/// Device metadata extracted from a build.prop file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeviceInfo {
    pub codename: String,
    /// Case-folded to lowercase.
    pub manufacturer: String,
    pub platform: String,
    pub brand: String,
    pub model: String,
    pub arch: DeviceArch,
    pub device_is_ab: bool,
    pub device_has_64bit_arch: bool,
}

/// Reader over a single build.prop buffer.
///
/// Immutable after construction; independent instances are safe to share
/// across callers.
#[derive(Debug, Clone)]
pub struct BuildProp {
    content: String,
    info: DeviceInfo,
}

impl BuildProp {
    /// Read a build.prop file and extract the device record from it.
    ///
    /// The file is read to completion up front; no handle is held
    /// afterwards.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a required
    /// property is absent.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading build.prop from {}", path.display());
        Self::from_content(fs::read_to_string(path)?)
    }

    /// Extract the device record from raw build.prop content.
    ///
    /// # Errors
    /// Returns [`Error::MissingProperty`] naming the field whose query
    /// has no match. The A/B-update flag is presence-only and never
    /// errors.
    pub fn from_content(content: String) -> Result<Self> {
        let codename = Self::search(&content, &PropQuery::CODENAME)?;
        let manufacturer = Self::search(&content, &PropQuery::MANUFACTURER)?.to_lowercase();
        let platform = Self::search(&content, &PropQuery::PLATFORM)?;
        let brand = Self::search(&content, &PropQuery::BRAND)?;
        let model = Self::search(&content, &PropQuery::MODEL)?;
        let arch = DeviceArch::from_abi(&Self::search(&content, &PropQuery::ARCH)?);

        let info = DeviceInfo {
            codename,
            manufacturer,
            platform,
            brand,
            model,
            arch,
            device_is_ab: content.contains(AB_UPDATE_MARKER),
            device_has_64bit_arch: arch.is_64bit(),
        };

        debug!(codename = %info.codename, arch = %info.arch, "parsed build.prop");

        Ok(Self { content, info })
    }

    /// The extracted device record.
    #[must_use]
    pub const fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Raw lookup of an exact property key; first matching line wins.
    ///
    /// Not part of the required-field contract, so absence is simply
    /// `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.content
            .lines()
            .find_map(|line| line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
    }

    /// Run one required query; the match at the earliest byte offset
    /// wins when several alias keys are present.
    fn search(content: &str, query: &PropQuery) -> Result<String> {
        query
            .build()?
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str().to_string())
            .ok_or(Error::MissingProperty(query.field))
    }
}
