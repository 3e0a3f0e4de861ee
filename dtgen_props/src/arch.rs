//! CPU architecture classification.

use serde::Serialize;
use std::fmt;

/// Canonical architecture name for a device tree, derived from the
/// `ro.product.cpu.abi` / `ro.product.cpu.abilist` value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[allow(non_camel_case_types)]
pub enum DeviceArch {
    Arm64,
    Arm,
    X86,
    X86_64,
    Mips,
    Unknown,
}

impl DeviceArch {
    /// Classify a raw abi or abilist value by prefix.
    ///
    /// `x86` is tested before `x86_64`, so an `x86_64` abilist reports
    /// `x86`. Existing device trees were generated under this ordering;
    /// it must not be reordered.
    #[must_use]
    pub fn from_abi(abi: &str) -> Self {
        if abi.starts_with("arm64") {
            Self::Arm64
        } else if abi.starts_with("armeabi") {
            Self::Arm
        } else if abi.starts_with("x86") {
            Self::X86
        } else if abi.starts_with("x86_64") {
            Self::X86_64
        } else if abi.starts_with("mips") {
            Self::Mips
        } else {
            Self::Unknown
        }
    }

    /// Returns the string representation of this architecture.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Arm64 => "arm64",
            Self::Arm => "arm",
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
            Self::Mips => "mips",
            Self::Unknown => "unknown",
        }
    }

    /// True for the 64-bit architectures.
    ///
    /// `X86_64` is kept in the check even though [`Self::from_abi`]
    /// cannot produce it, so in practice this is true only for `Arm64`.
    #[must_use]
    pub const fn is_64bit(self) -> bool {
        matches!(self, Self::Arm64 | Self::X86_64)
    }
}

impl fmt::Display for DeviceArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
