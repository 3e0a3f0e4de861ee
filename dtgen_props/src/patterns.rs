//! Property queries over build.prop content.
//!
//! Each required field is looked up under several historically-used
//! property-key aliases. The aliases for one field are combined into a
//! single multiline alternation; the captured value is whatever follows
//! the `=` up to end of line.

use regex::Regex;
use std::fmt;

use crate::error::Result;

/// Required device property, named as it appears in failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropField {
    Codename,
    Manufacturer,
    Platform,
    Brand,
    Model,
    Arch,
}

impl PropField {
    /// Returns the string representation of this field.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Codename => "codename",
            Self::Manufacturer => "manufacturer",
            Self::Platform => "platform",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Arch => "arch",
        }
    }
}

impl fmt::Display for PropField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Present in the file iff the device uses seamless A/B updates.
///
/// Checked as a plain substring: the flag carries no value and its
/// absence is not an error.
pub const AB_UPDATE_MARKER: &str = "ro.build.ab_update=true";

/// A required query: one field plus its recognized key aliases.
#[derive(Debug, Clone, Copy)]
pub struct PropQuery {
    pub field: PropField,
    keys: &'static [&'static str],
}

impl PropQuery {
    pub const CODENAME: Self = Self {
        field: PropField::Codename,
        keys: &[
            "ro.product.device=",
            "ro.system.device=",
            "ro.vendor.device=",
            "ro.product.system.device=",
        ],
    };

    pub const MANUFACTURER: Self = Self {
        field: PropField::Manufacturer,
        keys: &[
            "ro.product.manufacturer=",
            "ro.product.system.manufacturer=",
            "ro.product.vendor.manufacturer=",
        ],
    };

    pub const PLATFORM: Self = Self {
        field: PropField::Platform,
        keys: &["ro.board.platform=", "ro.hardware.keystore="],
    };

    pub const BRAND: Self = Self {
        field: PropField::Brand,
        keys: &[
            "ro.product.brand=",
            "ro.product.system.brand=",
            "ro.product.vendor.brand=",
        ],
    };

    pub const MODEL: Self = Self {
        field: PropField::Model,
        keys: &[
            "ro.product.model=",
            "ro.product.system.model=",
            "ro.product.vendor.model=",
        ],
    };

    pub const ARCH: Self = Self {
        field: PropField::Arch,
        keys: &["ro.product.cpu.abi=", "ro.product.cpu.abilist="],
    };

    /// Every required query, in extraction order.
    pub const ALL: &'static [Self] = &[
        Self::CODENAME,
        Self::MANUFACTURER,
        Self::PLATFORM,
        Self::BRAND,
        Self::MODEL,
        Self::ARCH,
    ];

    /// Compile the combined pattern for this query.
    ///
    /// Keys are escaped and anchored at line start; the capture runs to
    /// end of line, so the earliest matching line in the file wins
    /// regardless of which alias it carries.
    ///
    /// # Errors
    /// Returns an error if the combined pattern fails to compile.
    pub fn build(&self) -> Result<Regex> {
        let alternation = self
            .keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Regex::new(&format!("(?m)^(?:{alternation})(.*)$"))?)
    }

    /// The recognized key aliases for this field.
    #[must_use]
    pub const fn keys(&self) -> &'static [&'static str] {
        self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn every_query_compiles() {
        for query in PropQuery::ALL {
            query.build().expect("query pattern should compile");
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn codename_query_matches_every_alias() {
        let re = PropQuery::CODENAME
            .build()
            .expect("query pattern should compile");

        for key in PropQuery::CODENAME.keys() {
            let line = format!("{key}whyred");
            let caps = re.captures(&line).expect("alias should match");
            assert_eq!(&caps[1], "whyred");
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn platform_query_accepts_keystore_alias() {
        let re = PropQuery::PLATFORM
            .build()
            .expect("query pattern should compile");

        let caps = re
            .captures("ro.hardware.keystore=sdm660\n")
            .expect("keystore alias should match");
        assert_eq!(&caps[1], "sdm660");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn keys_are_literal_and_line_anchored() {
        let re = PropQuery::CODENAME
            .build()
            .expect("query pattern should compile");

        // The dot in the key is a literal dot, not a wildcard.
        assert!(re.captures("roXproductXdevice=whyred").is_none());
        // A key in the middle of a line is not a property assignment.
        assert!(re.captures("import ro.product.device=whyred").is_none());
    }

    #[test]
    fn field_names() {
        assert_eq!(PropField::Codename.as_str(), "codename");
        assert_eq!(PropField::Manufacturer.as_str(), "manufacturer");
        assert_eq!(PropField::Arch.to_string(), "arch");
    }
}
