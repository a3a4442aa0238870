//! Diagnostics — errors raised while resolving interface families.
//!
//! The analysis itself cannot fail. The only fault is a leaf name whose
//! numeric version suffix cannot be turned into a usable family.

use thiserror::Error;

use crate::base::ClassName;

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable codes embedded in error messages.
pub mod codes {
    /// Stripping the version suffix leaves no base name.
    pub const DEGENERATE_BASE_NAME: &str = "E0101";
    /// Version suffix does not fit in a `u32`.
    pub const SUFFIX_OUT_OF_RANGE: &str = "E0102";
    /// Writing generated output failed.
    pub const OUTPUT_FAILED: &str = "E0201";
    /// A snapshot or config file could not be read or decoded.
    pub const LOAD_FAILED: &str = "E0301";
}

// ============================================================================
// FAMILY ERRORS
// ============================================================================

/// A leaf interface name that does not describe a valid family.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// The name is empty or made only of digits.
    #[error("[E0101] interface name `{name}` has no base name before its version suffix")]
    DegenerateBaseName { name: ClassName },

    /// The trailing version number overflows.
    #[error("[E0102] version suffix `{suffix}` of interface `{name}` is out of range")]
    SuffixOutOfRange { name: ClassName, suffix: String },
}

impl FamilyError {
    /// The stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            FamilyError::DegenerateBaseName { .. } => codes::DEGENERATE_BASE_NAME,
            FamilyError::SuffixOutOfRange { .. } => codes::SUFFIX_OUT_OF_RANGE,
        }
    }

    /// The offending interface name.
    pub fn name(&self) -> &ClassName {
        match self {
            FamilyError::DegenerateBaseName { name } | FamilyError::SuffixOutOfRange { name, .. } => {
                name
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_carries_code() {
        let err = FamilyError::DegenerateBaseName {
            name: ClassName::new("1234"),
        };

        assert_eq!(err.code(), codes::DEGENERATE_BASE_NAME);
        assert!(err.to_string().starts_with(&format!("[{}]", err.code())));
        assert_eq!(err.name(), "1234");
    }

    #[test]
    fn test_suffix_out_of_range_message() {
        let err = FamilyError::SuffixOutOfRange {
            name: ClassName::new("IFoo99999999999"),
            suffix: "99999999999".into(),
        };

        assert_eq!(err.code(), codes::SUFFIX_OUT_OF_RANGE);
        assert_eq!(
            err.to_string(),
            "[E0102] version suffix `99999999999` of interface `IFoo99999999999` is out of range"
        );
    }
}
