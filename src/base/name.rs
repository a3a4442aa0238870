//! Interface names.

use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;

/// The name of a declared interface, e.g. `ID3D12Device5`.
///
/// `ClassName` is a thin wrapper around [`SmolStr`]: interface names are
/// short, so they are stored inline and are cheap to clone into the
/// analyzer's name sets.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(transparent))]
pub struct ClassName(SmolStr);

impl ClassName {
    /// Create a new name.
    #[inline]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    /// Get the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Append a version number, producing `IFoo3` from `IFoo` and `3`.
    pub fn versioned(&self, version: u32) -> Self {
        Self(smol_str::format_smolstr!("{}{}", self.0, version))
    }

    /// Check whether the name is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName({})", self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ClassName {
    #[inline]
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ClassName {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ClassName {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ClassName {
    #[inline]
    fn from(name: String) -> Self {
        Self(SmolStr::from(name))
    }
}

impl From<SmolStr> for ClassName {
    #[inline]
    fn from(name: SmolStr) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for ClassName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ClassName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
