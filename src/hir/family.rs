//! Version families — grouping `IFoo`, `IFoo1`, ... `IFooN` under one name.
//!
//! COM APIs version an interface by appending an increasing number to its
//! name. The leaf of such a chain names the whole family: `IDXGIFactory7`
//! stands for `IDXGIFactory` and every revision from 1 through 7. Gaps in the
//! declared revisions are bridged, so the members are always the complete
//! ascending sequence.

use std::fmt;

use crate::base::ClassName;
use super::diagnostics::FamilyError;

/// An interface base name plus the latest numbered revision of it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClassFamily {
    base: ClassName,
    latest: Option<u32>,
}

impl ClassFamily {
    /// The unversioned name, e.g. `IDXGIFactory`.
    pub fn base_name(&self) -> &ClassName {
        &self.base
    }

    /// The highest revision number, if the leaf carried one.
    pub fn latest_version(&self) -> Option<u32> {
        self.latest
    }

    /// The first member of the family, which is always the base name.
    pub fn first(&self) -> &ClassName {
        &self.base
    }

    /// Iterate over `base, base1, base2, ... baseN` in ascending order.
    pub fn members(&self) -> impl Iterator<Item = ClassName> + '_ {
        let revisions = 1..=self.latest.unwrap_or(0);
        std::iter::once(self.base.clone()).chain(revisions.map(|n| self.base.versioned(n)))
    }

    /// Number of members, including the base name.
    pub fn len(&self) -> usize {
        1 + self.latest.unwrap_or(0) as usize
    }

    /// A family always contains at least its base name.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for ClassFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.latest {
            Some(n) => write!(f, "ClassFamily({}..={})", self.base, n),
            None => write!(f, "ClassFamily({})", self.base),
        }
    }
}

/// Resolve the family a leaf interface belongs to.
///
/// The trailing run of ASCII digits is the revision number and everything
/// before it is the base name. A suffix of `0` yields a family with only the
/// base name; leading zeros are read numerically (`IFoo07` is revision 7).
/// Only ASCII `0-9` count as suffix digits: a trailing Unicode decimal digit
/// such as `٣` stays part of the base name, since the generated
/// `Wrap<Base>` must be a plain C++ identifier and the revision must parse
/// as a number.
///
/// Fails when no base name remains (an empty or all-digit name) or when the
/// revision number does not fit in a `u32`.
pub fn resolve_family(leaf: &ClassName) -> Result<ClassFamily, FamilyError> {
    let name = leaf.as_str();
    let base_len = name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (base, suffix) = name.split_at(base_len);

    if base.is_empty() {
        return Err(FamilyError::DegenerateBaseName { name: leaf.clone() });
    }

    if suffix.is_empty() {
        return Ok(ClassFamily {
            base: leaf.clone(),
            latest: None,
        });
    }

    let latest = suffix
        .parse::<u32>()
        .map_err(|_| FamilyError::SuffixOutOfRange {
            name: leaf.clone(),
            suffix: suffix.to_string(),
        })?;

    Ok(ClassFamily {
        base: ClassName::new(base),
        latest: Some(latest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn members(family: &ClassFamily) -> Vec<String> {
        family.members().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_unversioned_leaf() {
        let family = resolve_family(&ClassName::new("IDXGIFactory")).unwrap();

        assert_eq!(family.base_name(), "IDXGIFactory");
        assert_eq!(family.latest_version(), None);
        assert_eq!(members(&family), ["IDXGIFactory"]);
    }

    #[test]
    fn test_versioned_leaf_has_every_revision() {
        let family = resolve_family(&ClassName::new("IDXGIFactory7")).unwrap();

        assert_eq!(family.base_name(), "IDXGIFactory");
        assert_eq!(family.len(), 8);
        assert_eq!(
            members(&family),
            [
                "IDXGIFactory",
                "IDXGIFactory1",
                "IDXGIFactory2",
                "IDXGIFactory3",
                "IDXGIFactory4",
                "IDXGIFactory5",
                "IDXGIFactory6",
                "IDXGIFactory7",
            ]
        );
    }

    #[test]
    fn test_gaps_are_bridged() {
        let family = resolve_family(&ClassName::new("Foo3")).unwrap();
        assert_eq!(members(&family), ["Foo", "Foo1", "Foo2", "Foo3"]);
    }

    #[rstest]
    #[case("ID3D12Device", "ID3D12Device", 1)]
    #[case("ID3D12Device9", "ID3D12Device", 10)]
    #[case("ID3D12GraphicsCommandList10", "ID3D12GraphicsCommandList", 11)]
    #[case("IFoo0", "IFoo", 1)]
    #[case("IFoo07", "IFoo", 8)]
    #[case("I2", "I", 3)]
    fn test_family_shape(#[case] leaf: &str, #[case] base: &str, #[case] len: usize) {
        let family = resolve_family(&ClassName::new(leaf)).unwrap();

        assert_eq!(family.base_name(), base);
        assert_eq!(family.first(), base);
        assert_eq!(family.len(), len);
        assert_eq!(family.members().count(), len);
    }

    #[rstest]
    #[case("")]
    #[case("7")]
    #[case("1234")]
    fn test_degenerate_base_name_is_rejected(#[case] leaf: &str) {
        let err = resolve_family(&ClassName::new(leaf)).unwrap_err();

        assert_eq!(
            err,
            FamilyError::DegenerateBaseName {
                name: ClassName::new(leaf)
            }
        );
    }

    #[test]
    fn test_oversized_suffix_is_rejected() {
        let err = resolve_family(&ClassName::new("IFoo4294967296")).unwrap_err();

        assert!(matches!(err, FamilyError::SuffixOutOfRange { ref suffix, .. } if suffix == "4294967296"));
    }

    #[test]
    fn test_non_ascii_digits_are_part_of_base() {
        // Only ASCII digits form a revision number.
        let family = resolve_family(&ClassName::new("IFoo٣")).unwrap();

        assert_eq!(family.base_name(), "IFoo٣");
        assert_eq!(family.latest_version(), None);
    }

    #[test]
    fn test_debug_format() {
        let family = resolve_family(&ClassName::new("IFoo2")).unwrap();
        assert_eq!(format!("{family:?}"), "ClassFamily(IFoo..=2)");
    }
}
