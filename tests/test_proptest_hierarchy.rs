//! Property-based tests for hierarchy analysis and family resolution.
#![cfg(feature = "proptest")]

use proptest::prelude::*;
use wrapgen::{
    analyze, resolve_family, AnalyzerOptions, ApiSnapshot, ClassName, HeaderGroup,
    InterfaceDecl, WrapperCreatorsGenerator,
};

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Strategy for interface names that never end in a digit.
fn arb_base_name() -> impl Strategy<Value = String> {
    "I[A-Z][a-zA-Z0-9]{0,10}[A-Za-z]"
}

/// Strategy for a list of distinct interface names.
fn arb_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_base_name(), 0..12).prop_map(|mut names| {
        let mut seen = std::collections::HashSet::new();
        names.retain(|n| seen.insert(n.clone()));
        names
    })
}

/// Strategy for a hierarchy: each interface optionally inherits from an
/// earlier one.
fn arb_hierarchy() -> impl Strategy<Value = Vec<(String, Option<usize>)>> {
    arb_names().prop_flat_map(|names| {
        let len = names.len();
        let parents = proptest::collection::vec(any::<prop::sample::Index>(), len);
        (Just(names), parents, proptest::collection::vec(any::<bool>(), len))
    })
    .prop_map(|(names, picks, has_parent)| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let parent = (i > 0 && has_parent[i]).then(|| picks[i].index(i));
                (name, parent)
            })
            .collect()
    })
}

fn snapshot_of(hierarchy: &[(String, Option<usize>)]) -> ApiSnapshot {
    let mut group = HeaderGroup::new();
    for (name, parent) in hierarchy {
        let mut decl = InterfaceDecl::class(name.as_str());
        if let Some(p) = parent {
            decl = decl.with_parent(hierarchy[*p].0.as_str());
        }
        group.insert(decl);
    }
    ApiSnapshot::new().with("generated.h", group)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn leaves_equal_all_names_without_inheritance(names in arb_names()) {
        let hierarchy: Vec<_> = names.into_iter().map(|n| (n, None)).collect();
        let set = analyze(&snapshot_of(&hierarchy), &AnalyzerOptions::default());

        let leaves: Vec<_> = set.leaves().iter().map(|n| n.to_string()).collect();
        let expected: Vec<_> = hierarchy.into_iter().map(|(n, _)| n).collect();
        prop_assert_eq!(leaves, expected);
    }

    #[test]
    fn parents_are_never_leaves(hierarchy in arb_hierarchy()) {
        let set = analyze(&snapshot_of(&hierarchy), &AnalyzerOptions::default());
        let leaves = set.leaves();

        for (_, parent) in &hierarchy {
            if let Some(p) = parent {
                let parent_name = hierarchy[*p].0.as_str();
                prop_assert!(!leaves.iter().any(|l| l == parent_name));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(hierarchy in arb_hierarchy()) {
        let snapshot = snapshot_of(&hierarchy);
        let generator = WrapperCreatorsGenerator::default();

        let first = generator.generate_to_string(&snapshot).unwrap();
        let second = generator.generate_to_string(&snapshot).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn family_members_ascend_from_base(base in arb_base_name(), version in 0u32..64) {
        let leaf = ClassName::new(format!("{base}{version}"));
        let family = resolve_family(&leaf).unwrap();

        prop_assert_eq!(family.base_name().as_str(), base.as_str());
        prop_assert_eq!(family.len(), version as usize + 1);

        let members: Vec<_> = family.members().map(|m| m.to_string()).collect();
        prop_assert_eq!(&members[0], &base);
        for (n, member) in members.iter().enumerate().skip(1) {
            prop_assert_eq!(member, &format!("{base}{n}"));
        }
    }
}
