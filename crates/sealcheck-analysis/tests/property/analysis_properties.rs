use proptest::prelude::*;

use sealcheck_analysis::fix::FixConfig;
use sealcheck_analysis::lattice::compare;
use sealcheck_analysis::patterns::AccessorPattern;
use sealcheck_analysis::rules::RuleTable;
use sealcheck_core::config::UnknownPolicy;
use sealcheck_core::types::{Comparator, ImmutabilityLevel};

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9]{0,5}", 1..6)
}

fn ranked() -> impl Strategy<Value = ImmutabilityLevel> {
    prop::sample::select(ImmutabilityLevel::RANKED.to_vec())
}

// ── Accessor patterns ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn literal_path_matches_itself(parts in segments()) {
        let path = parts.join(".");
        let pattern = AccessorPattern::compile(&path).unwrap();
        prop_assert!(pattern.is_match(&path));
    }

    #[test]
    fn double_star_matches_everything(parts in segments()) {
        let pattern = AccessorPattern::compile("**").unwrap();
        prop_assert!(pattern.is_match(&parts.join(".")));
    }

    #[test]
    fn prefix_double_star_matches_extensions(
        prefix in segments(),
        suffix in prop::collection::vec("[a-z]{1,4}", 0..4)
    ) {
        let pattern = AccessorPattern::compile(&format!("{}.**", prefix.join("."))).unwrap();
        let mut full = prefix.clone();
        full.extend(suffix);
        prop_assert!(pattern.is_match(&full.join(".")));
    }

    #[test]
    fn single_star_replaces_any_one_segment(parts in segments(), pick in any::<prop::sample::Index>()) {
        let mut wild = parts.clone();
        let i = pick.index(wild.len());
        wild[i] = "*".to_string();
        let pattern = AccessorPattern::compile(&wild.join(".")).unwrap();
        prop_assert!(pattern.is_match(&parts.join(".")));

        let mut longer = parts.clone();
        longer.push("extra".to_string());
        prop_assert!(!pattern.is_match(&longer.join(".")));
    }
}

// ── Lattice ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn exactly_one_strict_relation_holds(a in ranked(), b in ranked()) {
        let p = UnknownPolicy::Bottom;
        let held = [Comparator::Less, Comparator::Exactly, Comparator::More]
            .into_iter()
            .filter(|cmp| compare(a, b, *cmp, p))
            .count();
        prop_assert_eq!(held, 1);
        prop_assert_eq!(
            compare(a, b, Comparator::AtMost, p),
            compare(a, b, Comparator::Less, p) || compare(a, b, Comparator::Exactly, p)
        );
        prop_assert_eq!(
            compare(a, b, Comparator::AtLeast, p),
            !compare(a, b, Comparator::Less, p)
        );
    }
}

// ── Default fixers ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mutable_fixer_undoes_readonly_fixer(name in "[A-Z][a-z]{1,8}") {
        let table = RuleTable::defaults().unwrap();
        let readonly = table.resolve(&["ReadonlyX"]).unwrap();
        let mutable = table.resolve(&["MutableX"]).unwrap();
        prop_assert!(matches!(readonly.fixer, FixConfig::Rules(_)));

        let sealed = readonly.fixer.synthesize(&name).unwrap();
        prop_assert_eq!(&sealed, &format!("Readonly<{name}>"));
        prop_assert_eq!(mutable.fixer.synthesize(&sealed), Some(name));
    }
}
