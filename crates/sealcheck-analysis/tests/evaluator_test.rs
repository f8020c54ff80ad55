//! End-to-end evaluation of declarations against compiled policies.

use sealcheck_analysis::evaluator::{Decision, ImmutabilityPolicy};
use sealcheck_analysis::oracle::TableOracle;
use sealcheck_analysis::syntax::{NodeId, SourceUnit, TypeInfo, UnitBuilder};
use sealcheck_core::config::SealcheckConfig;
use sealcheck_core::types::{Comparator, ImmutabilityLevel};

fn policy(toml: &str) -> ImmutabilityPolicy {
    ImmutabilityPolicy::compile(&SealcheckConfig::from_toml(toml).unwrap()).unwrap()
}

fn oracle() -> TableOracle {
    TableOracle::new()
        .with("Foo", ImmutabilityLevel::Mutable)
        .with("ReadonlySet", ImmutabilityLevel::ReadonlyDeep)
        .with("Point", ImmutabilityLevel::Immutable)
        .with("Draft", ImmutabilityLevel::Mutable)
}

/// `type {name} = {type_text};` with the alias typed as `ty`.
fn alias_unit(name: &str, type_text: &str, ty: TypeInfo) -> (SourceUnit, NodeId) {
    let mut builder = UnitBuilder::new("src/model.ts");
    let alias = builder.type_alias(name, type_text);
    builder.set_type(alias, ty);
    (builder.finish(), alias)
}

#[test]
fn test_readonly_name_with_mutable_type_is_violation() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let (unit, alias) = alias_unit("ReadonlyFoo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();

    let mut evaluator = policy.evaluator(&unit, &oracle);
    let decision = evaluator.evaluate(alias);
    let violation = decision.violation().expect("violation");

    assert_eq!(violation.expected, ImmutabilityLevel::ReadonlyShallow);
    assert_eq!(violation.comparator, Comparator::AtLeast);
    assert_eq!(violation.actual, ImmutabilityLevel::Mutable);
    assert_eq!(violation.identifier.as_deref(), Some("ReadonlyFoo"));
    assert_eq!(unit.tree.slice(violation.span), "ReadonlyFoo");

    let fix = violation.fix.as_ref().expect("fix");
    assert_eq!(unit.tree.slice(fix.span), "Foo");
    assert_eq!(fix.replacement, "Readonly<Foo>");
}

#[test]
fn test_mutable_name_with_readonly_type_is_violation() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let (unit, alias) = alias_unit(
        "MutableSet",
        "ReadonlySet<string>",
        TypeInfo::lib("ReadonlySet"),
    );
    let oracle = oracle();

    let decision = policy.evaluator(&unit, &oracle).evaluate(alias);
    let violation = decision.violation().expect("violation");
    assert_eq!(violation.expected, ImmutabilityLevel::Mutable);
    assert_eq!(violation.comparator, Comparator::AtMost);
    assert_eq!(violation.actual, ImmutabilityLevel::ReadonlyDeep);
    assert_eq!(violation.fix.as_ref().unwrap().replacement, "Set<string>");
}

#[test]
fn test_satisfied_declaration_is_valid() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let (unit, alias) = alias_unit("ImmutablePoint", "Point", TypeInfo::file("src/model.ts", "Point"));
    let oracle = oracle();
    assert_eq!(policy.evaluator(&unit, &oracle).evaluate(alias), Decision::Valid);
}

#[test]
fn test_unmatched_name_has_no_rule() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let (unit, alias) = alias_unit("Foo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();
    assert_eq!(policy.evaluator(&unit, &oracle).evaluate(alias), Decision::NoRuleApplies);
}

#[test]
fn test_lib_collection_override_drives_fix() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let (unit, alias) = alias_unit("ReadonlyIndex", "Map<string, number>", TypeInfo::lib("Map"));
    let oracle = TableOracle::new().with("Map", ImmutabilityLevel::ReadonlyDeep);

    let decision = policy.evaluator(&unit, &oracle).evaluate(alias);
    let violation = decision.violation().expect("violation");
    assert_eq!(violation.actual, ImmutabilityLevel::Mutable);
    assert_eq!(
        violation.fix.as_ref().unwrap().replacement,
        "ReadonlyMap<string, number>"
    );
}

#[test]
fn test_package_disable_override_suppresses_every_name() {
    let policy = policy(
        r#"
[[rules.type_declaration_immutability.overrides]]
specifiers = { from = "package", package = "immer" }
disable = true
"#,
    );
    let oracle = oracle();

    let mut builder = UnitBuilder::new("src/store.ts");
    let readonly = builder.type_alias("ReadonlyDraft", "Draft<State>");
    let mutable = builder.type_alias("MutableDraft", "Draft<State>");
    let local = builder.type_alias("ReadonlyFoo", "Foo");
    builder
        .set_type(readonly, TypeInfo::package("immer", "Draft"))
        .set_type(mutable, TypeInfo::package("immer", "Draft"))
        .set_type(local, TypeInfo::file("src/store.ts", "Foo"));
    let unit = builder.finish();

    let mut evaluator = policy.evaluator(&unit, &oracle);
    assert_eq!(evaluator.evaluate(readonly), Decision::Disabled);
    assert_eq!(evaluator.evaluate(mutable), Decision::Disabled);
    assert!(evaluator.evaluate(local).is_violation());

    let report = evaluator.into_report();
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.stats.disabled, 2);
}

#[test]
fn test_override_options_replace_rule_table() {
    let policy = policy(
        r#"
[[rules.type_declaration_immutability.overrides]]
specifiers = "Foo"
options = { rules = [{ identifiers = "^Readonly", immutability = "Mutable", comparator = "AtMost" }] }
"#,
    );
    let (unit, alias) = alias_unit("ReadonlyFoo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();
    assert_eq!(policy.evaluator(&unit, &oracle).evaluate(alias), Decision::Valid);
}

#[test]
fn test_repeated_evaluation_hits_cache() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let (unit, alias) = alias_unit("ReadonlyFoo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();

    let mut evaluator = policy.evaluator(&unit, &oracle);
    let first = evaluator.evaluate(alias);
    let second = evaluator.evaluate(alias);
    assert_eq!(first, second);
    assert_eq!(evaluator.violations().len(), 1);
    assert_eq!(evaluator.cache().hits(), 1);
    assert_eq!(evaluator.stats().cache_hits, 1);
    assert_eq!(evaluator.stats().evaluated, 1);
}

#[test]
fn test_ignore_pattern_needs_every_identifier() {
    let policy = policy(
        r#"
[rules.type_declaration_immutability]
ignore_identifier_pattern = "^_"
"#,
    );
    let oracle = oracle();

    let mut builder = UnitBuilder::new("src/vars.ts");
    let mixed = builder.variable(&[("_ReadonlyA", Some("Foo")), ("ReadonlyB", Some("Foo"))]);
    let hidden = builder.variable(&[("_ReadonlyC", Some("Foo")), ("_ReadonlyD", Some("Foo"))]);
    builder
        .set_type(mixed, TypeInfo::file("src/vars.ts", "Foo"))
        .set_type(hidden, TypeInfo::file("src/vars.ts", "Foo"));
    let unit = builder.finish();

    let mut evaluator = policy.evaluator(&unit, &oracle);
    assert!(evaluator.evaluate(mixed).is_violation());
    assert_eq!(evaluator.evaluate(hidden), Decision::Ignored);
}

#[test]
fn test_ignore_accessor_pattern() {
    let policy = policy(
        r#"
[rules.type_declaration_immutability]
ignore_accessor_pattern = "Readonly*"
"#,
    );
    let (unit, alias) = alias_unit("ReadonlyFoo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();
    assert_eq!(policy.evaluator(&unit, &oracle).evaluate(alias), Decision::Ignored);
}

#[test]
fn test_interfaces_ignored_or_reported_without_fix() {
    let mut builder = UnitBuilder::new("src/api.ts");
    let iface = builder.interface("IReadonlyFoo", &[("items", "string[]")]);
    builder.set_type(iface, TypeInfo::file("src/api.ts", "Foo"));
    let unit = builder.finish();
    let oracle = oracle();

    let ignoring = policy(
        r#"
[rules.type_declaration_immutability]
ignore_interfaces = true
"#,
    );
    assert_eq!(ignoring.evaluator(&unit, &oracle).check_interface(iface), Decision::Ignored);

    let checking = ImmutabilityPolicy::defaults().unwrap();
    let decision = checking.evaluator(&unit, &oracle).check_interface(iface);
    let violation = decision.violation().expect("violation");
    assert!(violation.fix.is_none());
    assert!(violation.suggestions.is_empty());
}

#[test]
fn test_ignore_classes_skips_members() {
    let mut builder = UnitBuilder::new("src/store.ts");
    let (_, fields) = builder.class("Store", &[("ReadonlyItems", "Foo")]);
    builder.set_type(fields[0], TypeInfo::file("src/store.ts", "Foo"));
    let unit = builder.finish();
    let oracle = oracle();

    let ignoring = policy(
        r#"
[rules.type_declaration_immutability]
ignore_classes = true
"#,
    );
    assert_eq!(ignoring.evaluator(&unit, &oracle).evaluate(fields[0]), Decision::Ignored);

    let checking = ImmutabilityPolicy::defaults().unwrap();
    let decision = checking.evaluator(&unit, &oracle).evaluate(fields[0]);
    let fix = decision.violation().and_then(|v| v.fix.clone()).expect("fix");
    assert_eq!(fix.replacement, "Readonly<Foo>");
}

#[test]
fn test_unknown_level_follows_policy() {
    let mut builder = UnitBuilder::new("src/model.ts");
    let readonly = builder.type_alias("ReadonlyThing", "Thing");
    let mutable = builder.type_alias("MutableThing", "Thing");
    let unit = builder.finish();
    let oracle = oracle();

    let bottom = ImmutabilityPolicy::defaults().unwrap();
    let mut evaluator = bottom.evaluator(&unit, &oracle);
    let decision = evaluator.evaluate(readonly);
    assert_eq!(
        decision.violation().map(|v| v.actual),
        Some(ImmutabilityLevel::Unknown)
    );
    assert_eq!(evaluator.evaluate(mutable), Decision::Valid);

    let satisfied = policy(
        r#"
[settings]
unknown_policy = "satisfied"
"#,
    );
    assert_eq!(satisfied.evaluator(&unit, &oracle).evaluate(readonly), Decision::Valid);

    let unsatisfied = policy(
        r#"
[settings]
unknown_policy = "unsatisfied"
"#,
    );
    assert!(unsatisfied.evaluator(&unit, &oracle).evaluate(mutable).is_violation());
}

#[test]
fn test_suggestions_follow_configured_order() {
    let policy = policy(
        r#"
[[rules.type_declaration_immutability.rules]]
identifiers = "^Frozen"
immutability = "Immutable"
fixer = false
suggestions = [
    { pattern = "^(.+)$", replace = "Readonly<$1>" },
    { pattern = "^(.+)$", replace = "DeepReadonly<$1>" },
]
"#,
    );
    let (unit, alias) = alias_unit("FrozenFoo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();

    let decision = policy.evaluator(&unit, &oracle).evaluate(alias);
    let violation = decision.violation().expect("violation");
    assert!(violation.fix.is_none());
    let replacements: Vec<_> = violation
        .suggestions
        .iter()
        .map(|s| s.replacement.as_str())
        .collect();
    assert_eq!(replacements, ["Readonly<Foo>", "DeepReadonly<Foo>"]);
}

#[test]
fn test_disabled_rule_reports_nothing() {
    let policy = policy(
        r#"
[rules.type_declaration_immutability]
enabled = false
"#,
    );
    let (unit, _) = alias_unit("ReadonlyFoo", "Foo", TypeInfo::file("src/model.ts", "Foo"));
    let oracle = oracle();
    let report = policy.evaluator(&unit, &oracle).run();
    assert!(report.violations.is_empty());
    assert_eq!(report.stats.disabled, 1);
}

#[test]
fn test_run_covers_aliases_and_interfaces() {
    let policy = ImmutabilityPolicy::defaults().unwrap();
    let oracle = oracle();

    let mut builder = UnitBuilder::new("src/all.ts");
    let a = builder.type_alias("ReadonlyFoo", "Foo");
    let b = builder.interface("IMutablePoint", &[("x", "number")]);
    let c = builder.type_alias("Plain", "Foo");
    builder.variable(&[("ReadonlyVar", Some("Foo"))]);
    builder
        .set_type(a, TypeInfo::file("src/all.ts", "Foo"))
        .set_type(b, TypeInfo::file("src/all.ts", "Point"))
        .set_type(c, TypeInfo::file("src/all.ts", "Foo"));
    let unit = builder.finish();

    let report = policy.evaluator(&unit, &oracle).run();
    assert_eq!(report.path, "src/all.ts");
    assert_eq!(report.stats.evaluated, 3);
    assert_eq!(report.stats.violations, 2);
    assert_eq!(report.stats.no_rule, 1);
    let names: Vec<_> = report
        .violations
        .iter()
        .filter_map(|v| v.identifier.as_deref())
        .collect();
    assert_eq!(names, ["ReadonlyFoo", "IMutablePoint"]);
}
