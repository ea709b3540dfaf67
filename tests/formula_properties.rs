//! Property-based tests for structural equality and the printer.

use natded::prelude::*;
use proptest::prelude::*;

fn arb_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop::sample::select(vec!["P", "Q", "R", "S"]).prop_map(|name| Formula::var(name));

    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::implies(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::or(l, r)),
            inner.prop_map(Formula::negate),
        ]
    })
}

/// Rebuilds a formula node by node so nothing is shared with the original.
fn rebuild(formula: &Formula) -> Formula {
    match formula {
        Formula::Var(name) => Formula::var(name.as_str()),
        Formula::Implies(l, r) => Formula::implies(rebuild(l), rebuild(r)),
        Formula::And(l, r) => Formula::and(rebuild(l), rebuild(r)),
        Formula::Or(l, r) => Formula::or(rebuild(l), rebuild(r)),
        Formula::Not(inner) => Formula::negate(rebuild(inner)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn equality_is_reflexive(a in arb_formula()) {
        prop_assert!(equals(&a, &a));
        prop_assert!(equals(&a, &rebuild(&a)));
    }

    #[test]
    fn equality_is_symmetric(a in arb_formula(), b in arb_formula()) {
        prop_assert_eq!(equals(&a, &b), equals(&b, &a));
    }

    #[test]
    fn equality_is_compositional(a in arb_formula(), b in arb_formula(), c in arb_formula()) {
        let same = equals(&a, &b);
        prop_assert_eq!(
            equals(&Formula::implies(a.clone(), c.clone()), &Formula::implies(b.clone(), c.clone())),
            same
        );
        prop_assert_eq!(
            equals(&Formula::and(c.clone(), a.clone()), &Formula::and(c.clone(), b.clone())),
            same
        );
        prop_assert_eq!(equals(&Formula::negate(a), &Formula::negate(b)), same);
    }

    #[test]
    fn equality_distinguishes_connectives(a in arb_formula(), b in arb_formula()) {
        prop_assert!(!equals(
            &Formula::and(a.clone(), b.clone()),
            &Formula::or(a.clone(), b.clone())
        ));
        prop_assert!(!equals(&Formula::implies(a.clone(), b.clone()), &Formula::and(a, b)));
    }

    #[test]
    fn printer_is_stable(a in arb_formula()) {
        prop_assert_eq!(format(&a), format(&rebuild(&a)));
        prop_assert_eq!(format(&a), a.to_string());
    }

    #[test]
    fn intro_adds_antecedent(a in arb_formula(), b in arb_formula()) {
        let goal = Goal::new(
            vec![Hypothesis::new("H1", Formula::var("Z"))],
            Formula::implies(a.clone(), b.clone()),
        );

        let result = intro(&goal);

        prop_assert!(result.success());
        prop_assert_eq!(
            result.new_goals(),
            &[Goal::new(
                vec![Hypothesis::new("H1", Formula::var("Z")), Hypothesis::new("H2", a)],
                b,
            )][..]
        );
    }

    #[test]
    fn exact_succeeds_iff_equal(a in arb_formula(), b in arb_formula()) {
        let goal = Goal::new(vec![Hypothesis::new("H1", a.clone())], b.clone());

        let result = exact(&goal, "H1");

        prop_assert_eq!(result.success(), equals(&a, &b));
        prop_assert_eq!(result.completed(), equals(&a, &b));
        prop_assert!(result.new_goals().is_empty());
    }
}
