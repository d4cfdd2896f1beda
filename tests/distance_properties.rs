use distle_solver::core::{
    EditTable, apply_edits, distance_only, edit_distance, transformation_edits,
    transformation_sequence,
};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-e]{0,8}"
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(s in word()) {
        prop_assert_eq!(edit_distance(&s, &s), 0);
        prop_assert!(transformation_sequence(&s, &s).is_empty());
    }

    #[test]
    fn distance_is_symmetric(a in word(), b in word()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn sequence_length_equals_distance(a in word(), b in word()) {
        prop_assert_eq!(transformation_sequence(&a, &b).len(), edit_distance(&a, &b));
    }

    #[test]
    fn applying_edits_reaches_target(a in word(), b in word()) {
        let source: Vec<char> = a.chars().collect();
        let edits = transformation_edits(&a, &b);
        let result: String = apply_edits(&source, &edits).into_iter().collect();
        prop_assert_eq!(result, b);
    }

    #[test]
    fn rolling_rows_match_full_table(a in word(), b in word()) {
        let s0: Vec<char> = a.chars().collect();
        let s1: Vec<char> = b.chars().collect();
        prop_assert_eq!(distance_only(&s0, &s1), EditTable::build(&s0, &s1).distance());
    }

    #[test]
    fn distance_bounded_by_lengths(a in word(), b in word()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }
}
