mod common;

use apt_expressions::proptest_utils::arb_tree;
use apt_expressions::{check_links, count_nodes, nth_node, parse, preorder, string_tree};
use common::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn text_round_trip_preserves_values(t in arb_tree(5, 40)) {
        let text = string_tree(&t);
        let back = parse(&text).unwrap();
        prop_assert_eq!(string_tree(&back), text);
        for (x, y) in sample_points() {
            let a = t.eval(x, y).unwrap();
            let b = back.eval(x, y).unwrap();
            prop_assert!(same_value(a, b, 0.0), "{} vs {}", a, b);
        }
    }

    #[test]
    fn generated_and_parsed_trees_are_linked(t in arb_tree(5, 40)) {
        check_links(&t).unwrap();
        let back = parse(&t.to_string()).unwrap();
        check_links(&back).unwrap();
        prop_assert_eq!(back.arena_len(), count_nodes(&back, back.root()));
    }

    #[test]
    fn nth_node_enumerates_preorder(t in arb_tree(5, 40)) {
        let n = count_nodes(&t, t.root());
        let walked: Vec<_> = preorder(&t, t.root()).collect();
        prop_assert_eq!(walked.len(), n);
        for (i, id) in walked.into_iter().enumerate() {
            prop_assert_eq!(nth_node(&t, t.root(), i), Some(id));
        }
        prop_assert_eq!(nth_node(&t, t.root(), n), None);
    }

    #[test]
    fn extracted_subtrees_evaluate_like_the_original(t in arb_tree(5, 40), pick in any::<prop::sample::Index>()) {
        let n = count_nodes(&t, t.root());
        let id = nth_node(&t, t.root(), pick.index(n)).unwrap();
        let sub = t.extract(id);
        check_links(&sub).unwrap();
        for (x, y) in sample_points() {
            let a = t.eval_node(id, x, y).unwrap();
            let b = sub.eval(x, y).unwrap();
            prop_assert!(same_value(a, b, 0.0), "{} vs {}", a, b);
        }
    }
}
