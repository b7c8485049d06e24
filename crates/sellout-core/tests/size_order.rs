use proptest::prelude::*;

use sellout_core::order_sizes;

const RANKED_OR_NUMERIC: [&str; 22] = [
    "XXXS", "XXS", "XS", "S", "M", "L", "XL", "XXL", "XXXL", "3XL", "4XL", "5XL", "6XL",
    "ONE SIZE", "U", "OS", "1", "2", "5", "10", "38.5", "44",
];

fn ranked_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(RANKED_OR_NUMERIC.to_vec()).prop_map(str::to_string),
        0..12,
    )
}

fn any_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(RANKED_OR_NUMERIC.to_vec()).prop_map(str::to_string),
            "[A-Z]{2,4}",
        ],
        0..12,
    )
}

proptest! {
    #[test]
    fn ordering_is_idempotent(labels in any_labels()) {
        let once = order_sizes(&labels);
        let twice = order_sizes(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ordering_preserves_the_label_multiset(labels in any_labels()) {
        let ordered = order_sizes(&labels);
        let mut sorted_input = labels.clone();
        sorted_input.sort();
        let mut sorted_output = ordered;
        sorted_output.sort();
        prop_assert_eq!(sorted_input, sorted_output);
    }

    // Unknown tokens order by first appearance, so permutation invariance
    // is claimed only for labels the rank table (or numeric parse) covers.
    #[test]
    fn ordering_is_permutation_invariant_for_ranked_labels(labels in ranked_labels()) {
        let mut reversed = labels.clone();
        reversed.reverse();
        prop_assert_eq!(order_sizes(&labels), order_sizes(&reversed));
    }
}
