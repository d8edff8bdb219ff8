use std::cmp::Ordering;

use crate::instances::types::Instance;

/// Parse an identifier as a number. Surrounding whitespace is ignored;
/// NaN and infinities count as non-numeric.
pub fn numeric_id(id: &str) -> Option<f64> {
    id.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Sort ascending by numeric identifier.
///
/// The sort is stable. Non-numeric identifiers sort after every numeric one
/// and keep their input order.
pub fn sort_by_numeric_id(instances: &mut [Instance]) {
    instances.sort_by(|a, b| match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Text of the count label: "1 instance", otherwise "<n> instances".
pub fn count_label(count: u64) -> String {
    let noun = if count == 1 { "instance" } else { "instances" };
    format!("{count} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(instances: &[Instance]) -> Vec<&str> {
        instances.iter().map(|i| i.instance_id.as_str()).collect()
    }

    fn list(ids: &[&str]) -> Vec<Instance> {
        ids.iter().map(|id| Instance::new(*id)).collect()
    }

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let mut instances = list(&["5", "3", "10"]);
        sort_by_numeric_id(&mut instances);
        assert_eq!(ids(&instances), vec!["3", "5", "10"]);
    }

    #[test]
    fn test_sort_adjacent_pairs_ascending() {
        let mut instances = list(&["100", "-2", "7.5", "0", "42", "7", "1e2"]);
        sort_by_numeric_id(&mut instances);

        for pair in instances.windows(2) {
            assert!(pair[0].numeric_id().unwrap() <= pair[1].numeric_id().unwrap());
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let mut instances = list(&["2", "1", "2.0", "02"]);
        sort_by_numeric_id(&mut instances);
        assert_eq!(ids(&instances), vec!["1", "2", "2.0", "02"]);
    }

    #[test]
    fn test_non_numeric_ids_sort_last_in_input_order() {
        let mut instances = list(&["i-0b", "3", "i-0a", "NaN", "1"]);
        sort_by_numeric_id(&mut instances);
        assert_eq!(ids(&instances), vec!["1", "3", "i-0b", "i-0a", "NaN"]);
    }

    #[test]
    fn test_numeric_id_parsing() {
        assert_eq!(numeric_id(" 12 "), Some(12.0));
        assert_eq!(numeric_id("inf"), None);
        assert_eq!(numeric_id(""), None);
        assert_eq!(numeric_id("i-1234"), None);
    }

    #[test]
    fn test_count_label_pluralization() {
        assert_eq!(count_label(0), "0 instances");
        assert_eq!(count_label(1), "1 instance");
        assert_eq!(count_label(2), "2 instances");
    }

    fn instance_id() -> impl Strategy<Value = String> {
        prop_oneof!["-?[0-9]{1,4}(\\.[0-9]{1,2})?", "i-[0-9a-f]{1,6}"]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            .. ProptestConfig::default()
        })]

        #[test]
        fn sorted_ids_are_ascending_then_non_numeric_in_input_order(
            raw in prop::collection::vec(instance_id(), 0..24)
        ) {
            let mut instances: Vec<Instance> = raw.iter().map(Instance::new).collect();
            sort_by_numeric_id(&mut instances);

            prop_assert_eq!(instances.len(), raw.len());

            let first_non_numeric = instances
                .iter()
                .position(|i| i.numeric_id().is_none())
                .unwrap_or(instances.len());
            let (numeric, rest) = instances.split_at(first_non_numeric);

            for pair in numeric.windows(2) {
                prop_assert!(pair[0].numeric_id() <= pair[1].numeric_id());
            }
            prop_assert!(rest.iter().all(|i| i.numeric_id().is_none()));

            let expected_rest: Vec<&str> = raw
                .iter()
                .map(String::as_str)
                .filter(|id| numeric_id(id).is_none())
                .collect();
            prop_assert_eq!(ids(rest), expected_rest);
        }
    }
}
