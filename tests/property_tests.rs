use huffcode::{decode, encode, CodeTable, FrequencyTable, HuffmanTree, Report, SizeReport};
use proptest::prelude::*;

/// Minimal weighted path length, summing the two lightest weights at each step.
fn optimal_cost(freq: &FrequencyTable) -> u64 {
    let mut weights: Vec<u64> = freq.iter().map(|(_, n)| n).collect();
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let a = weights.pop().unwrap();
        let b = weights.pop().unwrap();
        cost += a + b;
        weights.push(a + b);
    }
    cost
}

proptest! {
    #[test]
    fn test_roundtrip(text in "\\PC{1,300}") {
        let freq = FrequencyTable::count(&text);
        let tree = HuffmanTree::build(&freq).unwrap();
        let codes = CodeTable::generate(tree.root());

        let bits = encode(&text, &codes).unwrap();
        let decoded = decode(&bits, tree.root()).unwrap();

        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn test_prefix_free(text in "[a-p]{1,300}") {
        let tree = HuffmanTree::build(&FrequencyTable::count(&text)).unwrap();
        let codes = CodeTable::generate(tree.root());

        prop_assert!(codes.is_prefix_free());
        for (a, code_a) in &codes {
            for (b, code_b) in &codes {
                if a != b {
                    prop_assert!(!code_b.starts_with(code_a));
                }
            }
        }
    }

    #[test]
    fn test_deterministic_codes(text in "[a-f ]{1,200}") {
        let freq = FrequencyTable::count(&text);
        let first = CodeTable::generate(HuffmanTree::build(&freq).unwrap().root());
        let second = CodeTable::generate(HuffmanTree::build(&freq.clone()).unwrap().root());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_size_accounting(text in "[a-h#]{1,300}") {
        let freq = FrequencyTable::count(&text);
        let tree = HuffmanTree::build(&freq).unwrap();
        let codes = CodeTable::generate(tree.root());
        let size = SizeReport::compute(&codes, &freq);

        let by_hand: u64 = text
            .chars()
            .map(|ch| codes.get(ch).unwrap().len() as u64)
            .sum();
        prop_assert_eq!(size.message_bits, by_hand);
        prop_assert_eq!(size.message_bits, encode(&text, &codes).unwrap().len() as u64);
        prop_assert_eq!(size.table_overhead_bits, 8 * freq.len() as u64);
        prop_assert_eq!(size.total_bits, size.message_bits + size.table_overhead_bits);
    }

    #[test]
    fn test_optimal_weighted_path_length(
        counts in prop::collection::vec(1usize..50, 2..20),
    ) {
        let text: String = counts
            .iter()
            .enumerate()
            .flat_map(|(i, &n)| std::iter::repeat(char::from(b'a' + i as u8)).take(n))
            .collect();
        let freq = FrequencyTable::count(&text);
        let codes = CodeTable::generate(HuffmanTree::build(&freq).unwrap().root());

        prop_assert_eq!(SizeReport::compute(&codes, &freq).message_bits, optimal_cost(&freq));
    }

    #[test]
    fn test_report_is_fresh_per_call(a in "[a-m]{1,50}", b in "[n-z]{1,50}") {
        let first = Report::from_text(&a).unwrap();
        let second = Report::from_text(&b).unwrap();
        let again = Report::from_text(&a).unwrap();

        prop_assert!(second.codes().iter().all(|(ch, _)| ch >= 'n'));
        prop_assert_eq!(first.to_string(), again.to_string());
    }
}

#[test]
fn test_single_symbol_edge_case() {
    let report = Report::from_text("aaaa").unwrap();
    assert_eq!(report.codes().get('a'), Some(""));
    assert_eq!(report.encoded(), "");
    assert_eq!(report.decoded(), "aaaa");
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(
        Report::from_text(""),
        Err(huffcode::Error::EmptyInput)
    ));
}
