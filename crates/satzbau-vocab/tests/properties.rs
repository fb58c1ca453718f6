use proptest::prelude::*;
use satzbau_vocab::parse;

fn cell(prefix: &str, count: usize) -> String {
    let words: Vec<String> = (0..count).map(|i| format!("{prefix}{i}")).collect();
    format!("\"{}\"", words.join(", "))
}

proptest! {
    #[test]
    fn cross_product_is_complete_and_ordered(m in 1usize..5, n in 1usize..5, k in 0usize..5) {
        let row = format!("{},{},{}", cell("s", m), cell("t", n), cell("a", k));
        let entries = parse(&row);
        prop_assert_eq!(entries.len(), m * n * k.max(1));

        let mut expected = Vec::new();
        for s in 0..m {
            for t in 0..n {
                for a in 0..k.max(1) {
                    let plural = (k > 0).then(|| format!("a{a}"));
                    expected.push((format!("s{s}"), format!("t{t}"), plural));
                }
            }
        }
        let got: Vec<_> = entries
            .into_iter()
            .map(|e| (e.source, e.target, e.target_plural))
            .collect();
        prop_assert_eq!(got, expected);
    }
}
