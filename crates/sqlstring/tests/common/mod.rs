#![allow(dead_code)]

use sqlstring::{QuoteStyle, Select};

/// Builds the SELECT used throughout the examples:
/// `SELECT c1, c2 FROM t2 WHERE c2 = 'ID2' ...`.
pub fn sample_select(quote: QuoteStyle) -> Select {
    let mut select = Select::new(quote);
    select
        .column("c1")
        .column("c2")
        .from("t2")
        .where_clause("c2 = 'ID2'");
    select
}

/// Returns the byte offsets of every occurrence of `keyword` in `sql`.
pub fn positions(sql: &str, keyword: &str) -> Vec<usize> {
    sql.match_indices(keyword).map(|(i, _)| i).collect()
}

/// Asserts that `keyword` appears exactly once and returns its offset.
pub fn once(sql: &str, keyword: &str) -> usize {
    let found = positions(sql, keyword);
    assert_eq!(
        found.len(),
        1,
        "expected exactly one '{keyword}' in: {sql}"
    );
    found[0]
}

/// Asserts that the given keywords all appear, in the given order.
pub fn assert_in_order(sql: &str, keywords: &[&str]) {
    let offsets: Vec<usize> = keywords.iter().map(|k| once(sql, k)).collect();
    assert!(
        offsets.windows(2).all(|w| w[0] < w[1]),
        "keywords {keywords:?} out of order in: {sql}"
    );
}
