//! Size label ordering.
//!
//! Retail size runs mix letter-coded sizes (`XS`, `M`, `3XL`) with numeric
//! ones (`38`, `42.5`). Reports list the letter block first, ranked by the
//! conventional size progression, then the numeric block ascending.

/// Rank table for letter-coded sizes; lookup is case-insensitive.
const SIZE_RANKS: [(&str, u8); 16] = [
    ("XXXS", 1),
    ("XXS", 2),
    ("XS", 3),
    ("S", 4),
    ("M", 5),
    ("L", 6),
    ("XL", 7),
    ("XXL", 8),
    ("XXXL", 9),
    ("3XL", 10),
    ("4XL", 11),
    ("5XL", 12),
    ("6XL", 13),
    ("ONE SIZE", 14),
    ("U", 15),
    ("OS", 16),
];

/// Rank assigned to tokens outside the table. Ties among these keep their
/// first-seen input order.
const UNRANKED: u8 = 99;

fn size_rank(label: &str) -> u8 {
    let upper = label.trim().to_uppercase();
    SIZE_RANKS
        .iter()
        .find(|(token, _)| *token == upper)
        .map_or(UNRANKED, |(_, rank)| *rank)
}

/// A label is numeric only when the whole of it parses as a finite number.
fn parse_numeric_label(label: &str) -> Option<f64> {
    let value: f64 = label.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Orders size labels: letter-coded block in rank order, then the numeric
/// block ascending by value. Pure and deterministic; unknown letter tokens
/// share the fallback rank and keep their input order (stable sort).
pub fn order_sizes(labels: &[String]) -> Vec<String> {
    let mut numeric: Vec<(f64, &String)> = Vec::new();
    let mut lettered: Vec<&String> = Vec::new();
    for label in labels {
        match parse_numeric_label(label) {
            Some(value) => numeric.push((value, label)),
            None => lettered.push(label),
        }
    }

    numeric.sort_by(|a, b| a.0.total_cmp(&b.0));
    lettered.sort_by_key(|label| size_rank(label));

    lettered
        .into_iter()
        .cloned()
        .chain(numeric.into_iter().map(|(_, label)| label.clone()))
        .collect()
}
