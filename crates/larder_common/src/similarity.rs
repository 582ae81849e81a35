//! Partial similarity scoring
//!
//! Scores how well the shorter string appears somewhere inside the longer
//! one, on a 0-100 scale. An exact substring scores 100.

use rapidfuzz::distance::lcs_seq;

/// Minimum partial score for an ingredient to count as a match
pub const MATCH_THRESHOLD: u8 = 95;

/// Best Indel ratio `2 * LCS / (len_a + len_b)` of the shorter string
/// against every same-length window of the longer string. Case-insensitive.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let width = short.len();
    let mut best = 0u8;
    for start in 0..=(long.len() - width) {
        let window = &long[start..start + width];
        let common = lcs_seq::similarity(short.iter().copied(), window.iter().copied());
        let score = indel_score(common, 2 * width);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// `100 * 2 * common / total`, rounded half to even
fn indel_score(common: usize, total: usize) -> u8 {
    let numerator = 200 * common;
    let quotient = numerator / total;
    let twice_remainder = 2 * (numerator % total);

    let rounded = if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded.min(100) as u8
}

/// Whether `query` is close enough to `candidate` to count as a match
pub fn is_match(query: &str, candidate: &str) -> bool {
    partial_ratio(query, candidate) >= MATCH_THRESHOLD
}
