//! Sequence-similarity metric used by the fuzzy classification phase.

use std::collections::HashMap;

/// Compute the normalized similarity ratio between two strings.
///
/// The ratio is twice the number of characters in matching blocks divided by
/// the combined length of both strings (Ratcliff/Obershelp): the longest
/// contiguous matching block is located, then the regions to its left and
/// right are searched recursively, and the block lengths are summed.
///
/// Returns a value between 0 and 1, where:
/// - 1 = identical strings (two empty strings count as identical)
/// - 0 = no characters in common
///
/// # Examples
///
/// ```
/// use liftrs::similarity::sequence_ratio;
///
/// let ratio = sequence_ratio("abcd", "bcde");
/// assert!((ratio - 0.75).abs() < 1e-9); // "bcd" matches, 2*3/8
/// ```
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let combined = a_chars.len() + b_chars.len();
    if combined == 0 {
        return 1.0;
    }

    // Positions of each character in b, ascending
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b_chars.iter().enumerate() {
        b_positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut pending = vec![(0, a_chars.len(), 0, b_chars.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(&a_chars, &b_positions, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / combined as f64
}

/// Find the longest contiguous matching block between `a[alo..ahi]` and
/// `b[blo..bhi]`, preferring the earliest block on equal lengths.
fn longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0usize;

    // run_lengths[j] is the length of the matching run ending at (i, j)
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut new_run_lengths = HashMap::new();

        if let Some(positions) = b_positions.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let length = j
                    .checked_sub(1)
                    .and_then(|prev| run_lengths.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                new_run_lengths.insert(j, length);

                if length > best_size {
                    best_i = i + 1 - length;
                    best_j = j + 1 - length;
                    best_size = length;
                }
            }
        }

        run_lengths = new_run_lengths;
    }

    (best_i, best_j, best_size)
}
