//! Character-level similarity by longest-common-block alignment.
//!
//! The ratio is `2·M / T`: `M` is the total length of the matching blocks found
//! by repeatedly taking the longest common block and recursing on the pieces
//! to its left and right, `T` is the combined length of both strings.
//!
//! ## Popular characters
//!
//! When the second string is 200 chars or longer, any char that occurs more
//! than `1 + len / 100` times in it is never used to seed a block. Blocks may
//! still grow across such chars once seeded. This keeps long definitions full
//! of spaces and vowels from matching on noise.

use std::collections::HashMap;

const POPULAR_MIN_LEN: usize = 200;

/// Trim surrounding whitespace and lower-case.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Similarity of two answers after normalization, in `[0, 1]`.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    raw_ratio(&a, &b)
}

/// Ratio over already-normalized char slices.
pub fn raw_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches: usize = Matcher::new(a, b)
        .matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();
    2.0 * matches as f64 / total as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

struct Matcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of every seedable char in `b`, ascending.
    b_index: HashMap<char, Vec<usize>>,
}

impl<'s> Matcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b_index.entry(c).or_default().push(j);
        }
        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_index.retain(|_, positions| positions.len() <= limit);
        }
        Matcher { a, b, b_index }
    }

    /// Longest common block within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
        // Length of the block ending at (i - 1, j), keyed by j.
        let mut run_len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_run: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            run_len = next_run;
        }

        // Grow across popular chars that could not seed a block.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Block { a: best_i, b: best_j, size: best_size }
    }

    /// Non-overlapping matching blocks, ordered by position.
    fn matching_blocks(&self) -> Vec<Block> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a, block.b));
        blocks
    }
}

/// Matching blocks between two normalized strings.
pub fn matching_blocks(a: &str, b: &str) -> Vec<Block> {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    Matcher::new(&a, &b).matching_blocks()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity_ratio("leverage", "leverage"), 1.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_characters_score_zero() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn case_and_surrounding_whitespace_are_ignored() {
        assert_eq!(
            similarity_ratio("Leverage ", "leverage"),
            similarity_ratio("leverage", "leverage"),
        );
        assert_eq!(similarity_ratio("Weeks", "  weeKS"), 1.0);
    }

    #[test]
    fn blocks_recurse_on_both_sides() {
        let blocks = matching_blocks("abxcd", "abcd");
        assert_eq!(
            blocks,
            vec![Block { a: 0, b: 0, size: 2 }, Block { a: 3, b: 2, size: 2 }]
        );
        assert!((similarity_ratio("abxcd", "abcd") - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn one_substituted_letter() {
        let r = similarity_ratio("the cat sat", "the hat sat");
        assert!((r - 10.0 / 11.0).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn typos_in_long_answer_stay_close() {
        let r = similarity_ratio("A legally binding agreement", "a legaly binding agrement");
        assert!((r - 50.0 / 52.0).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn popular_chars_do_not_seed_blocks_in_long_strings() {
        // Every char of `b` is popular, so only the run grown from (0, 0)
        // survives: 200 matched chars out of 600.
        let a = "ab".repeat(150);
        let b = format!("{}{}", "ab".repeat(100), "c".repeat(100));
        let r = similarity_ratio(&a, &b);
        assert!((r - 2.0 / 3.0).abs() < 1e-12, "got {r}");
    }
}
