//! Functional patterns - map, filter, and fold pipelines

use std::collections::HashMap;

/// Sum of the squares of the even numbers.
pub fn sum_of_even_squares(numbers: &[i64]) -> i64 {
    numbers
        .iter()
        .copied()
        .filter(|n| n % 2 == 0)
        .map(|n| n * n)
        .sum()
}

/// Count how often each word appears, case-insensitively.
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    text.split_whitespace().fold(HashMap::new(), |mut counts, word| {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
        counts
    })
}

/// Running totals, one partial sum per input element.
pub fn running_totals(numbers: &[i64]) -> Vec<i64> {
    numbers
        .iter()
        .scan(0, |total, n| {
            *total += n;
            Some(*total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_squares_of_evens_only() {
        assert_eq!(sum_of_even_squares(&[1, 2, 3, 4]), 20);
        assert_eq!(sum_of_even_squares(&[1, 3, 5]), 0);
        assert_eq!(sum_of_even_squares(&[]), 0);
    }

    #[test]
    fn counts_words_ignoring_case() {
        let counts = word_frequencies("the cat and The dog and the bird");
        assert_eq!(counts["the"], 3);
        assert_eq!(counts["and"], 2);
        assert_eq!(counts["cat"], 1);
        assert_eq!(counts.get("fish"), None);
    }

    #[test]
    fn accumulates_running_totals() {
        assert_eq!(running_totals(&[1, 2, 3, 4]), vec![1, 3, 6, 10]);
        assert_eq!(running_totals(&[5, -5, 5]), vec![5, 0, 5]);
        assert!(running_totals(&[]).is_empty());
    }
}
