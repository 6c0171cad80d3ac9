//! Vectors - Vec, slices, and Option-returning accessors

/// Sum of all numbers in the slice.
pub fn total(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// The largest number, or None for an empty slice.
pub fn largest(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().max()
}

/// A new vector with duplicates removed, first occurrence wins.
pub fn dedup_preserving_order(numbers: &[i64]) -> Vec<i64> {
    let mut seen = Vec::new();
    for &n in numbers {
        if !seen.contains(&n) {
            seen.push(n);
        }
    }
    seen
}

/// The slice reversed into a new vector.
pub fn reversed(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().rev().copied().collect()
}
