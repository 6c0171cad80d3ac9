//! Iteration - loops, ranges, and iterator adapters

/// Repeat a string n times.
pub fn repeat(text: &str, count: usize) -> String {
    let mut out = String::with_capacity(text.len() * count);
    for _ in 0..count {
        out.push_str(text);
    }
    out
}

/// Sum the integers from 1 to n inclusive.
pub fn sum_to(n: u64) -> u64 {
    (1..=n).sum()
}

/// Collect the first n even numbers, starting from 2.
pub fn first_evens(n: usize) -> Vec<u64> {
    (1..).map(|i| i * 2).take(n).collect()
}
