//! Closures - capture, Fn traits, and higher-order functions

/// Returns a closure that adds n to its argument.
pub fn make_adder(n: i64) -> impl Fn(i64) -> i64 {
    move |x| x + n
}

/// Apply f to x, twice.
pub fn apply_twice(f: impl Fn(i64) -> i64, x: i64) -> i64 {
    f(f(x))
}

/// A counter backed by a mutating closure.
pub fn make_counter() -> impl FnMut() -> u64 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}
