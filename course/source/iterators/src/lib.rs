//! Iterators - lazy sequences and custom Iterator impls

/// Counts down from n to 1.
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn from(n: u32) -> Self {
        Self { remaining: n }
    }
}

impl Iterator for Countdown {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.remaining;
        self.remaining -= 1;
        Some(current)
    }
}

/// An endless fibonacci stream. Take what you need.
pub fn fibonacci() -> impl Iterator<Item = u64> {
    let mut state = (0u64, 1u64);
    std::iter::from_fn(move || {
        let next = state.0;
        state = (state.1, state.0 + state.1);
        Some(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_one() {
        let values: Vec<_> = Countdown::from(3).collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn countdown_from_zero_is_empty() {
        assert_eq!(Countdown::from(0).count(), 0);
    }

    #[test]
    fn countdown_composes_with_adapters() {
        let doubled: Vec<_> = Countdown::from(3).map(|n| n * 2).collect();
        assert_eq!(doubled, vec![6, 4, 2]);
    }

    #[test]
    fn fibonacci_is_lazy_and_endless() {
        let first_eight: Vec<_> = fibonacci().take(8).collect();
        assert_eq!(first_eight, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }
}
