//! Async/await - concurrent futures on the tokio runtime

use std::time::Duration;

/// Pretend network fetch: the score arrives after a delay.
pub async fn fetch_score(player: &str, delay_ms: u64) -> (String, u32) {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    (player.to_string(), player.len() as u32 * 10)
}

/// Fetch both scores at the same time, not one after the other.
pub async fn fetch_both(a: &str, b: &str) -> Vec<(String, u32)> {
    let (first, second) = tokio::join!(fetch_score(a, 50), fetch_score(b, 50));
    vec![first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn score_is_derived_from_the_name() {
        let (name, score) = fetch_score("bob", 1).await;
        assert_eq!(name, "bob");
        assert_eq!(score, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn joined_fetches_run_concurrently() {
        let start = tokio::time::Instant::now();
        let scores = fetch_both("alice", "bob").await;

        // Both 50ms sleeps overlap; sequential awaits would read 100ms
        assert_eq!(start.elapsed(), Duration::from_millis(50));
        assert_eq!(scores[0].0, "alice");
        assert_eq!(scores[1].0, "bob");
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_awaits_add_up() {
        let start = tokio::time::Instant::now();
        fetch_score("alice", 50).await;
        fetch_score("bob", 50).await;

        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }
}
