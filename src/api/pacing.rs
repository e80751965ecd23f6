//! Request pacing policies.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

/// Decides how long to wait before the next request.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait until the next request may be issued.
    async fn pause(&self);
}

/// Sleeps for a fixed duration before every request.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        sleep(self.0).await;
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

/// Build a pacer for the given delay; a zero delay disables pacing.
pub fn pacer_for(delay: Duration) -> Box<dyn Pacer> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay(delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_fixed_delay_waits() {
        let pacer = FixedDelay(Duration::from_millis(20));
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_pacer_for_zero_is_immediate() {
        let pacer = pacer_for(Duration::ZERO);
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
