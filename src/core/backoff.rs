use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Doubling reconnect schedule: attempt `n` waits `base * 2^(n-1)`.
/// There is no cap beyond `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl ReconnectPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay before reconnect `attempt` (1-based), or `None` past the limit.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        let factor = 1u32.checked_shl(attempt - 1)?;
        self.base_delay.checked_mul(factor)
    }

    pub fn schedule(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..=self.max_attempts).map_while(|attempt| self.delay_for(attempt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_doubles() {
        let policy = ReconnectPolicy::default();
        for attempt in 1..=5u32 {
            assert_eq!(
                policy.delay_for(attempt),
                Some(Duration::from_millis(1000 * 2u64.pow(attempt - 1)))
            );
        }
    }

    #[test]
    fn test_no_sixth_attempt() {
        let policy = ReconnectPolicy::default();
        assert_eq!(policy.delay_for(6), None);
        assert_eq!(policy.delay_for(0), None);
        assert_eq!(policy.schedule().count(), 5);
    }

    #[test]
    fn test_schedule_total() {
        let total: Duration = ReconnectPolicy::default().schedule().sum();
        assert_eq!(total, Duration::from_millis(31_000));
    }

    #[test]
    fn test_huge_attempt_counts_do_not_overflow() {
        let policy = ReconnectPolicy::new(u32::MAX, Duration::from_secs(1));
        assert_eq!(policy.delay_for(40), None);
    }
}
