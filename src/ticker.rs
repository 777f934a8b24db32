use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// How long a status-line notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(2600);

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_notification_outlives_several_ticks() {
        assert!(NOTIFICATION_TTL > tick_duration() * 4);
    }
}
