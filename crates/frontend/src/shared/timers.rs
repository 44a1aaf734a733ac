use std::time::Duration;

/// Milliseconds for browser timer APIs, saturating at `u32::MAX`
pub fn as_millis(delay: Duration) -> u32 {
    delay.as_millis().min(u32::MAX as u128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_millis() {
        assert_eq!(as_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(as_millis(Duration::ZERO), 0);
        assert_eq!(as_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
