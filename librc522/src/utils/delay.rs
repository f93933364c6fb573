//! Blocking delay helpers.

use std::thread;
use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Block the calling thread; a zero duration returns immediately.
pub fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
