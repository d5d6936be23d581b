use std::time::Duration;

use tokio::time::{self, Instant};

/// Convert a seconds interval to whole milliseconds, truncating toward
/// zero and taking the absolute value
pub fn interval_millis(seconds: f64) -> u64 {
    (seconds * 1000.0).abs() as u64
}

/// Sleep for the full requested duration.
///
/// The wait is a deadline loop: after any wake the remaining time is
/// recomputed and the sleep resumes, so an early wakeup never shortens the
/// effective interval between command executions.
pub async fn wait_millis(millis: u64) {
    let deadline = Instant::now() + Duration::from_millis(millis);
    loop {
        if Instant::now() >= deadline {
            return;
        }
        time::sleep_until(deadline).await;
    }
}
