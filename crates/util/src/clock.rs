//! Server-aligned timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Local wall-clock time in milliseconds since the Unix epoch.
///
/// Negative if the system clock is set before the epoch.
pub fn local_time_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
        Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
    }
}

/// Reports the current time as the server sees it.
///
/// The offset between local and server time is captured once, when the
/// clock is created from a server timestamp.
///
/// # Examples
///
/// ```
/// use spx_util::ServerClock;
///
/// let clock = ServerClock::with_local_time(1_000, 5_000);
/// assert_eq!(clock.offset_ms(), 4_000);
/// assert_eq!(clock.at(6_500), 2_500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerClock {
    offset_ms: i64,
}

impl ServerClock {
    /// Align with `server_ms`, taken as the server's time right now.
    pub fn new(server_ms: i64) -> Self {
        Self::with_local_time(server_ms, local_time_ms())
    }

    /// Align with `server_ms`, observed when the local clock read `local_ms`.
    pub fn with_local_time(server_ms: i64, local_ms: i64) -> Self {
        Self {
            offset_ms: local_ms.saturating_sub(server_ms),
        }
    }

    /// Local time minus server time.
    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    /// Server time now, in epoch milliseconds.
    pub fn now(&self) -> i64 {
        self.at(local_time_ms())
    }

    /// Server time at the local instant `local_ms`.
    pub fn at(&self, local_ms: i64) -> i64 {
        local_ms.saturating_sub(self.offset_ms)
    }
}

/// A function returning the current server time, aligned with `server_ms`.
pub fn server_time_fn(server_ms: i64) -> impl Fn() -> i64 {
    let clock = ServerClock::new(server_ms);
    move || clock.now()
}
