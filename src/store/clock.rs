//! Timestamp source for store bookkeeping.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Issues `toISOString`-style timestamps (`2024-01-20T10:30:00.000Z`).
///
/// Each timestamp is strictly later than the previous one from the same
/// clock, so `updatedAt` advances even for mutations inside one millisecond.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last: Option<DateTime<Utc>>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&mut self) -> String {
        let wall = Utc::now();
        let mut now = DateTime::from_timestamp_millis(wall.timestamp_millis()).unwrap_or(wall);
        if let Some(last) = self.last {
            if now <= last {
                now = last + Duration::milliseconds(1);
            }
        }
        self.last = Some(now);
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Account for a timestamp issued elsewhere (e.g. rehydrated state).
    /// Date-only or malformed values are ignored.
    pub fn observe(&mut self, timestamp: &str) {
        let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
            return;
        };
        let parsed = parsed.with_timezone(&Utc);
        if self.last.map_or(true, |last| parsed > last) {
            self.last = Some(parsed);
        }
    }
}
