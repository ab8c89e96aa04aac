use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reading-streak counter for one reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Identity-provider subject, opaque to this system.
    pub user_id: String,
    pub count: u32,
    pub last_read_date: NaiveDate,
}

impl Streak {
    pub fn started(user_id: String, today: NaiveDate) -> Self {
        Self {
            user_id,
            count: 1,
            last_read_date: today,
        }
    }

    /// Advance the streak for a read on `today`. Same-day reads are
    /// idempotent, a consecutive day increments, anything else resets.
    pub fn record_read(&self, today: NaiveDate) -> Self {
        let count = if today == self.last_read_date {
            self.count
        } else if today == self.last_read_date + Duration::days(1) {
            self.count + 1
        } else {
            1
        };
        Self {
            user_id: self.user_id.clone(),
            count,
            last_read_date: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_is_idempotent() {
        let s = Streak::started("u1".into(), day("2026-08-01"));
        let again = s.record_read(day("2026-08-01"));
        assert_eq!(again.count, 1);
    }

    #[test]
    fn consecutive_day_increments() {
        let s = Streak::started("u1".into(), day("2026-08-01"));
        let next = s.record_read(day("2026-08-02"));
        assert_eq!(next.count, 2);
        assert_eq!(next.last_read_date, day("2026-08-02"));
    }

    #[test]
    fn gap_resets() {
        let s = Streak {
            user_id: "u1".into(),
            count: 9,
            last_read_date: day("2026-08-01"),
        };
        assert_eq!(s.record_read(day("2026-08-04")).count, 1);
    }
}
