//! Administration frequency limits.
//!
//! The caller supplies the times of earlier administrations; nothing is
//! stored here.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::protocol::{MAX_DAILY_DOSES, MIN_INTERVAL_HOURS};

/// Reason a new administration is not yet allowed.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScheduleIssue {
    #[error(
        "Last dose was given {hours_since_last:.1} h ago; doses must be at least {min} h apart (next dose allowed at {next_allowed_at})",
        min = MIN_INTERVAL_HOURS
    )]
    IntervalTooShort {
        hours_since_last: f64,
        next_allowed_at: DateTime<Utc>,
    },

    #[error(
        "{count} doses already given in the last 24 h (maximum {max}); next dose allowed at {next_allowed_at}",
        max = MAX_DAILY_DOSES
    )]
    DailyLimitReached {
        count: u32,
        next_allowed_at: DateTime<Utc>,
    },
}

impl ScheduleIssue {
    fn next_allowed_at(&self) -> DateTime<Utc> {
        match self {
            ScheduleIssue::IntervalTooShort { next_allowed_at, .. }
            | ScheduleIssue::DailyLimitReached { next_allowed_at, .. } => *next_allowed_at,
        }
    }
}

/// Outcome of a schedule check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCheck {
    /// True when the proposed administration respects every limit
    pub allowed: bool,
    /// Limits that would be broken
    pub issues: Vec<ScheduleIssue>,
    /// Earliest time all limits are satisfied, when not allowed now
    pub next_allowed_at: Option<DateTime<Utc>>,
    /// Administrations in the 24 h window ending at the proposed time
    pub doses_in_last_24h: u32,
}

/// Check a proposed administration time against earlier administrations.
///
/// Administrations recorded after `proposed` are ignored.
pub fn check_administration_schedule(
    previous: &[DateTime<Utc>],
    proposed: DateTime<Utc>,
) -> ScheduleCheck {
    let mut past: Vec<DateTime<Utc>> = previous.iter().copied().filter(|t| *t <= proposed).collect();
    past.sort();

    let mut issues = Vec::new();

    if let Some(last) = past.last() {
        let elapsed = proposed - *last;
        let min_interval = Duration::hours(i64::from(MIN_INTERVAL_HOURS));
        if elapsed < min_interval {
            issues.push(ScheduleIssue::IntervalTooShort {
                hours_since_last: elapsed.num_seconds() as f64 / 3600.0,
                next_allowed_at: *last + min_interval,
            });
        }
    }

    let window_start = proposed - Duration::hours(24);
    let in_window: Vec<DateTime<Utc>> = past.into_iter().filter(|t| *t > window_start).collect();
    let count = in_window.len() as u32;

    if count >= MAX_DAILY_DOSES {
        // A slot opens once enough of the oldest doses leave the window
        let releasing = in_window[(count - MAX_DAILY_DOSES) as usize];
        issues.push(ScheduleIssue::DailyLimitReached {
            count,
            next_allowed_at: releasing + Duration::hours(24),
        });
    }

    let next_allowed_at = issues.iter().map(ScheduleIssue::next_allowed_at).max();

    if issues.is_empty() {
        debug!(doses_in_last_24h = count, "Administration schedule ok");
    } else {
        warn!(
            doses_in_last_24h = count,
            next_allowed_at = ?next_allowed_at,
            "Administration refused by schedule limits"
        );
    }

    ScheduleCheck {
        allowed: issues.is_empty(),
        issues,
        next_allowed_at,
        doses_in_last_24h: count,
    }
}
