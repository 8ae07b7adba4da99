use chrono::Duration;
use derive_new::new;

use crate::model::{Plan, Schedule, Timestamp, TourneyDuration};

/// Two daily-or-better events of the same speed conflict within this many
/// minutes of each other, not only on direct overlap. A higher-importance
/// event placed nearly opposite a daily on the clock cancels two dailies;
/// the calendar takes care not to produce such pairs.
pub(crate) const DAILY_OVERLAP_MINS: i64 = 690;

/// A schedule pinned to a concrete `[starts_at, ends_at)` interval.
#[derive(Debug, Clone, new)]
pub(crate) struct Fixture {
    pub schedule: Schedule,
    pub starts_at: Timestamp,
    pub duration: TourneyDuration,
}

impl Fixture {
    pub fn from_plan(plan: &Plan) -> Self {
        Self::new(plan.schedule.clone(), plan.starts_at, plan.duration)
    }

    pub fn ends_at(&self) -> Timestamp {
        self.starts_at + self.duration.duration()
    }

    fn overlaps(&self, other: &Fixture) -> bool {
        self.starts_at < other.ends_at() && other.starts_at < self.ends_at()
    }

    pub fn conflicts_with(&self, other: &Fixture) -> bool {
        let ours = &self.schedule;
        let theirs = &other.schedule;

        if ours.variant != theirs.variant {
            return false;
        }

        if ours.freq.is_daily_or_better()
            && theirs.freq.is_daily_or_better()
            && ours.same_speed(theirs)
        {
            let window = Duration::minutes(DAILY_OVERLAP_MINS);
            other.starts_at < self.ends_at() + window && self.starts_at < other.ends_at() + window
        } else {
            (ours.variant.is_exotic() || ours.has_max_rating() || ours.similar_speed(theirs))
                && ours.similar_conditions(theirs)
                && self.overlaps(other)
        }
    }
}
