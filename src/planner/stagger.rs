use chrono::Duration;
use itertools::Itertools;

use crate::model::{Plan, Timestamp, Tournament};

/// Largest offset staggering may add to a nominal start. Staying under a
/// minute keeps a staggered event clear of the next minute's starts.
pub(crate) const MAX_STAGGER_MS: i64 = 40_000;

/// Move each admitted plan into the emptiest slot within [MAX_STAGGER_MS]
/// of its nominal start. Earlier plans are placed first and later plans
/// space themselves around them.
pub(crate) fn stagger(existing: &[Tournament], admitted: Vec<Plan>) -> Vec<Plan> {
    // Every committed event pushes starts apart, scheduled or not.
    let mut starts = existing.iter().map(|tourney| tourney.starts_at).sorted().collect_vec();

    admitted
        .into_iter()
        .map(|plan| {
            let starts_at = adjusted_start(plan.starts_at, &starts);
            let at = starts.partition_point(|&start| start <= starts_at);
            starts.insert(at, starts_at);

            tracing::debug!(plan = %plan.schedule.name(), ?starts_at, "staggered plan");
            plan.starting_at(starts_at)
        })
        .collect()
}

fn adjusted_start(nominal: Timestamp, starts: &[Timestamp]) -> Timestamp {
    let from = starts.partition_point(|&start| start < nominal);
    let offsets = starts[from..]
        .iter()
        .map(|&start| (start - nominal).num_milliseconds())
        .take_while(|&offset| offset <= MAX_STAGGER_MS)
        .collect_vec();

    nominal + Duration::milliseconds(find_minimal_good_slot(0, MAX_STAGGER_MS, &offsets))
}

/// Lowest point of `[lo, hi]` at the centre of the widest gap between
/// consecutive elements of `sorted`. The gaps against both bounds count
/// double, as if each bound mirrored its nearest element; `lo` keeps ties
/// and `hi` must win outright.
pub(crate) fn find_minimal_good_slot(lo: i64, hi: i64, sorted: &[i64]) -> i64 {
    let (&first, rest) = match sorted.split_first() {
        Some(split) => split,
        None => return lo,
    };

    let mut gap_start = lo - (first - lo);
    let mut gap_len = (first - lo) * 2;

    let mut prev = first;
    for &next in rest {
        if next - prev > gap_len {
            gap_start = prev;
            gap_len = next - prev;
        }
        prev = next;
    }

    if (hi - prev) * 2 > gap_len {
        hi
    } else {
        gap_start + gap_len / 2
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::model::{Freq, Schedule, Speed, TourneyDuration, Variant};

    use super::*;

    fn at(hour: u32, min: u32) -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2024, 6, 1, hour, min, 0).unwrap())
    }

    fn plan(starts_at: Timestamp) -> Plan {
        let schedule = Schedule::new(Freq::Hourly, Speed::Blitz, Variant::Standard, starts_at);
        Plan::from_schedule(schedule, TourneyDuration::from_minutes(60))
    }

    fn unscheduled(starts_at: Timestamp) -> Tournament {
        Tournament::new(starts_at, TourneyDuration::from_minutes(60), None)
    }

    #[test]
    fn an_empty_range_yields_the_lower_bound() {
        assert_eq!(find_minimal_good_slot(0, 40_000, &[]), 0);
    }

    #[test]
    fn a_single_element_pushes_to_the_far_bound() {
        assert_eq!(find_minimal_good_slot(0, 40_000, &[0]), 40_000);
        assert_eq!(find_minimal_good_slot(0, 40_000, &[40_000]), 0);
    }

    #[test]
    fn both_bounds_taken_yields_the_midpoint() {
        assert_eq!(find_minimal_good_slot(0, 40_000, &[0, 40_000]), 20_000);
        assert_eq!(find_minimal_good_slot(0, 11, &[0, 11]), 5);
    }

    #[test]
    fn the_doubled_left_gap_keeps_ties() {
        // Both edge gaps double to 20_000, as does the interior gap; the
        // seeded left edge keeps the tie.
        assert_eq!(find_minimal_good_slot(0, 40_000, &[10_000, 30_000]), 0);
        assert_eq!(find_minimal_good_slot(0, 40_000, &[20_000]), 0);
    }

    #[test]
    fn the_right_bound_needs_a_strictly_wider_gap() {
        assert_eq!(find_minimal_good_slot(0, 40_000, &[5_000]), 40_000);
        assert_eq!(find_minimal_good_slot(0, 40_000, &[35_000]), 0);
    }

    #[test]
    fn equal_interior_gaps_resolve_to_the_leftmost() {
        assert_eq!(find_minimal_good_slot(0, 40_000, &[0, 20_000, 40_000]), 10_000);
    }

    #[test]
    fn plans_on_the_same_minute_spread_out() {
        let nominal = at(12, 0);
        let staggered = stagger(&[], vec![plan(nominal), plan(nominal), plan(nominal)]);

        let offsets = staggered
            .iter()
            .map(|plan| (plan.starts_at - nominal).num_milliseconds())
            .collect_vec();
        assert_eq!(offsets, vec![0, 40_000, 20_000]);
    }

    #[test]
    fn unscheduled_events_still_push_starts_apart() {
        let nominal = at(12, 0);
        let staggered = stagger(&[unscheduled(nominal)], vec![plan(nominal)]);

        assert_eq!(staggered[0].starts_at, nominal + Duration::milliseconds(40_000));
    }

    #[test]
    fn earlier_events_outside_the_window_are_ignored() {
        let nominal = at(12, 0);
        let before = unscheduled(at(11, 59));
        let staggered = stagger(&[before], vec![plan(nominal)]);

        assert_eq!(staggered[0].starts_at, nominal);
    }

    #[test]
    fn stagger_never_leaves_the_window() {
        let nominal = at(12, 0);
        let existing = (0..8)
            .map(|i| unscheduled(nominal + Duration::milliseconds(i * 5_000)))
            .collect_vec();

        let staggered = stagger(&existing, vec![plan(nominal), plan(nominal)]);

        for plan in staggered {
            let offset = (plan.starts_at - nominal).num_milliseconds();
            assert!((0..=MAX_STAGGER_MS).contains(&offset), "offset {offset} out of range");
        }
    }
}
