use derive_new::new;
use itertools::Itertools;
use snafu::Snafu;

use crate::model::{Plan, Schedule};

use super::conflict::Fixture;

/// A candidate was blocked only by strictly lower-importance events.
/// Callers submit candidates in priority order, so this is a caller bug
/// rather than a planning outcome.
#[derive(Debug, Clone, PartialEq, Snafu, new)]
#[snafu(display("plan '{}' is blocked only by lower-importance events", plan.schedule.name()))]
pub struct Usurpation {
    pub plan: Plan,
    pub blocked_by: Vec<Schedule>,
}

/// Admit candidates left to right, dropping any that clash with an existing
/// event or an earlier admission. Accept order equals input order.
pub(crate) fn prune(existing: &[Fixture], candidates: Vec<Plan>) -> Vec<Plan> {
    let mut accepted = existing.to_vec();
    let mut admitted = Vec::with_capacity(candidates.len());

    for plan in candidates {
        let fixture = Fixture::from_plan(&plan);

        if let Some(blocking) = accepted.iter().find(|other| fixture.conflicts_with(other)) {
            tracing::debug!(
                plan = %plan.schedule.name(),
                blocked_by = %blocking.schedule.name(),
                "dropping conflicting plan",
            );
            continue;
        }

        accepted.push(fixture);
        admitted.push(plan);
    }

    admitted
}

/// Like [prune], but raises [Usurpation] when every event blocking a
/// candidate ranks strictly below it.
pub(crate) fn prune_strict(
    existing: &[Fixture], candidates: Vec<Plan>,
) -> Result<Vec<Plan>, Usurpation> {
    let mut accepted = existing.to_vec();
    let mut admitted = Vec::with_capacity(candidates.len());

    for plan in candidates {
        let fixture = Fixture::from_plan(&plan);
        let blocking = accepted
            .iter()
            .filter(|other| fixture.conflicts_with(other))
            .collect_vec();

        if blocking.is_empty() {
            accepted.push(fixture);
            admitted.push(plan);
            continue;
        }

        if blocking.iter().all(|other| other.schedule.freq < plan.schedule.freq) {
            let blocked_by = blocking.into_iter().map(|other| other.schedule.clone()).collect();
            return Err(Usurpation::new(plan, blocked_by));
        }

        tracing::debug!(plan = %plan.schedule.name(), "dropping conflicting plan");
    }

    Ok(admitted)
}
