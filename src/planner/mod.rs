use tracing::instrument;

use crate::model::{Plan, Tournament};

pub use prune::Usurpation;

use conflict::Fixture;

mod conflict;
mod prune;
mod stagger;

/// Admit the candidate plans that clash with neither the committed
/// tournaments nor each other, then stagger the admitted starts to spread
/// simultaneous load.
#[instrument(skip_all, fields(existing = existing.len(), candidates = candidates.len()))]
pub fn plan(existing: &[Tournament], candidates: Vec<Plan>) -> Vec<Plan> {
    let scheduled = scheduled_fixtures(existing);
    let admitted = prune::prune(&scheduled, candidates);
    stagger::stagger(existing, admitted)
}

/// Like [plan], but fails when a candidate is blocked only by
/// lower-importance events, which means the caller fed candidates out of
/// priority order.
#[instrument(skip_all, fields(existing = existing.len(), candidates = candidates.len()))]
pub fn plan_strict(
    existing: &[Tournament], candidates: Vec<Plan>,
) -> Result<Vec<Plan>, Usurpation> {
    let scheduled = scheduled_fixtures(existing);
    let admitted = prune::prune_strict(&scheduled, candidates)?;
    Ok(stagger::stagger(existing, admitted))
}

/// Pruning sees committed events at their scheduled start, so a stagger
/// applied when they were planned never changes which candidates conflict.
fn scheduled_fixtures(existing: &[Tournament]) -> Vec<Fixture> {
    existing
        .iter()
        .filter_map(|tourney| {
            let schedule = tourney.schedule.clone()?;
            let starts_at = schedule.at;
            Some(Fixture::new(schedule, starts_at, tourney.duration))
        })
        .collect()
}
