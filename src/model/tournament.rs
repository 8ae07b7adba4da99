use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Tournament {
    pub starts_at: Timestamp,
    pub duration: TourneyDuration,
    pub schedule: Option<Schedule>,
}

impl Tournament {
    pub fn from_plan(plan: &Plan) -> Self {
        Self::new(plan.starts_at, plan.duration, Some(plan.schedule.clone()))
    }
}
