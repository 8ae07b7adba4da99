use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Plan {
    pub schedule: Schedule,
    pub starts_at: Timestamp,
    pub duration: TourneyDuration,
}

impl Plan {
    pub fn from_schedule(schedule: Schedule, duration: TourneyDuration) -> Self {
        let starts_at = schedule.at;
        Self::new(schedule, starts_at, duration)
    }

    pub fn starting_at(self, starts_at: Timestamp) -> Self {
        Self { starts_at, ..self }
    }
}
