use chrono::Duration;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TourneyDuration(std::time::Duration);

impl TourneyDuration {
    pub fn from_minutes(minutes: u64) -> Self {
        Self(std::time::Duration::from_secs(minutes * 60))
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self(std::time::Duration::from_secs(seconds))
    }

    pub fn seconds(self) -> i64 {
        self.0.as_secs() as i64
    }

    pub fn duration(self) -> Duration {
        Duration::seconds(self.seconds())
    }
}

impl Serialize for TourneyDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.seconds())
    }
}

impl<'de> Deserialize<'de> for TourneyDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let seconds = u64::deserialize(deserializer)?;
        Ok(TourneyDuration::from_seconds(seconds))
    }
}
