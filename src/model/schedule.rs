use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Schedule {
    pub freq: Freq,
    pub speed: Speed,
    pub variant: Variant,
    #[new(default)]
    pub conditions: Conditions,
    pub at: Timestamp,
}

impl Schedule {
    pub fn same_speed(&self, other: &Schedule) -> bool {
        self.speed == other.speed
    }

    pub fn similar_speed(&self, other: &Schedule) -> bool {
        self.speed.is_similar(other.speed)
    }

    pub fn similar_conditions(&self, other: &Schedule) -> bool {
        self.conditions.is_similar(&other.conditions)
    }

    pub fn has_max_rating(&self) -> bool {
        self.conditions.has_max_rating()
    }

    /// Label used in log events and error messages, e.g. "Daily Blitz" or
    /// "Weekly Atomic".
    pub fn name(&self) -> String {
        if self.variant.is_exotic() {
            format!("{} {}", self.freq, self.variant)
        } else {
            format!("{} {}", self.freq, self.speed)
        }
    }
}
