use super::*;

/// Importance and cadence of a scheduled tournament. Declaration order is
/// the priority order, so `Yearly` outranks everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Freq {
    Hourly,
    Daily,
    Eastern,
    Weekly,
    Weekend,
    Monthly,
    Shield,
    Marathon,
    Unique,
    Yearly,
}

impl Freq {
    pub fn is_daily_or_better(self) -> bool {
        self >= Freq::Daily
    }

    pub fn name(self) -> &'static str {
        match self {
            Freq::Hourly => "Hourly",
            Freq::Daily => "Daily",
            Freq::Eastern => "Eastern",
            Freq::Weekly => "Weekly",
            Freq::Weekend => "Weekend",
            Freq::Monthly => "Monthly",
            Freq::Shield => "Shield",
            Freq::Marathon => "Marathon",
            Freq::Unique => "Unique",
            Freq::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for Freq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
