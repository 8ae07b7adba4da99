use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Conditions {
    pub min_rating: Option<u16>,
    pub max_rating: Option<u16>,
    pub titled: bool,
}

impl Conditions {
    pub fn has_max_rating(&self) -> bool {
        self.max_rating.is_some()
    }

    pub fn is_similar(&self, other: &Conditions) -> bool {
        self == other
    }
}
