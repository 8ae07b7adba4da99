use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Speed {
    UltraBullet,
    HyperBullet,
    Bullet,
    HippoBullet,
    SuperBlitz,
    Blitz,
    Rapid,
    Classical,
}

impl Speed {
    pub fn is_similar(self, other: Speed) -> bool {
        use Speed::*;

        match (self, other) {
            (a, b) if a == b => true,
            (UltraBullet, _) | (_, UltraBullet) => false,
            (HyperBullet | Bullet | HippoBullet, HyperBullet | Bullet | HippoBullet) => true,
            (SuperBlitz | Blitz, SuperBlitz | Blitz) => true,
            _ => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::UltraBullet => "UltraBullet",
            Speed::HyperBullet => "HyperBullet",
            Speed::Bullet => "Bullet",
            Speed::HippoBullet => "HippoBullet",
            Speed::SuperBlitz => "SuperBlitz",
            Speed::Blitz => "Blitz",
            Speed::Rapid => "Rapid",
            Speed::Classical => "Classical",
        }
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
